use yew::prelude::*;

use crate::config::EditorConfig;
use crate::editor::Editor;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Editor config={EditorConfig::default()} />
    }
}
