use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::components::SurfaceCanvas;
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::layer_actions::LayerActions;
use crate::layers_panel::LayersPanel;
use crate::scene::{EditorAction, EditorState, LayerId, RenderingSurface, SceneSurface};
use crate::types::MoveDirection;
use crate::utils::{random_color, read_data_url};

impl Reducible for EditorState<SceneSurface> {
    type Action = EditorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct EditorProps {
    #[prop_or_default]
    pub config: EditorConfig,
}

#[function_component(Editor)]
pub fn editor(props: &EditorProps) -> Html {
    // State
    let state = {
        let config = props.config.clone();
        use_reducer(move || EditorState::new(SceneSurface::new(), config))
    };

    // Refs
    let uploader_ref = use_node_ref();

    // Mount / unmount and the Delete key
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(EditorAction::Mount);

            let listener = window().and_then(|w| w.document()).map(|document| {
                let dispatcher = dispatcher.clone();
                EventListener::new(&document, "keydown", move |event| {
                    if let Some(keyboard_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                        if keyboard_event.key() == "Delete" {
                            dispatcher.dispatch(EditorAction::DeleteActive);
                        }
                    }
                })
            });
            if listener.is_none() {
                log::warn!("no document, Delete key will not remove layers");
            }

            move || {
                drop(listener);
                dispatcher.dispatch(EditorAction::Unmount);
            }
        });
    }

    let on_add_rectangle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(EditorAction::AddRectangle {
                fill: random_color(),
            });
        })
    };

    // Open the hidden file picker
    let on_upload_image = {
        let uploader_ref = uploader_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = uploader_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_uploader_change = {
        let dispatcher = state.dispatcher();
        let token = state.mount_token();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            // allow picking the same file again
            input.set_value("");

            let Some(file) = file else {
                log::debug!("{}", EditorError::NoFileSelected);
                return;
            };

            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_data_url(file).await {
                    Ok((file_name, data_url)) => dispatcher.dispatch(EditorAction::AddImage {
                        token,
                        file_name,
                        data_url,
                    }),
                    Err(err) => log::error!("image upload abandoned: {}", err),
                }
            });
        })
    };

    // Selection reported by the canvas
    let on_shape_select = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: LayerId| dispatcher.dispatch(EditorAction::Select(id)))
    };

    let on_layer_click = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: LayerId| dispatcher.dispatch(EditorAction::SelectFromList(id)))
    };

    let on_layer_move = {
        let dispatcher = state.dispatcher();
        Callback::from(move |direction: MoveDirection| {
            dispatcher.dispatch(EditorAction::Move(direction))
        })
    };

    let config = state.config();
    let surface = state.surface();
    let (width, height) = surface
        .options()
        .map(|options| (options.width, options.height))
        .unwrap_or((config.canvas_width, config.canvas_height));

    html! {
        <div class="editor flex flex-col gap-3 p-4 w-full h-screen bg-gray-100">
            <div class="flex gap-2">
                <button
                    onclick={on_upload_image}
                    class="px-3 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50"
                >
                    {"Upload Image"}
                </button>
                <input
                    type="file"
                    style="display: none;"
                    accept={config.image.accept.clone()}
                    onchange={on_uploader_change}
                    ref={uploader_ref}
                />
                <button
                    onclick={on_add_rectangle}
                    class="px-3 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50"
                >
                    {"Add Rect"}
                </button>
            </div>

            <div class="main-panel flex gap-4">
                <SurfaceCanvas
                    {width}
                    {height}
                    objects={surface.objects().to_vec()}
                    active={surface.active()}
                    render_version={surface.render_version()}
                    on_select={on_shape_select}
                />

                <div class="right w-64 flex-none bg-white border border-gray-300 p-4 flex flex-col gap-4">
                    <LayerActions
                        on_move={on_layer_move}
                        enabled={state.active_index().is_some()}
                    />
                    <LayersPanel
                        layers={state.layers().clone()}
                        active={state.active_index()}
                        on_select={on_layer_click}
                    />
                </div>
            </div>
        </div>
    }
}
