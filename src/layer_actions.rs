use yew::prelude::*;

use crate::types::MoveDirection;

#[derive(Properties, PartialEq)]
pub struct LayerActionsProps {
    pub on_move: Callback<MoveDirection>,
    #[prop_or(true)]
    pub enabled: bool,
}

/// Top / up / down / bottom buttons for the active layer
#[function_component(LayerActions)]
pub fn layer_actions(props: &LayerActionsProps) -> Html {
    html! {
        <div class="layer-actions pb-3 border-b border-gray-200">
            <p class="text-sm font-semibold mb-2">{"Layer Actions"}</p>
            <div class="flex gap-2">
                {
                    MoveDirection::ALL.iter().map(|&direction| {
                        let on_move = props.on_move.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            // keep the click away from the canvas
                            e.stop_propagation();
                            on_move.emit(direction);
                        });

                        html! {
                            <button
                                key={direction.to_kebab_case()}
                                {onclick}
                                disabled={!props.enabled}
                                title={direction.title()}
                                data-testid={format!("layer-move-{}", direction.to_kebab_case())}
                                class="w-8 h-8 flex items-center justify-center rounded border border-gray-300 bg-white hover:bg-gray-50 disabled:opacity-40"
                            >
                                <svg width="16" height="16" viewBox="0 0 16 16" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round">
                                    <path d={direction.icon_path()} />
                                </svg>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
