use yew::prelude::*;

use crate::scene::{LayerId, LayerStack, SurfaceObject};

#[derive(Properties, PartialEq)]
pub struct LayersPanelProps {
    pub layers: LayerStack,
    pub active: Option<usize>,
    pub on_select: Callback<LayerId>,
}

/// Layer list, front-most layer first
#[function_component(LayersPanel)]
pub fn layers_panel(props: &LayersPanelProps) -> Html {
    html! {
        <div class="layers flex-1 overflow-y-auto">
            <h2 class="text-lg font-semibold pb-3 mb-4 border-b border-gray-200">{"Layers"}</h2>
            <div class="space-y-2">
                {
                    props.layers.iter().enumerate().rev().map(|(idx, layer)| {
                        let is_active = props.active == Some(idx);
                        let id = layer.id();
                        let on_select = props.on_select.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            on_select.emit(id);
                        });

                        let swatch = match layer.object() {
                            SurfaceObject::Rect(rect) => html! {
                                <div
                                    class="w-6 h-6 rounded border border-gray-300"
                                    style={format!("background-color: {}", rect.fill.to_hex())}
                                />
                            },
                            SurfaceObject::Image(_) => html! {
                                <div class="w-6 h-6 rounded border border-gray-300 flex items-center justify-center">
                                    // Picture icon
                                    <svg width="14" height="14" viewBox="0 0 14 14" fill="none" stroke="currentColor" stroke-width="1.5">
                                        <rect x="1.5" y="2.5" width="11" height="9" rx="1"/>
                                        <path d="M2 10 L5.5 6.5 L8 9 L9.5 7.5 L12 10" stroke-linejoin="round"/>
                                    </svg>
                                </div>
                            },
                        };

                        html! {
                            <div
                                key={id.0}
                                {onclick}
                                data-testid={format!("layer-row-{}", id.0)}
                                title={layer.object().kind_label()}
                                class={classes!(
                                    "layer",
                                    "flex",
                                    "items-center",
                                    "gap-2",
                                    "p-2",
                                    "rounded",
                                    "cursor-pointer",
                                    "border",
                                    "border-gray-200",
                                    "hover:bg-gray-100",
                                    "hover:border-gray-300",
                                    if is_active { "active bg-blue-100 border-blue-300" } else { "bg-white" }
                                )}
                            >
                                {swatch}
                                <span class="text-sm">
                                    {format!("{}: {}", idx, layer.name())}
                                </span>
                            </div>
                        }
                    }).collect::<Html>()
                }

                if props.layers.is_empty() {
                    <p class="text-sm text-gray-500 text-center py-4">
                        {"No layers yet. Add a rectangle or upload an image."}
                    </p>
                }
            </div>
        </div>
    }
}
