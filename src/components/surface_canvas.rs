use crate::scene::{ImageObject, LayerId, PlacedObject, RectObject, SurfaceObject};
use crate::utils::svg_transform;
use yew::prelude::*;

/// Distance of the rotation handle above the object's top edge
const ROTATION_HANDLE_OFFSET: f32 = 20.0;
const ROTATION_HANDLE_RADIUS: f32 = 5.0;

/// Props for the canvas surface component
#[derive(Properties, Clone, PartialEq)]
pub struct SurfaceCanvasProps {
    #[prop_or(800)]
    pub width: u32,

    #[prop_or(600)]
    pub height: u32,

    /// Objects in stacking order, back to front
    #[prop_or_default]
    pub objects: Vec<PlacedObject>,

    /// Object drawn with selection chrome
    #[prop_or_default]
    pub active: Option<LayerId>,

    /// Render version - increment to trigger re-render
    #[prop_or(0)]
    pub render_version: u32,

    /// Fired with the id of the object under the pointer
    #[prop_or_default]
    pub on_select: Callback<LayerId>,
}

/// SVG drawing of the scene surface; later objects paint over earlier ones
#[function_component(SurfaceCanvas)]
pub fn surface_canvas(props: &SurfaceCanvasProps) -> Html {
    let objects = props
        .objects
        .iter()
        .map(|placed| {
            let id = placed.id;
            let onmousedown = {
                let on_select = props.on_select.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_select.emit(id);
                })
            };

            match &placed.object {
                SurfaceObject::Rect(rect) => render_rect(id, rect, onmousedown),
                SurfaceObject::Image(image) => render_image(id, image, onmousedown),
            }
        })
        .collect::<Html>();

    let selection = props
        .active
        .and_then(|id| props.objects.iter().find(|o| o.id == id))
        .map(|placed| match &placed.object {
            SurfaceObject::Rect(rect) => render_rect_selection(rect),
            // image extents are only known to the browser
            SurfaceObject::Image(_) => html! {},
        })
        .unwrap_or_default();

    html! {
        <svg
            width={props.width.to_string()}
            height={props.height.to_string()}
            data-testid="main-canvas"
            data-render-version={props.render_version.to_string()}
            data-object-order={props.objects.iter().map(|o| o.id.0.to_string()).collect::<Vec<_>>().join(",")}
            class="canvas-dots"
            style="border: 1px solid #ccc; background-color: white;"
        >
            {objects}
            {selection}
        </svg>
    }
}

fn render_rect(id: LayerId, rect: &RectObject, onmousedown: Callback<MouseEvent>) -> Html {
    html! {
        <rect
            key={id.0}
            x={rect.position.x.to_string()}
            y={rect.position.y.to_string()}
            width={rect.size.x.to_string()}
            height={rect.size.y.to_string()}
            fill={rect.fill.to_hex()}
            data-object-caching={rect.object_caching.to_string()}
            style="cursor: pointer;"
            {onmousedown}
        />
    }
}

fn render_image(id: LayerId, image: &ImageObject, onmousedown: Callback<MouseEvent>) -> Html {
    html! {
        <image
            key={id.0}
            href={image.href.clone()}
            transform={svg_transform(image.position, image.scale)}
            style="cursor: pointer;"
            {onmousedown}
        />
    }
}

fn render_rect_selection(rect: &RectObject) -> Html {
    let top_center_x = rect.position.x + rect.size.x / 2.0;
    let handle_y = rect.position.y - ROTATION_HANDLE_OFFSET;

    html! {
        <g data-testid="selection-outline" style="pointer-events: none;">
            <rect
                x={rect.position.x.to_string()}
                y={rect.position.y.to_string()}
                width={rect.size.x.to_string()}
                height={rect.size.y.to_string()}
                fill="none"
                stroke="#3b82f6"
                stroke-width="2"
            />
            if rect.rotatable {
                <>
                <line
                    x1={top_center_x.to_string()}
                    y1={rect.position.y.to_string()}
                    x2={top_center_x.to_string()}
                    y2={handle_y.to_string()}
                    stroke="#3b82f6"
                    stroke-width="1"
                />
                <circle
                    data-testid="rotation-handle"
                    cx={top_center_x.to_string()}
                    cy={handle_y.to_string()}
                    r={ROTATION_HANDLE_RADIUS.to_string()}
                    fill="white"
                    stroke="#3b82f6"
                    stroke-width="1"
                />
                </>
            }
        </g>
    }
}
