use crate::error::{EditorError, EditorResult};
use crate::scene::{Color, Vec2};
use gloo::file::File;

/// Random opaque fill for a new rectangle; falls back to mid grey if no entropy is available
pub fn random_color() -> Color {
    let mut rgb = [0u8; 3];
    match getrandom::getrandom(&mut rgb) {
        Ok(()) => Color::from_rgb8(rgb[0], rgb[1], rgb[2]),
        Err(err) => {
            log::warn!("no randomness for fill color: {}", err);
            Color::from_rgb8(0x80, 0x80, 0x80)
        }
    }
}

/// Read an uploaded file into a `data:` URL
pub async fn read_data_url(file: web_sys::File) -> EditorResult<(String, String)> {
    let file = File::from(file);
    let name = file.name();
    match gloo::file::futures::read_as_data_url(&file).await {
        Ok(url) => Ok((name, url)),
        Err(err) => Err(EditorError::Decode {
            file: name,
            reason: err.to_string(),
        }),
    }
}

/// SVG `transform` placing an object at `position` with `scale`
pub fn svg_transform(position: Vec2, scale: Vec2) -> String {
    format!(
        "translate({} {}) scale({} {})",
        position.x, position.y, scale.x, scale.y
    )
}
