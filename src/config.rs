use crate::scene::{SurfaceOptions, Vec2};

/// Geometry and flags for newly added rectangles
#[derive(Clone, Debug, PartialEq)]
pub struct RectDefaults {
    pub position: Vec2,
    pub size: Vec2,
    pub object_caching: bool,
    pub rotatable: bool,
}

impl Default for RectDefaults {
    fn default() -> Self {
        Self {
            position: Vec2::new(100.0, 50.0),
            size: Vec2::new(200.0, 100.0),
            object_caching: false,
            rotatable: true,
        }
    }
}

/// Placement for newly uploaded images
#[derive(Clone, Debug, PartialEq)]
pub struct ImageDefaults {
    pub position: Vec2,
    pub scale: Vec2,
    /// Value of the file input's `accept` attribute
    pub accept: String,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self {
            position: Vec2::new(100.0, 100.0),
            scale: Vec2::splat(0.25),
            accept: ".jpg,.jpeg,.svg,.png".to_string(),
        }
    }
}

/// Editor-wide settings
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub preserve_object_stacking: bool,
    pub rect: RectDefaults,
    pub image: ImageDefaults,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            preserve_object_stacking: true,
            rect: RectDefaults::default(),
            image: ImageDefaults::default(),
        }
    }
}

impl EditorConfig {
    pub fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            preserve_object_stacking: self.preserve_object_stacking,
            width: self.canvas_width,
            height: self.canvas_height,
        }
    }
}
