use super::types::{Color, Vec2};
use std::fmt;

/// Stable identity of a layer, unique within one editor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

/// A filled rectangle as placed on the canvas
#[derive(Clone, Debug, PartialEq)]
pub struct RectObject {
    pub position: Vec2,
    pub size: Vec2,
    pub fill: Color,
    /// Whether the surface may cache a rasterized copy of the object
    pub object_caching: bool,
    /// Whether a rotation handle is shown while the object is active
    pub rotatable: bool,
}

/// An uploaded image, kept as a data URL
#[derive(Clone, Debug, PartialEq)]
pub struct ImageObject {
    pub position: Vec2,
    pub scale: Vec2,
    pub href: String,
}

/// Drawable description handed to the rendering surface
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceObject {
    Rect(RectObject),
    Image(ImageObject),
}

impl SurfaceObject {
    /// Short label used by the layers list
    pub fn kind_label(&self) -> &'static str {
        match self {
            SurfaceObject::Rect(_) => "rect",
            SurfaceObject::Image(_) => "image",
        }
    }
}

/// A drawable object together with its identity
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    id: LayerId,
    name: String,
    object: SurfaceObject,
}

impl Layer {
    pub fn new(id: LayerId, name: impl Into<String>, object: SurfaceObject) -> Self {
        Self {
            id,
            name: name.into(),
            object,
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Display name; not guaranteed to be unique
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn object(&self) -> &SurfaceObject {
        &self.object
    }
}

/// Hands out layer ids and default names for one editor instance
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NameAllocator {
    next: u64,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next id along with its counter value
    pub fn next_id(&mut self) -> (LayerId, u64) {
        let count = self.next;
        self.next += 1;
        (LayerId(count), count)
    }

    /// Reserve an id and the matching `rect_<n>` name
    pub fn next_rect(&mut self) -> (LayerId, String) {
        let (id, count) = self.next_id();
        (id, format!("rect_{}", count))
    }
}
