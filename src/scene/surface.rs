use super::layer::{Layer, LayerId, SurfaceObject};
use super::stack::LayerStack;

/// Options passed to [`RenderingSurface::initialize`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceOptions {
    /// Keep the selected object at its z-order instead of raising it
    pub preserve_object_stacking: bool,
    pub width: u32,
    pub height: u32,
}

/// The drawing engine the editor pushes objects and stacking order into
pub trait RenderingSurface {
    fn initialize(&mut self, options: SurfaceOptions);
    fn add(&mut self, layer: &Layer);
    fn remove(&mut self, id: LayerId);
    fn set_active(&mut self, id: Option<LayerId>);
    fn active(&self) -> Option<LayerId>;
    /// Place an object at an absolute z-order position
    fn move_to(&mut self, id: LayerId, index: usize);
    fn render_all(&mut self);
}

/// Push the stack's order out to the surface, one call per layer from the back up
pub fn sync_z_order<S: RenderingSurface + ?Sized>(surface: &mut S, stack: &LayerStack) {
    for (index, layer) in stack.iter().enumerate() {
        surface.move_to(layer.id(), index);
    }
}

/// An object as held by [`SceneSurface`]
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedObject {
    pub id: LayerId,
    pub object: SurfaceObject,
}

/// Retained-mode surface: a z-ordered object list drawn by the canvas component
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneSurface {
    options: Option<SurfaceOptions>,
    objects: Vec<PlacedObject>,
    active: Option<LayerId>,
    render_version: u32,
}

impl SceneSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> Option<SurfaceOptions> {
        self.options
    }

    pub fn is_initialized(&self) -> bool {
        self.options.is_some()
    }

    /// Objects from back to front
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// Bumped on every [`RenderingSurface::render_all`]
    pub fn render_version(&self) -> u32 {
        self.render_version
    }

    fn position(&self, id: LayerId) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }
}

impl RenderingSurface for SceneSurface {
    fn initialize(&mut self, options: SurfaceOptions) {
        if self.is_initialized() {
            log::debug!("surface reinitialized, clearing {} objects", self.objects.len());
        }
        self.options = Some(options);
        self.objects.clear();
        self.active = None;
    }

    fn add(&mut self, layer: &Layer) {
        self.objects.push(PlacedObject {
            id: layer.id(),
            object: layer.object().clone(),
        });
    }

    fn remove(&mut self, id: LayerId) {
        if let Some(pos) = self.position(id) {
            self.objects.remove(pos);
        }
        if self.active == Some(id) {
            self.active = None;
        }
    }

    fn set_active(&mut self, id: Option<LayerId>) {
        self.active = id.filter(|&id| self.position(id).is_some());
    }

    fn active(&self) -> Option<LayerId> {
        self.active
    }

    fn move_to(&mut self, id: LayerId, index: usize) {
        if let Some(pos) = self.position(id) {
            let object = self.objects.remove(pos);
            let index = index.min(self.objects.len());
            self.objects.insert(index, object);
        }
    }

    fn render_all(&mut self) {
        self.render_version = self.render_version.wrapping_add(1);
    }
}
