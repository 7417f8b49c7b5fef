use super::layer::{ImageObject, Layer, LayerId, NameAllocator, RectObject, SurfaceObject};
use super::lifecycle::{MountState, MountToken};
use super::stack::LayerStack;
use super::surface::{sync_z_order, RenderingSurface};
use super::types::Color;
use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::types::MoveDirection;

/// Everything the editor can be asked to do
#[derive(Clone, Debug, PartialEq)]
pub enum EditorAction {
    Mount,
    Unmount,
    AddRectangle { fill: Color },
    AddImage { token: MountToken, file_name: String, data_url: String },
    /// Selection reported by the rendering surface
    Select(LayerId),
    /// Click on a row of the layers list
    SelectFromList(LayerId),
    DeleteActive,
    Move(MoveDirection),
}

/// Layer stack, active index and the surface they drive.
///
/// The active index always names a layer in the stack or is `None`. When the
/// active layer is removed the selection is cleared; when a layer below it is
/// removed the index shifts down so it keeps naming the same layer.
#[derive(Clone, Debug)]
pub struct EditorState<S> {
    config: EditorConfig,
    layers: LayerStack,
    active: Option<usize>,
    names: NameAllocator,
    lifecycle: MountState,
    surface: S,
}

impl<S: RenderingSurface> EditorState<S> {
    pub fn new(surface: S, config: EditorConfig) -> Self {
        Self {
            config,
            layers: LayerStack::new(),
            active: None,
            names: NameAllocator::new(),
            lifecycle: MountState::new(),
            surface,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.active.and_then(|index| self.layers.get(index))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    /// Token to hand to work that completes after the current event
    pub fn mount_token(&self) -> MountToken {
        self.lifecycle.token()
    }

    pub fn apply(&mut self, action: EditorAction) {
        match action {
            EditorAction::Mount => self.mount(),
            EditorAction::Unmount => self.unmount(),
            EditorAction::AddRectangle { fill } => {
                self.add_rectangle(fill);
            }
            EditorAction::AddImage {
                token,
                file_name,
                data_url,
            } => {
                if let Err(err) = self.add_image(token, file_name, data_url) {
                    log::warn!("dropping image upload: {}", err);
                }
            }
            EditorAction::Select(id) => self.select(id),
            EditorAction::SelectFromList(id) => self.select_from_list(id),
            EditorAction::DeleteActive => {
                self.delete_active();
            }
            EditorAction::Move(direction) => {
                self.move_active(direction);
            }
        }
    }

    pub fn mount(&mut self) {
        if self.lifecycle.mount() {
            self.surface.initialize(self.config.surface_options());
            log::info!(
                "editor mounted ({}x{})",
                self.config.canvas_width,
                self.config.canvas_height
            );
        }
    }

    /// Leave the mounted state and discard every layer
    pub fn unmount(&mut self) {
        if self.lifecycle.unmount() {
            log::info!("editor unmounted, discarding {} layers", self.layers.len());
            self.layers = LayerStack::new();
            self.active = None;
            self.names = NameAllocator::new();
        }
    }

    pub fn add_rectangle(&mut self, fill: Color) -> LayerId {
        let (id, name) = self.names.next_rect();
        let defaults = &self.config.rect;
        let object = SurfaceObject::Rect(RectObject {
            position: defaults.position,
            size: defaults.size,
            fill,
            object_caching: defaults.object_caching,
            rotatable: defaults.rotatable,
        });
        self.add_layer(Layer::new(id, name, object));
        id
    }

    /// Commit a decoded upload, unless the mount it started in is gone
    pub fn add_image(
        &mut self,
        token: MountToken,
        file_name: String,
        data_url: String,
    ) -> EditorResult<LayerId> {
        if !self.lifecycle.is_live(token) {
            return Err(EditorError::Unmounted);
        }
        let (id, _) = self.names.next_id();
        let object = SurfaceObject::Image(ImageObject {
            position: self.config.image.position,
            scale: self.config.image.scale,
            href: data_url,
        });
        self.add_layer(Layer::new(id, file_name, object));
        Ok(id)
    }

    fn add_layer(&mut self, layer: Layer) {
        let id = layer.id();
        log::info!("adding {} `{}` as {}", layer.object().kind_label(), layer.name(), id);
        self.surface.add(&layer);
        self.surface.set_active(Some(id));
        self.active = Some(self.layers.append(layer));
    }

    /// Drop a layer from the stack and repair the active index
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        let Some((removed, _)) = self.layers.remove(id) else {
            log::debug!("remove: {} not in stack", id);
            return false;
        };
        self.active = match self.active {
            Some(active) if active == removed => None,
            Some(active) if active > removed => Some(active - 1),
            other => other,
        };
        true
    }

    /// Remove the surface's active object, then the matching layer
    pub fn delete_active(&mut self) -> Option<LayerId> {
        if !self.lifecycle.is_mounted() {
            return None;
        }
        let id = self.surface.active()?;
        self.surface.remove(id);
        self.remove_layer(id);
        log::debug!("deleted {}", id);
        Some(id)
    }

    /// Make a layer active in both the stack and the surface
    pub fn select(&mut self, id: LayerId) {
        self.active = self.layers.index_of(id);
        self.surface.set_active(self.active.map(|_| id));
        self.surface.render_all();
        log::debug!("selected {} at {:?}", id, self.active);
    }

    pub fn select_from_list(&mut self, id: LayerId) {
        self.select(id);
    }

    /// Reorder the active layer, then resync the whole surface stacking order
    pub fn move_active(&mut self, direction: MoveDirection) -> bool {
        let Some(id) = self.active_layer().map(|l| l.id()) else {
            log::debug!("move {}: nothing selected", direction.to_kebab_case());
            return false;
        };
        let changed = match direction {
            MoveDirection::Top => self.layers.move_top(id),
            MoveDirection::Up => self.layers.move_up(id),
            MoveDirection::Down => self.layers.move_down(id),
            MoveDirection::Bottom => self.layers.move_bottom(id),
        };
        self.active = self.layers.index_of(id);
        log::debug!(
            "move {} {}: changed={} now at {:?}",
            direction.to_kebab_case(),
            id,
            changed,
            self.active
        );
        sync_z_order(&mut self.surface, &self.layers);
        self.surface.render_all();
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::surface::testing::{RecordingSurface, SurfaceCall};
    use crate::scene::SceneSurface;

    fn mounted() -> EditorState<RecordingSurface> {
        let mut state = EditorState::new(RecordingSurface::default(), EditorConfig::default());
        state.apply(EditorAction::Mount);
        state
    }

    fn with_rects(count: usize) -> (EditorState<RecordingSurface>, Vec<LayerId>) {
        let mut state = mounted();
        let ids = (0..count).map(|_| state.add_rectangle(Color::black())).collect();
        (state, ids)
    }

    fn surface_order(state: &EditorState<RecordingSurface>) -> Vec<LayerId> {
        state.surface().inner.objects().iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_mount_initializes_surface_once() {
        let mut state = mounted();
        state.apply(EditorAction::Mount);
        let inits = state
            .surface()
            .calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Initialize(_)))
            .count();
        assert_eq!(inits, 1);
        assert_eq!(
            state.surface().inner.options(),
            Some(EditorConfig::default().surface_options())
        );
    }

    #[test]
    fn test_add_rectangle() {
        let (state, ids) = with_rects(2);
        assert_eq!(state.layers().len(), 2);
        assert_eq!(state.active_index(), Some(1));
        assert_eq!(state.surface().active(), Some(ids[1]));

        let names: Vec<&str> = state.layers().iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["rect_0", "rect_1"]);

        match state.active_layer().map(|l| l.object()) {
            Some(SurfaceObject::Rect(rect)) => {
                assert!(!rect.object_caching);
                assert!(rect.rotatable);
            }
            other => panic!("expected a rect, got {:?}", other),
        }
    }

    #[test]
    fn test_move_keeps_selection_on_same_layer() {
        let (mut state, ids) = with_rects(3);
        state.select(ids[0]);

        assert!(state.move_active(MoveDirection::Up));
        assert_eq!(state.active_index(), Some(1));
        assert_eq!(state.active_layer().map(|l| l.id()), Some(ids[0]));

        assert!(state.move_active(MoveDirection::Top));
        assert_eq!(state.active_index(), Some(2));

        assert!(!state.move_active(MoveDirection::Up));
        assert_eq!(state.active_index(), Some(2));

        assert!(state.move_active(MoveDirection::Bottom));
        assert_eq!(state.active_index(), Some(0));
        assert!(!state.move_active(MoveDirection::Down));
    }

    #[test]
    fn test_move_resyncs_every_layer() {
        let (mut state, ids) = with_rects(3);
        state.select(ids[2]);
        state.surface.calls.clear();

        state.apply(EditorAction::Move(MoveDirection::Bottom));

        let expected = vec![(ids[2], 0), (ids[0], 1), (ids[1], 2)];
        assert_eq!(state.surface().move_calls(), expected);
        assert_eq!(state.surface().calls.last(), Some(&SurfaceCall::RenderAll));
        assert_eq!(surface_order(&state), state.layers().ids());
    }

    #[test]
    fn test_move_without_selection_does_nothing() {
        let (mut state, ids) = with_rects(2);
        state.remove_layer(ids[1]);
        assert_eq!(state.active_index(), None);
        state.surface.calls.clear();

        assert!(!state.move_active(MoveDirection::Top));
        assert!(state.surface().calls.is_empty());
    }

    #[test]
    fn test_remove_active_clears_selection() {
        let (mut state, ids) = with_rects(3);
        assert!(state.remove_layer(ids[2]));
        assert_eq!(state.active_index(), None);
        assert_eq!(state.layers().len(), 2);
    }

    #[test]
    fn test_remove_below_active_shifts_selection() {
        let (mut state, ids) = with_rects(3);
        assert!(state.remove_layer(ids[0]));
        assert_eq!(state.active_index(), Some(1));
        assert_eq!(state.active_layer().map(|l| l.id()), Some(ids[2]));
    }

    #[test]
    fn test_remove_above_active_keeps_selection() {
        let (mut state, ids) = with_rects(3);
        state.select(ids[0]);
        assert!(state.remove_layer(ids[2]));
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let (mut state, _) = with_rects(2);
        assert!(!state.remove_layer(LayerId(99)));
        assert_eq!(state.layers().len(), 2);
        assert_eq!(state.active_index(), Some(1));
    }

    #[test]
    fn test_delete_active_removes_from_surface_then_stack() {
        let (mut state, ids) = with_rects(2);
        state.surface.calls.clear();

        assert_eq!(state.delete_active(), Some(ids[1]));
        assert_eq!(state.surface().calls, vec![SurfaceCall::Remove(ids[1])]);
        assert_eq!(state.layers().ids(), vec![ids[0]]);
        assert_eq!(surface_order(&state), vec![ids[0]]);

        // nothing is active on the surface any more
        assert_eq!(state.delete_active(), None);
        assert_eq!(state.layers().len(), 1);
    }

    #[test]
    fn test_delete_ignored_while_unmounted() {
        let (mut state, _) = with_rects(1);
        state.apply(EditorAction::Unmount);
        state.apply(EditorAction::DeleteActive);
        assert_eq!(state.layers().len(), 1);
    }

    #[test]
    fn test_select_from_surface_and_list() {
        let (mut state, ids) = with_rects(3);

        state.apply(EditorAction::Select(ids[0]));
        assert_eq!(state.active_index(), Some(0));

        state.surface.calls.clear();
        state.apply(EditorAction::SelectFromList(ids[1]));
        assert_eq!(state.active_index(), Some(1));
        assert_eq!(
            state.surface().calls,
            vec![SurfaceCall::SetActive(Some(ids[1])), SurfaceCall::RenderAll]
        );

        state.apply(EditorAction::Select(LayerId(77)));
        assert_eq!(state.active_index(), None);
        assert_eq!(state.surface().active(), None);
    }

    #[test]
    fn test_canvas_select_then_delete_removes_picked_layer() {
        let (mut state, ids) = with_rects(2);

        state.apply(EditorAction::Select(ids[0]));
        assert_eq!(state.surface().active(), Some(ids[0]));

        state.apply(EditorAction::DeleteActive);
        assert_eq!(state.layers().ids(), vec![ids[1]]);
        assert_eq!(surface_order(&state), vec![ids[1]]);
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn test_surface_active_follows_selection() {
        fn assert_in_step(state: &EditorState<RecordingSurface>) {
            assert_eq!(
                state.surface().active(),
                state.active_layer().map(|l| l.id())
            );
        }

        let mut state = mounted();
        assert_in_step(&state);

        let actions = [
            EditorAction::AddRectangle { fill: Color::black() },
            EditorAction::AddRectangle { fill: Color::black() },
            EditorAction::AddRectangle { fill: Color::black() },
            EditorAction::Select(LayerId(0)),
            EditorAction::Move(MoveDirection::Top),
            EditorAction::SelectFromList(LayerId(1)),
            EditorAction::Move(MoveDirection::Up),
            EditorAction::Move(MoveDirection::Bottom),
            EditorAction::Select(LayerId(2)),
            EditorAction::DeleteActive,
            EditorAction::SelectFromList(LayerId(0)),
            EditorAction::Move(MoveDirection::Down),
            EditorAction::Select(LayerId(42)),
            EditorAction::AddRectangle { fill: Color::black() },
        ];
        for action in actions {
            state.apply(action);
            assert_in_step(&state);
        }
    }

    #[test]
    fn test_remount_starts_empty() {
        let (mut state, _) = with_rects(2);

        state.apply(EditorAction::Unmount);
        assert!(state.layers().is_empty());
        assert_eq!(state.active_index(), None);

        state.apply(EditorAction::Mount);
        assert_eq!(state.layers().len(), state.surface().inner.objects().len());
        assert_eq!(state.surface().active(), None);

        let id = state.add_rectangle(Color::black());
        assert_eq!(id, LayerId(0));
        assert_eq!(state.layers().get(0).map(|l| l.name()), Some("rect_0"));
        assert!(state.move_active(MoveDirection::Bottom));
        assert_eq!(surface_order(&state), state.layers().ids());

        state.apply(EditorAction::DeleteActive);
        assert!(state.layers().is_empty());
        assert!(state.surface().inner.objects().is_empty());
    }

    #[test]
    fn test_add_image_places_scaled_object() {
        let mut state = mounted();
        let token = state.mount_token();
        let id = state
            .add_image(token, "cat.png".into(), "data:image/png;base64,AAAA".into())
            .unwrap();

        let layer = state.active_layer().unwrap();
        assert_eq!(layer.id(), id);
        assert_eq!(layer.name(), "cat.png");
        match layer.object() {
            SurfaceObject::Image(image) => {
                assert_eq!(image.scale, crate::scene::Vec2::splat(0.25));
                assert_eq!(image.position, crate::scene::Vec2::new(100.0, 100.0));
                assert!(image.href.starts_with("data:image/png"));
            }
            other => panic!("expected an image, got {:?}", other),
        }
    }

    #[test]
    fn test_late_image_after_unmount_is_dropped() {
        let mut state = mounted();
        let token = state.mount_token();
        state.apply(EditorAction::Unmount);

        let result = state.add_image(token, "late.png".into(), "data:,".into());
        assert_eq!(result, Err(EditorError::Unmounted));

        state.apply(EditorAction::Mount);
        state.apply(EditorAction::AddImage {
            token,
            file_name: "late.png".into(),
            data_url: "data:,".into(),
        });
        assert!(state.layers().is_empty());
        assert!(state.surface().inner.objects().is_empty());
    }

    #[test]
    fn test_duplicate_image_names_get_distinct_ids() {
        let mut state = EditorState::new(SceneSurface::new(), EditorConfig::default());
        state.mount();
        let token = state.mount_token();
        let first = state.add_image(token, "a.png".into(), "data:,".into()).unwrap();
        let second = state.add_image(token, "a.png".into(), "data:,".into()).unwrap();

        assert_ne!(first, second);
        assert_eq!(state.layers().len(), 2);
        state.remove_layer(first);
        assert_eq!(state.layers().ids(), vec![second]);
    }
}
