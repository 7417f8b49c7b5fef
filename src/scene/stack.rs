use super::layer::{Layer, LayerId};

/// Ordered layers, index 0 is the back-most and the last index the front-most.
///
/// Every lookup is a linear scan by [`LayerId`]. Operations that target a layer
/// which is not in the stack, or that would step past either end, leave the
/// stack untouched and report `false`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_layers(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Layer> + ExactSizeIterator {
        self.layers.iter()
    }

    /// Current position of a layer
    pub fn index_of(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id() == id)
    }

    /// Put a layer on top of the stack and return its index
    pub fn append(&mut self, layer: Layer) -> usize {
        let id = layer.id();
        self.layers.push(layer);
        // resolved by identity, never by name
        self.index_of(id).unwrap_or(self.layers.len() - 1)
    }

    /// Remove the first layer with the given id, returning where it was
    pub fn remove(&mut self, id: LayerId) -> Option<(usize, Layer)> {
        let index = self.index_of(id)?;
        Some((index, self.layers.remove(index)))
    }

    /// Exchange two positions; out-of-range positions leave the stack as is
    pub fn swap(&mut self, from: usize, to: usize) -> bool {
        let len = self.layers.len();
        if from >= len || to >= len {
            return false;
        }
        self.layers.swap(from, to);
        true
    }

    /// Move one step toward the front
    pub fn move_up(&mut self, id: LayerId) -> bool {
        match self.index_of(id) {
            Some(index) => self.swap(index, index + 1),
            None => false,
        }
    }

    /// Move one step toward the back
    pub fn move_down(&mut self, id: LayerId) -> bool {
        if let Some(index) = self.index_of(id) {
            if let Some(below) = index.checked_sub(1) {
                return self.swap(index, below);
            }
        }
        false
    }

    /// Move to the front-most position
    pub fn move_top(&mut self, id: LayerId) -> bool {
        match self.remove(id) {
            Some((_, layer)) => {
                self.layers.push(layer);
                true
            }
            None => false,
        }
    }

    /// Move to the back-most position
    pub fn move_bottom(&mut self, id: LayerId) -> bool {
        match self.remove(id) {
            Some((_, layer)) => {
                self.layers.insert(0, layer);
                true
            }
            None => false,
        }
    }

    pub fn ids(&self) -> Vec<LayerId> {
        self.layers.iter().map(|l| l.id()).collect()
    }
}
