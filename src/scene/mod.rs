mod layer;
mod lifecycle;
mod stack;
mod state;
mod surface;
mod types;

pub use layer::*;
pub use lifecycle::*;
pub use stack::*;
pub use state::*;
pub use surface::*;
pub use types::*;
