mod surface_canvas;

pub use surface_canvas::SurfaceCanvas;
