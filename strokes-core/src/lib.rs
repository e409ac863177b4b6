/// Strokes Core Library - Line rasterization and outline shapes
///
/// Everything here is drawn with a single line primitive: triangles,
/// rectangles, circles, Bézier curves, the Sierpinski fractal and both the
/// fake and the perspective-projected cube. Pixels go to a caller-supplied
/// [`Surface`]; windowing and input live in the driver crates.

pub mod config;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use config::{CanvasConfig, Config};
pub use error::{Error, Result};
pub use geometry::{Color, LineSegment, Point2, Wireframe};
pub use projection::{CubeProjector, Frustum, Viewport};
pub use raster::{draw_line, LinePixels};
pub use scene::{Scene, Slide};
pub use surface::{Framebuffer, PixelLog, Surface};
pub use transform::{AnimationState, Transform};
