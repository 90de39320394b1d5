//! Vector rendering primitives for secure-field.
//!
//! Widgets paint through the object-safe [`Renderer`] trait. The crate ships
//! a [`RecordingRenderer`] that captures a display list, which hosts replay
//! onto their own surface and tests inspect directly.
//!
//! # Drawing an Icon
//!
//! ```
//! use secure_field_render::{
//!     Color, FillRule, Path, Point, Rect, RecordingRenderer, Renderer, Transform2D,
//! };
//!
//! let mut dot = Path::new();
//! dot.add_ellipse(Point::new(16.0, 16.0), 6.0, 6.0);
//!
//! let mut renderer = RecordingRenderer::new();
//! let fit = Transform2D::fit_grid(32.0, Rect::new(0.0, 0.0, 24.0, 24.0))?;
//! renderer.save();
//! renderer.concat_transform(&fit);
//! renderer.fill_path(&dot, Color::GRAY, FillRule::NonZero);
//! renderer.restore();
//!
//! assert_eq!(renderer.commands().len(), 1);
//! assert!(!renderer.path_meshes()[0].is_empty());
//! # Ok::<(), secure_field_render::RenderError>(())
//! ```

mod error;
pub mod paint;
pub mod path;
pub mod renderer;
pub mod text;
pub mod transform;
pub mod types;

pub use error::{RenderError, RenderResult};
pub use paint::{FillRule, Shadow};
pub use path::{DEFAULT_TOLERANCE, TessellatedPath, tessellate_fill, try_tessellate_fill};
pub use renderer::{DrawCommand, RecordingRenderer, Renderer};
pub use text::{Font, FontFamily, FontWeight};
pub use transform::{Transform2D, TransformStack};
pub use types::{Color, Path, PathCommand, Point, Rect, Size};
