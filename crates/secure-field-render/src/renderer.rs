//! The drawing interface widgets paint through.
//!
//! [`Renderer`] is object-safe so widgets can paint into whatever backend the
//! host provides. [`RecordingRenderer`] captures drawing as a display list of
//! [`DrawCommand`]s in device coordinates; hosts replay it and tests compare
//! it.

use crate::paint::{FillRule, Shadow};
use crate::path::{DEFAULT_TOLERANCE, TessellatedPath, tessellate_fill};
use crate::text::Font;
use crate::transform::{Transform2D, TransformStack};
use crate::types::{Color, Path, Point, Rect};

/// A 2D drawing surface.
pub trait Renderer {
    // =========================================================================
    // State Management
    // =========================================================================

    /// Save the current render state (transform and clip).
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    // =========================================================================
    // Transform Operations
    // =========================================================================

    /// Get the current transform.
    fn transform(&self) -> &Transform2D;

    /// Apply a translation to the current transform.
    fn translate(&mut self, tx: f32, ty: f32);

    /// Apply a scale to the current transform.
    fn scale(&mut self, sx: f32, sy: f32);

    /// Concatenate a transform with the current transform.
    fn concat_transform(&mut self, transform: &Transform2D);

    // =========================================================================
    // Clipping
    // =========================================================================

    /// Intersect the clip region with a rectangle.
    fn clip_rect(&mut self, rect: Rect);

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Fill a path.
    fn fill_path(&mut self, path: &Path, color: Color, rule: FillRule);

    /// Draw the shadow a path would cast. The path itself is not filled.
    fn draw_path_shadow(&mut self, path: &Path, shadow: &Shadow, rule: FillRule);

    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color);
}

/// A recorded drawing operation, in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// The clip rectangle changed.
    Clip(Rect),
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },
    FillPath {
        path: Path,
        color: Color,
        rule: FillRule,
    },
    PathShadow {
        path: Path,
        shadow: Shadow,
        rule: FillRule,
    },
    Text {
        text: String,
        origin: Point,
        font: Font,
        color: Color,
    },
}

/// A renderer that records every drawing call into a display list.
///
/// Geometry is mapped through the current transform before it is stored, so
/// two recordings compare equal exactly when they would put the same pixels
/// on screen.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    transforms: TransformStack,
    clip: Option<Rect>,
    clip_stack: Vec<Option<Rect>>,
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Discard recorded commands and reset all state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The current clip rectangle, if any.
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip
    }

    /// Tessellate every recorded path fill.
    pub fn path_meshes(&self) -> Vec<TessellatedPath> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillPath { path, rule, .. } => {
                    Some(tessellate_fill(path, *rule, DEFAULT_TOLERANCE))
                }
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn save(&mut self) {
        self.transforms.save();
        self.clip_stack.push(self.clip);
    }

    fn restore(&mut self) {
        self.transforms.restore();
        if let Some(clip) = self.clip_stack.pop() {
            self.clip = clip;
        }
    }

    fn transform(&self) -> &Transform2D {
        self.transforms.current()
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.transforms.translate(tx, ty);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transforms.scale_xy(sx, sy);
    }

    fn concat_transform(&mut self, transform: &Transform2D) {
        self.transforms.concat(transform);
    }

    fn clip_rect(&mut self, rect: Rect) {
        let device = self.transforms.current().transform_rect(&rect);
        let clip = match self.clip {
            Some(existing) => existing.intersect(&device).unwrap_or(Rect::ZERO),
            None => device,
        };
        self.clip = Some(clip);
        self.commands.push(DrawCommand::Clip(clip));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.transforms.current().transform_rect(&rect);
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let rect = self.transforms.current().transform_rect(&rect);
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn fill_path(&mut self, path: &Path, color: Color, rule: FillRule) {
        let path = path.transformed(self.transforms.current());
        self.commands
            .push(DrawCommand::FillPath { path, color, rule });
    }

    fn draw_path_shadow(&mut self, path: &Path, shadow: &Shadow, rule: FillRule) {
        let path = path.transformed(self.transforms.current());
        self.commands.push(DrawCommand::PathShadow {
            path,
            shadow: *shadow,
            rule,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color) {
        let origin = self.transforms.current().transform_point(origin);
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            font: font.clone(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_device_coordinates() {
        let mut r = RecordingRenderer::new();
        r.save();
        r.translate(10.0, 5.0);
        r.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE);
        r.restore();
        r.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE);

        assert_eq!(
            r.commands(),
            &[
                DrawCommand::FillRect {
                    rect: Rect::new(10.0, 5.0, 4.0, 4.0),
                    color: Color::WHITE
                },
                DrawCommand::FillRect {
                    rect: Rect::new(0.0, 0.0, 4.0, 4.0),
                    color: Color::WHITE
                },
            ]
        );
    }

    #[test]
    fn test_clip_intersects_and_restores() {
        let mut r = RecordingRenderer::new();
        r.save();
        r.clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        r.clip_rect(Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(r.current_clip(), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
        r.restore();
        assert_eq!(r.current_clip(), None);
    }

    #[test]
    fn test_path_meshes() {
        let mut r = RecordingRenderer::new();
        let mut path = Path::new();
        path.add_ellipse(Point::new(8.0, 8.0), 4.0, 4.0);
        r.scale(2.0, 2.0);
        r.fill_path(&path, Color::BLACK, FillRule::NonZero);
        r.draw_path_shadow(&path, &Shadow::new(Color::BLACK), FillRule::NonZero);

        let meshes = r.path_meshes();
        assert_eq!(meshes.len(), 1);
        assert!(!meshes[0].is_empty());

        let taken = r.take_commands();
        assert_eq!(taken.len(), 2);
        assert!(r.commands().is_empty());
    }
}
