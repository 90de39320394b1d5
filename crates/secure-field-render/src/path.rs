//! Path tessellation using lyon.
//!
//! Converts [`Path`] values into triangle meshes. Hosts that draw on the GPU
//! upload the mesh directly; tests use it to check that icon geometry
//! actually covers area.

use lyon::math::point as lyon_point;
use lyon::path::Path as LyonPath;
use lyon::path::builder::SvgPathBuilder;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule as LyonFillRule, FillTessellator, FillVertex,
    FillVertexConstructor, VertexBuffers,
};

use crate::error::{RenderError, RenderResult};
use crate::paint::FillRule;
use crate::types::{Path, PathCommand};

/// Default tessellation tolerance.
///
/// Smaller values produce more accurate curves but more vertices.
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// Tessellated path output suitable for GPU rendering.
#[derive(Debug, Clone, Default)]
pub struct TessellatedPath {
    /// Vertex positions (x, y).
    pub vertices: Vec<[f32; 2]>,
    /// Triangle indices.
    pub indices: Vec<u32>,
}

impl TessellatedPath {
    /// Create a new empty tessellated path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the tessellation produced no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex data as raw bytes for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Convert our Path to lyon's Path format.
pub fn to_lyon_path(path: &Path) -> LyonPath {
    let mut builder = LyonPath::svg_builder();

    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                builder.move_to(lyon_point(p.x, p.y));
            }
            PathCommand::LineTo(p) => {
                builder.line_to(lyon_point(p.x, p.y));
            }
            PathCommand::QuadTo { control, end } => {
                builder.quadratic_bezier_to(
                    lyon_point(control.x, control.y),
                    lyon_point(end.x, end.y),
                );
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                builder.cubic_bezier_to(
                    lyon_point(control1.x, control1.y),
                    lyon_point(control2.x, control2.y),
                    lyon_point(end.x, end.y),
                );
            }
            PathCommand::Close => {
                builder.close();
            }
        }
    }

    builder.build()
}

fn to_lyon_fill_rule(rule: FillRule) -> LyonFillRule {
    match rule {
        FillRule::NonZero => LyonFillRule::NonZero,
        FillRule::EvenOdd => LyonFillRule::EvenOdd,
    }
}

struct FillVertexCtor;

impl FillVertexConstructor<[f32; 2]> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> [f32; 2] {
        [vertex.position().x, vertex.position().y]
    }
}

/// Tessellate a path for filling, reporting failures.
pub fn try_tessellate_fill(
    path: &Path,
    fill_rule: FillRule,
    tolerance: f32,
) -> RenderResult<TessellatedPath> {
    if path.is_empty() {
        return Err(RenderError::EmptyPath);
    }

    let lyon_path = to_lyon_path(path);

    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();

    let options = FillOptions::default()
        .with_fill_rule(to_lyon_fill_rule(fill_rule))
        .with_tolerance(tolerance);

    tessellator
        .tessellate_path(
            &lyon_path,
            &options,
            &mut BuffersBuilder::new(&mut buffers, FillVertexCtor),
        )
        .map_err(|e| RenderError::Tessellation(format!("{e:?}")))?;

    Ok(TessellatedPath {
        vertices: buffers.vertices,
        indices: buffers.indices,
    })
}

/// Tessellate a path for filling.
///
/// Failures yield an empty mesh and are logged at debug level.
pub fn tessellate_fill(path: &Path, fill_rule: FillRule, tolerance: f32) -> TessellatedPath {
    try_tessellate_fill(path, fill_rule, tolerance).unwrap_or_else(|err| {
        tracing::debug!(target: "secure_field_render::path", %err, "fill tessellation skipped");
        TessellatedPath::new()
    })
}
