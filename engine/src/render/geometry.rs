//! Geometry Provider
//!
//! The narrow interface between terrain data and the GPU: a position view, a
//! parallel color view and an index view. The renderer only ever sees these
//! slices, so the backend can change without touching the terrain code.

use static_assertions::assert_eq_size;

use crate::world::{Cell, CellColor, HeightField, build_indices};

/// Source of indexed, per-vertex colored triangle geometry.
pub trait GeometryProvider {
    /// Vertex positions
    fn positions(&self) -> &[Cell];
    /// Vertex colors, parallel to [`GeometryProvider::positions`]
    fn colors(&self) -> &[CellColor];
    /// Triangle list indices into the vertex views
    fn indices(&self) -> &[u32];

    /// Interleave positions and colors into GPU vertices.
    fn interleaved(&self) -> Vec<TerrainVertex> {
        self.positions()
            .iter()
            .zip(self.colors())
            .map(|(p, c)| TerrainVertex {
                position: [p.x, p.y, p.z],
                color: [c.r, c.g, c.b],
            })
            .collect()
    }
}

/// GPU vertex: position followed by color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

assert_eq_size!(TerrainVertex, [f32; 6]);
assert_eq_size!(Cell, [f32; 3]);
assert_eq_size!(CellColor, [f32; 3]);

impl TerrainVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // color
    ];

    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TerrainVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// A height field paired with its triangulation.
pub struct TerrainGeometry<'a> {
    field: &'a HeightField,
    indices: Vec<u32>,
}

impl<'a> TerrainGeometry<'a> {
    pub fn new(field: &'a HeightField) -> Self {
        Self {
            field,
            indices: build_indices(field.width(), field.height()),
        }
    }
}

impl GeometryProvider for TerrainGeometry<'_> {
    fn positions(&self) -> &[Cell] {
        self.field.cells()
    }

    fn colors(&self) -> &[CellColor] {
        self.field.colors()
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }
}
