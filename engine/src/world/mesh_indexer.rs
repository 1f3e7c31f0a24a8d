//! Terrain triangulation.
//!
//! Two triangles per grid cell, independent of elevation. Vertex `(i, j)`
//! has index `i * height + j`, matching the [`HeightField`](super::HeightField)
//! arena layout.

/// Indices emitted per grid cell (two triangles)
pub const INDICES_PER_CELL: usize = 6;

/// Build the index list for a `width` x `height` vertex grid.
///
/// For the cell with lower corner `base = i * height + j` the triangles are
/// `(base, base + 1, base + 1 + height)` and
/// `(base + 1 + height, base + height, base)`. The winding must stay as is
/// if culling or normals are ever derived from it.
///
/// Vertex indices are `u32`; `ViewerConfig::validate` rejects grids whose
/// vertex or index count does not fit.
pub fn build_indices(width: usize, height: usize) -> Vec<u32> {
    if width < 2 || height < 2 {
        return Vec::new();
    }

    let mut indices = Vec::with_capacity((width - 1) * (height - 1) * INDICES_PER_CELL);
    let stride = height as u32;

    for i in 0..width - 1 {
        for j in 0..height - 1 {
            let base = (i * height + j) as u32;

            indices.extend_from_slice(&[base, base + 1, base + 1 + stride]);
            indices.extend_from_slice(&[base + 1 + stride, base + stride, base]);
        }
    }

    indices
}
