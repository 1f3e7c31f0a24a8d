//! Height Field Module
//!
//! Owns the terrain elevation grid and per-cell colors. Terrain is built once
//! at startup from random base noise plus a number of cosine-falloff
//! mountains, and is read-only afterwards.
//!
//! ## Layout
//! Cells live in one contiguous arena. Cell `(i, j)` is stored at
//! `i * height + j`, which is also its vertex index in the terrain mesh
//! (see [`crate::world::mesh_indexer`]).

use std::f32::consts::FRAC_PI_2;
use std::ops::RangeInclusive;

use rand::Rng;
use serde::Deserialize;

/// Base gray of every cell before the random offset is applied
pub const BASE_GRAY: f32 = 0.8;
/// Elevation step of the base noise (integer draw in `[0, 10)` times this)
pub const BASE_NOISE_STEP: f32 = 0.05;
/// Color step of the base offset (integer draw in `[0, 20)` times this)
pub const COLOR_OFFSET_STEP: f32 = 0.01;

/// Terrain generation parameters.
///
/// Defaults reproduce the reference 25x25 map with seven mountains.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Grid cells along world X
    pub width: usize,
    /// Grid cells along world Y
    pub height: usize,
    /// Number of mountains stamped onto the base noise
    pub mountain_count: u32,
    /// Mountain footprint radius in cells
    pub mountain_radius: i32,
    /// Peak height added at a mountain center
    pub mountain_height: f32,
    /// Optional RNG seed; `None` regenerates fresh terrain every run
    pub seed: Option<u64>,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            mountain_count: 7,
            mountain_radius: 5,
            mountain_height: 2.0,
            seed: None,
        }
    }
}

/// A terrain sample. `x` and `y` are the grid coordinates, `z` the elevation.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Cell {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Per-cell vertex color. Channels are not clamped and may exceed 1.0.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CellColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl CellColor {
    pub const fn gray(value: f32) -> Self {
        Self { r: value, g: value, b: value }
    }
}

/// Terrain elevation grid with per-cell colors.
#[derive(Clone, Debug)]
pub struct HeightField {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    colors: Vec<CellColor>,
}

impl HeightField {
    /// Create a field with zero elevation and the base gray everywhere.
    pub fn flat(width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for i in 0..width {
            for j in 0..height {
                cells.push(Cell {
                    x: i as f32,
                    y: j as f32,
                    z: 0.0,
                });
            }
        }

        Self {
            width,
            height,
            cells,
            colors: vec![CellColor::gray(BASE_GRAY); width * height],
        }
    }

    /// Generate terrain: base noise and colors for every cell, then
    /// `mountain_count` mountains at uniformly random center cells.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, params: &TerrainParams) -> Self {
        let mut field = Self::flat(params.width, params.height);

        for (cell, color) in field.cells.iter_mut().zip(field.colors.iter_mut()) {
            let offset = rng.gen_range(0..20) as f32 * COLOR_OFFSET_STEP;
            *color = CellColor::gray(BASE_GRAY + offset);
            cell.z = rng.gen_range(0..10) as f32 * BASE_NOISE_STEP;
        }

        if field.width == 0 || field.height == 0 {
            return field;
        }

        for _ in 0..params.mountain_count {
            let cx = rng.gen_range(0..field.width) as i32;
            let cy = rng.gen_range(0..field.height) as i32;
            field.add_mountain(cx, cy, params.mountain_radius, params.mountain_height);
        }

        field
    }

    /// Stamp a mountain centered on cell `(cx, cy)`.
    ///
    /// Every on-grid cell closer than `radius` gains
    /// `height * cos(d / radius * pi/2)` and has its color replaced by the
    /// position gradient. Mountains stack; the last one applied owns the color.
    ///
    /// The footprint is clipped to the grid before iterating, so the cost is
    /// bounded by the grid size whatever the radius.
    pub fn add_mountain(&mut self, cx: i32, cy: i32, radius: i32, height: f32) {
        if radius <= 0 || self.width == 0 || self.height == 0 {
            return;
        }

        let (Some(i_range), Some(j_range)) = (
            clip_span(cx, radius, self.width),
            clip_span(cy, radius, self.height),
        ) else {
            return;
        };

        let radius_f = radius as f32;
        for i in i_range {
            for j in j_range.clone() {
                let dx = (i64::from(cx) - i as i64) as f32;
                let dy = (i64::from(cy) - j as i64) as f32;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance >= radius_f {
                    continue;
                }

                let idx = self.index(i, j);
                self.cells[idx].z += (distance / radius_f * FRAC_PI_2).cos() * height;
                self.colors[idx] = CellColor {
                    r: 1.0 - i as f32 / self.width as f32,
                    g: 1.0 - j as f32 / self.height as f32,
                    b: 1.0,
                };
            }
        }
    }

    /// Bounds predicate shared by height queries and camera movement.
    #[inline]
    pub fn on_map(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x < self.width as f32 && y >= 0.0 && y < self.height as f32
    }

    /// Bilinearly interpolated elevation at `(x, y)`, or 0 off the map.
    ///
    /// The far neighbor is clamped to the last row/column, so samples in the
    /// final half-open cell collapse onto the edge instead of leaving the grid.
    pub fn height_at(&self, x: f32, y: f32) -> f32 {
        if !self.on_map(x, y) {
            return 0.0;
        }

        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = x - x0 as f32;
        let fy = y - y0 as f32;

        let h00 = self.cells[self.index(x0, y0)].z;
        let h10 = self.cells[self.index(x1, y0)].z;
        let h01 = self.cells[self.index(x0, y1)].z;
        let h11 = self.cells[self.index(x1, y1)].z;

        let h1 = (1.0 - fx) * h00 + fx * h10;
        let h2 = (1.0 - fx) * h01 + fx * h11;
        (1.0 - fy) * h1 + fy * h2
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i * self.height + j
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<&Cell> {
        (i < self.width && j < self.height).then(|| &self.cells[self.index(i, j)])
    }

    pub fn color(&self, i: usize, j: usize) -> Option<&CellColor> {
        (i < self.width && j < self.height).then(|| &self.colors[self.index(i, j)])
    }

    /// Overwrite a cell's elevation. Intended for building fields by hand.
    pub fn set_elevation(&mut self, i: usize, j: usize, z: f32) {
        if i < self.width && j < self.height {
            let idx = self.index(i, j);
            self.cells[idx].z = z;
        }
    }

    /// All cells in vertex order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All colors, parallel to [`Self::cells`].
    pub fn colors(&self) -> &[CellColor] {
        &self.colors
    }

    /// Lowest and highest elevation, or `None` for an empty field.
    pub fn elevation_range(&self) -> Option<(f32, f32)> {
        let mut iter = self.cells.iter().map(|c| c.z);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), z| (lo.min(z), hi.max(z))))
    }
}

/// Indices of `[center - radius, center + radius]` that fall inside `[0, len)`.
fn clip_span(center: i32, radius: i32, len: usize) -> Option<RangeInclusive<usize>> {
    let lo = (i64::from(center) - i64::from(radius)).max(0);
    let hi = (i64::from(center) + i64::from(radius)).min(len as i64 - 1);
    (lo <= hi).then(|| lo as usize..=hi as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_flat_field_identity_mapping() {
        let field = HeightField::flat(4, 3);
        for i in 0..4 {
            for j in 0..3 {
                let cell = field.cell(i, j).unwrap();
                assert_eq!(cell.x, i as f32);
                assert_eq!(cell.y, j as f32);
                assert_eq!(cell.z, 0.0);
            }
        }
    }

    #[test]
    fn test_generated_base_noise_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let params = TerrainParams {
            mountain_count: 0,
            ..Default::default()
        };
        let field = HeightField::generate(&mut rng, &params);

        for cell in field.cells() {
            assert!(cell.z >= 0.0 && cell.z < 0.5);
        }
        for color in field.colors() {
            assert_eq!(color.r, color.g);
            assert_eq!(color.g, color.b);
            assert!(color.r >= BASE_GRAY && color.r < BASE_GRAY + 0.2);
        }
    }

    #[test]
    fn test_generation_is_deterministic_for_seed() {
        let params = TerrainParams::default();
        let a = HeightField::generate(&mut ChaCha8Rng::seed_from_u64(42), &params);
        let b = HeightField::generate(&mut ChaCha8Rng::seed_from_u64(42), &params);
        assert_eq!(a.cells(), b.cells());
        assert_eq!(a.colors(), b.colors());
    }

    #[test]
    fn test_mountain_colors_use_gradient() {
        let mut field = HeightField::flat(10, 10);
        field.add_mountain(5, 5, 3, 1.0);

        let color = field.color(4, 6).unwrap();
        assert!((color.r - 0.6).abs() < 1e-6);
        assert!((color.g - 0.4).abs() < 1e-6);
        assert_eq!(color.b, 1.0);

        // Outside the radius the base gray survives
        assert_eq!(*field.color(0, 0).unwrap(), CellColor::gray(BASE_GRAY));
    }

    #[test]
    fn test_mountain_near_edge_is_clipped() {
        let mut field = HeightField::flat(5, 5);
        field.add_mountain(0, 0, 3, 2.0);
        assert_eq!(field.cell(0, 0).unwrap().z, 2.0);
        assert!(field.cell(1, 1).unwrap().z > 0.0);
        assert_eq!(field.cell(4, 4).unwrap().z, 0.0);
    }

    #[test]
    fn test_elevation_range() {
        let mut field = HeightField::flat(3, 3);
        field.set_elevation(2, 1, 1.5);
        field.set_elevation(0, 2, -0.5);
        assert_eq!(field.elevation_range(), Some((-0.5, 1.5)));
        assert_eq!(HeightField::flat(0, 0).elevation_range(), None);
    }

    #[test]
    fn test_huge_radius_is_clipped_to_grid() {
        let mut field = HeightField::flat(4, 4);
        field.add_mountain(i32::MAX, i32::MIN, i32::MAX, 1.0);
        field.add_mountain(1, 1, i32::MAX, 1.0);

        // Every cell is far inside the radius, so it gains almost the full height
        for cell in field.cells() {
            assert!(cell.z > 0.99 && cell.z <= 1.0);
        }
    }

    #[test]
    fn test_mountain_fully_off_grid_is_noop() {
        let mut field = HeightField::flat(4, 4);
        field.add_mountain(-10, 2, 3, 1.0);
        field.add_mountain(2, 50, 3, 1.0);
        assert!(field.cells().iter().all(|c| c.z == 0.0));
        assert!(field.colors().iter().all(|c| *c == CellColor::gray(BASE_GRAY)));
    }

    #[test]
    fn test_clip_span() {
        assert_eq!(clip_span(1, 2, 5), Some(0..=3));
        assert_eq!(clip_span(4, 3, 5), Some(1..=4));
        assert_eq!(clip_span(-4, 3, 5), None);
        assert_eq!(clip_span(i32::MAX, i32::MAX, 5), Some(0..=4));
    }

    #[test]
    fn test_height_at_last_cell_does_not_overflow() {
        let mut field = HeightField::flat(3, 3);
        field.set_elevation(2, 2, 3.0);
        assert_eq!(field.height_at(2.5, 2.5), 3.0);
    }
}
