//! Render Tests - GPU Data Layout and Shader Validation
//!
//! Covers everything in the render module that can be checked without a
//! device: uniform/vertex layouts, the geometry provider and the WGSL source.

use glam::Mat4;
use relief_engine::ViewerError;
use relief_engine::render::{
    GeometryProvider, SurfaceRecovery, TERRAIN_SHADER, TerrainGeometry, TerrainUniforms,
    TerrainVertex, checked_index_count,
};
use relief_engine::world::HeightField;

// ============================================================================
// TerrainUniforms Tests
// ============================================================================

#[test]
fn test_terrain_uniforms_size() {
    assert_eq!(std::mem::size_of::<TerrainUniforms>(), 64);
}

#[test]
fn test_terrain_uniforms_default_is_identity() {
    let uniforms = TerrainUniforms::default();
    assert_eq!(uniforms.view_proj, Mat4::IDENTITY.to_cols_array_2d());
}

#[test]
fn test_terrain_uniforms_bytemuck_pod() {
    let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
    let uniforms = TerrainUniforms::new(m);
    let bytes = bytemuck::bytes_of(&uniforms);

    assert_eq!(bytes.len(), 64);
    let floats: &[f32] = bytemuck::cast_slice(bytes);
    // Column-major: translation lives in the last column
    assert_eq!(&floats[12..15], &[1.0, 2.0, 3.0]);
}

// ============================================================================
// TerrainVertex Tests
// ============================================================================

#[test]
fn test_terrain_vertex_layout() {
    let layout = TerrainVertex::buffer_layout();

    assert_eq!(layout.array_stride, 24);
    assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    assert_eq!(layout.attributes.len(), 2);

    assert_eq!(layout.attributes[0].shader_location, 0);
    assert_eq!(layout.attributes[0].offset, 0);
    assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);

    assert_eq!(layout.attributes[1].shader_location, 1);
    assert_eq!(layout.attributes[1].offset, 12);
    assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x3);
}

// ============================================================================
// GeometryProvider Tests
// ============================================================================

#[test]
fn test_geometry_views_are_parallel() {
    let mut field = HeightField::flat(4, 3);
    field.add_mountain(2, 1, 2, 1.0);
    let geometry = TerrainGeometry::new(&field);

    assert_eq!(geometry.positions().len(), 12);
    assert_eq!(geometry.colors().len(), 12);
    assert_eq!(geometry.indices().len(), 3 * 2 * 6);
    assert!(geometry.indices().iter().all(|&i| (i as usize) < 12));
}

#[test]
fn test_interleaved_vertices_follow_cells() {
    let mut field = HeightField::flat(3, 3);
    field.set_elevation(2, 1, 0.75);
    let geometry = TerrainGeometry::new(&field);
    let vertices = geometry.interleaved();

    assert_eq!(vertices.len(), 9);
    // Cell (2, 1) sits at index 2 * 3 + 1
    assert_eq!(vertices[7].position, [2.0, 1.0, 0.75]);
    assert_eq!(vertices[7].color, [0.8, 0.8, 0.8]);
}

#[test]
fn test_single_row_has_no_triangles() {
    let field = HeightField::flat(5, 1);
    let geometry = TerrainGeometry::new(&field);

    assert_eq!(geometry.positions().len(), 5);
    assert!(geometry.indices().is_empty());
}

// ============================================================================
// Frame Error Tests
// ============================================================================

#[test]
fn test_index_count_fits_u32() {
    assert_eq!(checked_index_count(3456).unwrap(), 3456);
    assert_eq!(checked_index_count(u32::MAX as usize).unwrap(), u32::MAX);
}

#[test]
fn test_index_count_overflow_is_error() {
    let len = u32::MAX as usize + 1;
    let err = checked_index_count(len).unwrap_err();
    assert!(matches!(err, ViewerError::MeshTooLarge { indices } if indices == len));
}

#[test]
fn test_out_of_memory_frame_is_fatal() {
    match SurfaceRecovery::for_error(&wgpu::SurfaceError::OutOfMemory) {
        SurfaceRecovery::Fatal(err) => assert_eq!(err.to_string(), "GPU out of memory"),
        other => panic!("expected fatal recovery, got {other:?}"),
    }
}

// ============================================================================
// Shader Tests
// ============================================================================

#[test]
fn test_terrain_shader_validates() {
    let module = naga::front::wgsl::parse_str(TERRAIN_SHADER)
        .unwrap_or_else(|e| panic!("terrain.wgsl failed to parse: {}", e.emit_to_string(TERRAIN_SHADER)));

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .unwrap_or_else(|e| panic!("terrain.wgsl failed validation: {e:?}"));
}

#[test]
fn test_terrain_shader_entry_points() {
    let module = naga::front::wgsl::parse_str(TERRAIN_SHADER).unwrap();
    let names: Vec<&str> = module.entry_points.iter().map(|ep| ep.name.as_str()).collect();

    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}
