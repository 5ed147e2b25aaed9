//! Vertex and instance layouts for the instanced pipeline

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Mesh vertices are bare 2D positions (slot 0)
pub fn mesh_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vec2>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x2,
        }],
    }
}

/// Per-instance placement (slot 1): `world = position * size + offset`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    pub offset: [f32; 2],
    pub size: [f32; 2],
}

impl InstanceData {
    pub const fn new(offset: Vec2, size: Vec2) -> Self {
        Self {
            offset: [offset.x, offset.y],
            size: [size.x, size.y],
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Projection uniform (group 0, binding 0)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ProjectionUniform {
    pub projection: [[f32; 4]; 4],
}

impl ProjectionUniform {
    pub fn for_field(width: f32, height: f32) -> Self {
        Self {
            projection: crate::field_projection(width, height).to_cols_array_2d(),
        }
    }
}

/// Clear color
pub const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_four_floats() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 16);
        let instance = InstanceData::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        let bytes = bytemuck::bytes_of(&instance);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
