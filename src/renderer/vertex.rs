//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Daytime sky filling the playfield
    pub const SKY: [f32; 4] = [0.31, 0.75, 0.79, 1.0];
    /// Letterbox bars outside the field
    pub const BORDER: [f32; 4] = [0.05, 0.06, 0.08, 1.0];
    pub const PIPE: [f32; 4] = [0.45, 0.75, 0.18, 1.0];
    pub const PIPE_LIP: [f32; 4] = [0.33, 0.55, 0.13, 1.0];
    pub const BIRD_BODY: [f32; 4] = [0.97, 0.72, 0.20, 1.0];
    pub const BIRD_WING: [f32; 4] = [0.88, 0.55, 0.16, 1.0];
    pub const BIRD_BEAK: [f32; 4] = [0.86, 0.35, 0.15, 1.0];
    pub const BIRD_EYE: [f32; 4] = [0.96, 0.96, 0.94, 1.0];
}
