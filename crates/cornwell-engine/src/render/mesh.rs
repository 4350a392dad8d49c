//! CPU-side triangle meshes with per-vertex color.
//!
//! Meshes are built once on the CPU and uploaded to the GPU by
//! [`LitRenderer::upload`](super::LitRenderer::upload). Triangles are wound
//! counter-clockwise when seen from outside.

use std::f32::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::paint::Color;

/// Vertex with position, normal and color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x3  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    #[inline]
    fn new(position: Vec3, normal: Vec3, color: Color) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            color: color.to_rgb_array(),
        }
    }
}

/// Handle to a mesh uploaded to a renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MeshId(pub u32);

/// Per-face colors of a cube.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubeFaces {
    /// +Z, facing the default camera.
    pub front: Color,
    /// -Z
    pub back: Color,
    /// +X
    pub right: Color,
    /// -X
    pub left: Color,
    /// +Y
    pub top: Color,
    /// -Y
    pub bottom: Color,
}

impl CubeFaces {
    pub const fn uniform(color: Color) -> Self {
        Self {
            front: color,
            back: color,
            right: color,
            left: color,
            top: color,
            bottom: color,
        }
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Axis-aligned cube centered at the origin.
    ///
    /// Four vertices per face so every face gets a flat normal and its own color.
    pub fn cube(half_extent: f32, faces: CubeFaces) -> Self {
        let s = half_extent;
        let quads: [(Vec3, [Vec3; 4], Color); 6] = [
            (
                Vec3::Z,
                [
                    Vec3::new(-s, -s, s),
                    Vec3::new(s, -s, s),
                    Vec3::new(s, s, s),
                    Vec3::new(-s, s, s),
                ],
                faces.front,
            ),
            (
                Vec3::NEG_Z,
                [
                    Vec3::new(-s, -s, -s),
                    Vec3::new(-s, s, -s),
                    Vec3::new(s, s, -s),
                    Vec3::new(s, -s, -s),
                ],
                faces.back,
            ),
            (
                Vec3::X,
                [
                    Vec3::new(s, -s, s),
                    Vec3::new(s, -s, -s),
                    Vec3::new(s, s, -s),
                    Vec3::new(s, s, s),
                ],
                faces.right,
            ),
            (
                Vec3::NEG_X,
                [
                    Vec3::new(-s, -s, -s),
                    Vec3::new(-s, -s, s),
                    Vec3::new(-s, s, s),
                    Vec3::new(-s, s, -s),
                ],
                faces.left,
            ),
            (
                Vec3::Y,
                [
                    Vec3::new(-s, s, s),
                    Vec3::new(s, s, s),
                    Vec3::new(s, s, -s),
                    Vec3::new(-s, s, -s),
                ],
                faces.top,
            ),
            (
                Vec3::NEG_Y,
                [
                    Vec3::new(-s, -s, -s),
                    Vec3::new(s, -s, -s),
                    Vec3::new(s, -s, s),
                    Vec3::new(-s, -s, s),
                ],
                faces.bottom,
            ),
        ];

        let mut mesh = Mesh {
            vertices: Vec::with_capacity(24),
            indices: Vec::with_capacity(36),
        };

        for (normal, corners, color) in quads {
            let base = mesh.vertex_count();
            mesh.vertices
                .extend(corners.iter().map(|&p| Vertex::new(p, normal, color)));
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        mesh
    }

    /// Latitude/longitude sphere centered at the origin.
    ///
    /// `slices` subdivide around the Y axis, `stacks` from pole to pole. The seam
    /// column is duplicated, giving `(slices + 1) * (stacks + 1)` vertices.
    pub fn uv_sphere(radius: f32, slices: u32, stacks: u32, color: Color) -> Self {
        let slices = slices.max(3);
        let stacks = stacks.max(2);
        let ring = slices + 1;

        let mut mesh = Mesh {
            vertices: Vec::with_capacity((ring * (stacks + 1)) as usize),
            indices: Vec::with_capacity((slices * stacks * 6) as usize),
        };

        for i in 0..=stacks {
            let phi = PI * i as f32 / stacks as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for j in 0..=slices {
                let theta = TAU * j as f32 / slices as f32;
                let (sin_theta, cos_theta) = theta.sin_cos();
                let normal = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
                mesh.vertices.push(Vertex::new(normal * radius, normal, color));
            }
        }

        for i in 0..stacks {
            for j in 0..slices {
                let a = i * ring + j;
                let b = a + ring;
                mesh.indices
                    .extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
            }
        }

        mesh
    }
}
