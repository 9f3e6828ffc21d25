// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cabinetry Inc.

//! Geometric primitives generator

use super::{Mesh, Triangle};
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Two triangles per rectangular side, six sides. Shared by the
/// corner-origin and centered box generators, which emit the same corner
/// order.
const BOX_TRIANGLES: [[usize; 3]; 12] = [
    [0, 1, 2],
    [0, 2, 3],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [1, 2, 6],
    [1, 6, 5],
    [2, 3, 7],
    [2, 7, 6],
    [3, 0, 4],
    [3, 4, 7],
];

/// Geometric primitives
pub enum Primitive {
    /// Rectangular prism with one corner at the origin
    Box { extents: Vector3<f64> },
    /// Rectangular prism symmetric about the origin, for parts that pivot
    /// about their own center before placement
    CenteredBox { extents: Vector3<f64> },
    /// Rectangle in the X-Z plane at y=0
    Plane { length: f64, height: f64 },
    /// Open cylinder (no caps), bottom ring at z=0, top ring at z=height
    Cylinder { r: f64, h: f64, segments: u32 },
}

impl Primitive {
    pub fn cuboid(extents: Vector3<f64>) -> Self {
        Self::Box { extents }
    }

    pub fn centered_cuboid(length: f64, width: f64, height: f64) -> Self {
        Self::CenteredBox {
            extents: Vector3::new(length, width, height),
        }
    }

    pub fn plane(length: f64, height: f64) -> Self {
        Self::Plane { length, height }
    }

    pub fn cylinder(r: f64, h: f64, segments: u32) -> Self {
        let segments = segments.max(3);
        Self::Cylinder { r, h, segments }
    }

    pub fn to_mesh(&self) -> Mesh {
        match self {
            Self::Box { extents } => generate_box_mesh(*extents),
            Self::CenteredBox { extents } => generate_centered_box_mesh(*extents),
            Self::Plane { length, height } => generate_plane_mesh(*length, *height),
            Self::Cylinder { r, h, segments } => generate_cylinder_mesh(*r, *h, *segments),
        }
    }
}

fn generate_box_mesh(extents: Vector3<f64>) -> Mesh {
    let mut mesh = Mesh::with_capacity(8, 12);
    let (lx, ly, lz) = (extents.x, extents.y, extents.z);

    // 8 corners, bottom ring then top ring, counter-clockwise from the origin
    let positions = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(lx, 0.0, 0.0),
        Point3::new(lx, ly, 0.0),
        Point3::new(0.0, ly, 0.0),
        Point3::new(0.0, 0.0, lz),
        Point3::new(lx, 0.0, lz),
        Point3::new(lx, ly, lz),
        Point3::new(0.0, ly, lz),
    ];

    for position in positions {
        mesh.add_vertex(position);
    }
    for indices in BOX_TRIANGLES {
        mesh.add_triangle(Triangle::new(indices));
    }

    mesh
}

fn generate_centered_box_mesh(extents: Vector3<f64>) -> Mesh {
    let mut mesh = Mesh::with_capacity(8, 12);

    // Unit-cube corner offsets, scaled per axis
    for (ux, uy, uz) in [
        (-0.5, -0.5, -0.5),
        (0.5, -0.5, -0.5),
        (0.5, 0.5, -0.5),
        (-0.5, 0.5, -0.5),
        (-0.5, -0.5, 0.5),
        (0.5, -0.5, 0.5),
        (0.5, 0.5, 0.5),
        (-0.5, 0.5, 0.5),
    ] {
        mesh.add_vertex(Point3::new(
            ux * extents.x,
            uy * extents.y,
            uz * extents.z,
        ));
    }
    for indices in BOX_TRIANGLES {
        mesh.add_triangle(Triangle::new(indices));
    }

    mesh
}

fn generate_plane_mesh(length: f64, height: f64) -> Mesh {
    let mut mesh = Mesh::with_capacity(4, 2);

    mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(Point3::new(length, 0.0, 0.0));
    mesh.add_vertex(Point3::new(length, 0.0, height));
    mesh.add_vertex(Point3::new(0.0, 0.0, height));

    mesh.add_triangle(Triangle::new([0, 1, 2]));
    mesh.add_triangle(Triangle::new([0, 2, 3]));

    mesh
}

fn generate_cylinder_mesh(radius: f64, height: f64, segments: u32) -> Mesh {
    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 2 * n);

    // Bottom ring at z=0, vertex i at angle 2*pi*i/segments
    for i in 0..n {
        let angle = 2.0 * PI * i as f64 / n as f64;
        mesh.add_vertex(Point3::new(radius * angle.cos(), radius * angle.sin(), 0.0));
    }
    // Top ring at z=height, same angular order
    for i in 0..n {
        let angle = 2.0 * PI * i as f64 / n as f64;
        mesh.add_vertex(Point3::new(
            radius * angle.cos(),
            radius * angle.sin(),
            height,
        ));
    }

    // One quad per segment, split into two triangles, with wraparound
    for i in 0..n {
        let j = (i + 1) % n;
        mesh.add_triangle(Triangle::new([i, j, n + j]));
        mesh.add_triangle(Triangle::new([i, n + j, n + i]));
    }

    mesh
}
