// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cabinetry Inc.

//! Affine transform composition

use super::Mesh;
use nalgebra::{Matrix4, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Affine transform with a fixed composition order: scale, then rotation
/// about X, Y, Z (intrinsic, right-handed), then translation.
///
/// Scaling before rotation keeps non-uniform scales shear-free; rotating
/// before translating pivots a shape about its local origin before it is
/// moved into world position. Callers needing a different rotation order
/// must pre-rotate and pass a single-axis remainder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    /// Per-axis multiplier, default 1
    pub scale: Vector3<f64>,
    /// Radians about X, then Y, then Z, default 0
    pub rotation: Vector3<f64>,
    /// Per-axis offset, default 0
    pub translation: Vector3<f64>,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::zeros(),
            translation: Vector3::zeros(),
        }
    }

    pub fn scaling(scale: Vector3<f64>) -> Self {
        Self {
            scale,
            ..Self::identity()
        }
    }

    pub fn rotation(rotation: Vector3<f64>) -> Self {
        Self {
            rotation,
            ..Self::identity()
        }
    }

    pub fn translation(translation: Vector3<f64>) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    /// Set the translation component, keeping scale and rotation
    pub fn translated(mut self, translation: Vector3<f64>) -> Self {
        self.translation = translation;
        self
    }

    /// Set the rotation component, keeping scale and translation
    pub fn rotated(mut self, rotation: Vector3<f64>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Homogeneous matrix composing T * Rz * Ry * Rx * S
    pub fn to_matrix(&self) -> Matrix4<f64> {
        let rx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.rotation.x);
        let ry = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.rotation.y);
        let rz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.rotation.z);

        Matrix4::new_translation(&self.translation)
            * (rz * ry * rx).to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply the transform, returning a fresh mesh with the same topology.
    /// The input is never mutated.
    pub fn apply(&self, mesh: &Mesh) -> Mesh {
        let matrix = self.to_matrix();
        Mesh {
            vertices: mesh
                .vertices
                .iter()
                .map(|p| matrix.transform_point(p))
                .collect(),
            triangles: mesh.triangles.clone(),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
