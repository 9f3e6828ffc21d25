// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cabinetry Inc.

//! Cabinet parameter set

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_3;

/// Full parameter set for one wardrobe cabinet. Defaults reproduce the
/// reference model: a 1.0 x 0.5 x 2.0 two-door wardrobe with the left door
/// open 60 degrees and four shelves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinetParams {
    /// Body extent along X
    pub width: f64,
    /// Body extent along Y
    pub depth: f64,
    /// Body extent along Z
    pub height: f64,

    /// Gap between each door and the cabinet mid-line
    pub door_gap: f64,
    /// Opening angle of the left door, radians about the hinge at x=0
    pub door_angle: f64,
    /// How far the door faces sit in front of the body
    pub door_clearance: f64,

    /// Extents of the block handle on the open door
    pub handle_block: Vector3<f64>,
    /// Radius of the cylindrical handle on the closed door
    pub handle_radius: f64,
    /// Length of the cylindrical handle
    pub handle_length: f64,
    /// Ring segments approximating the cylindrical handle
    pub handle_segments: u32,

    /// Number of evenly spaced shelves
    pub shelf_count: u32,
    /// Shelf plate thickness
    pub shelf_thickness: f64,
    /// Shelf inset from the body walls
    pub shelf_inset: f64,
}

impl CabinetParams {
    /// Width of one door plane
    pub fn door_width(&self) -> f64 {
        self.width / 2.0 - self.door_gap
    }

    /// Y offset of the door faces from the origin
    pub fn door_face_y(&self) -> f64 {
        self.depth + self.door_clearance
    }

    /// Height of shelf `index` (0-based), evenly spaced inside the body
    pub fn shelf_z(&self, index: u32) -> f64 {
        self.height * (index + 1) as f64 / (self.shelf_count + 1) as f64
    }
}

impl Default for CabinetParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            depth: 0.5,
            height: 2.0,
            door_gap: 0.02,
            door_angle: FRAC_PI_3,
            door_clearance: 0.001,
            handle_block: Vector3::new(0.04, 0.02, 0.04),
            handle_radius: 0.03,
            handle_length: 0.12,
            handle_segments: 18,
            shelf_count: 4,
            shelf_thickness: 0.025,
            shelf_inset: 0.02,
        }
    }
}
