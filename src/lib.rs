// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cabinetry Inc.

//! Cabinetry
//!
//! Procedurally generates a parametric 3D mesh model of a two-door wardrobe
//! cabinet (body, doors with one hinged open, handles, shelves) and
//! serializes it into a scene description consumable by a 3D rendering
//! front end.

pub mod cabinet;
pub mod geometry;
pub mod io;
pub mod scene;

pub use cabinet::{build_cabinet, CabinetParams};
pub use geometry::{BoundingBox, Mesh, Primitive, Transform, Triangle};
pub use io::{export_scene, write_scene_json};
pub use scene::{PartStyle, SceneLayout, ScenePart};

use anyhow::Result;

/// Main entry point: build the cabinet for the given parameters and
/// serialize it into the scene document in one step.
pub fn render_cabinet(params: &CabinetParams) -> Result<serde_json::Value> {
    let parts = build_cabinet(params);
    let layout = SceneLayout::for_cabinet(params);
    Ok(export_scene(&parts, &layout)?)
}
