// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cabinetry Inc.

//! Cabinet assembly - builds the full set of scene parts from a parameter set

mod params;

pub use params::CabinetParams;

use crate::geometry::{Primitive, Transform};
use crate::scene::{PartStyle, ScenePart};
use nalgebra::Vector3;
use std::f64::consts::FRAC_PI_2;

const BODY_COLOR: &str = "saddlebrown";
const DOOR_COLOR: &str = "peru";
const HANDLE_COLOR: &str = "gold";
const SHELF_COLOR: &str = "sienna";

/// Build every part of the cabinet. Pure function of the parameters: each
/// call assembles a fresh, independent list, so parts can be constructed and
/// tested in isolation.
pub fn build_cabinet(params: &CabinetParams) -> Vec<ScenePart> {
    let mut parts = Vec::with_capacity(5 + params.shelf_count as usize);
    parts.push(body(params));
    parts.push(left_door(params));
    parts.push(right_door(params));
    parts.push(left_handle(params));
    parts.push(right_handle(params));
    parts.extend(shelves(params));
    parts
}

/// Door-local frame of the open left door: origin at the hinge edge (x=0,
/// just in front of the body), X along the door face. Carrying a door-local
/// mesh through this frame swings it open together with the door.
fn left_hinge_frame(params: &CabinetParams) -> Transform {
    Transform::rotation(Vector3::new(0.0, 0.0, params.door_angle))
        .translated(Vector3::new(0.0, params.door_face_y(), 0.0))
}

fn body(params: &CabinetParams) -> ScenePart {
    let mesh =
        Primitive::cuboid(Vector3::new(params.width, params.depth, params.height)).to_mesh();
    ScenePart::new(mesh, PartStyle::new(BODY_COLOR, 0.7, "Body"))
}

fn left_door(params: &CabinetParams) -> ScenePart {
    let plane = Primitive::plane(params.door_width(), params.height).to_mesh();
    let mesh = left_hinge_frame(params).apply(&plane);
    ScenePart::new(mesh, PartStyle::new(DOOR_COLOR, 0.95, "Left Door"))
}

fn right_door(params: &CabinetParams) -> ScenePart {
    let plane = Primitive::plane(params.door_width(), params.height).to_mesh();
    let mesh = Transform::translation(Vector3::new(
        params.width / 2.0 + params.door_gap,
        params.door_face_y(),
        0.0,
    ))
    .apply(&plane);
    ScenePart::new(mesh, PartStyle::new(DOOR_COLOR, 0.95, "Right Door"))
}

/// Block handle on the open door. Positioned in the door-local frame near
/// the swinging edge at mid-height, then carried through the hinge frame.
fn left_handle(params: &CabinetParams) -> ScenePart {
    let block = Primitive::centered_cuboid(
        params.handle_block.x,
        params.handle_block.y,
        params.handle_block.z,
    )
    .to_mesh();

    let door_local = Transform::translation(Vector3::new(
        params.door_width() - params.handle_block.x,
        params.handle_block.y,
        params.height / 2.0,
    ));
    let mesh = left_hinge_frame(params).apply(&door_local.apply(&block));
    ScenePart::new(mesh, PartStyle::new(HANDLE_COLOR, 1.0, "Left Handle"))
}

/// Cylindrical handle on the closed door, axis tipped onto -Y so it points
/// out of the door face, centered on the door at mid-height.
fn right_handle(params: &CabinetParams) -> ScenePart {
    let cylinder = Primitive::cylinder(
        params.handle_radius,
        params.handle_length,
        params.handle_segments,
    )
    .to_mesh();

    let mesh = Transform::rotation(Vector3::new(FRAC_PI_2, 0.0, 0.0))
        .translated(Vector3::new(
            0.75 * params.width,
            params.depth + params.handle_radius,
            params.height / 2.0,
        ))
        .apply(&cylinder);
    ScenePart::new(mesh, PartStyle::new(HANDLE_COLOR, 1.0, "Right Handle"))
}

fn shelves(params: &CabinetParams) -> Vec<ScenePart> {
    let plate = Primitive::cuboid(Vector3::new(
        params.width - 2.0 * params.shelf_inset,
        params.depth - 2.0 * params.shelf_inset,
        params.shelf_thickness,
    ))
    .to_mesh();

    (0..params.shelf_count)
        .map(|index| {
            let mesh = Transform::translation(Vector3::new(
                params.shelf_inset,
                params.shelf_inset,
                params.shelf_z(index),
            ))
            .apply(&plate);
            ScenePart::new(
                mesh,
                PartStyle::new(SHELF_COLOR, 1.0, format!("Shelf {}", index + 1)),
            )
        })
        .collect()
}
