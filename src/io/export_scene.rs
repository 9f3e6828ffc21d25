// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cabinetry Inc.

//! Scene document exporter
//!
//! Serializes styled parts plus a layout into the figure-style JSON document
//! the rendering front end consumes: per part a `mesh3d` trace with three
//! equal-length coordinate arrays and three equal-length face-index arrays,
//! plus the global scene layout.

use crate::scene::{SceneLayout, ScenePart};
use anyhow::Result;
use serde_json::{json, Value};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(
        "part '{part}': triangle {triangle} references vertex {index}, \
         but the part has only {vertex_count} vertices"
    )]
    IndexOutOfRange {
        part: String,
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// Build the full scene document from parts and layout
pub fn export_scene(parts: &[ScenePart], layout: &SceneLayout) -> Result<Value, ExportError> {
    let traces = parts
        .iter()
        .map(part_trace)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(json!({
        "data": traces,
        "layout": layout_value(layout),
    }))
}

/// Build the scene document and write it to `path`
pub fn write_scene_json(
    path: impl AsRef<Path>,
    parts: &[ScenePart],
    layout: &SceneLayout,
    pretty: bool,
) -> Result<()> {
    let document = export_scene(parts, layout)?;
    let json_string = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    std::fs::write(path, json_string)?;
    Ok(())
}

fn part_trace(part: &ScenePart) -> Result<Value, ExportError> {
    let mesh = &part.mesh;
    let vertex_count = mesh.vertex_count();

    for (t, triangle) in mesh.triangles.iter().enumerate() {
        for &index in &triangle.indices {
            if index >= vertex_count {
                return Err(ExportError::IndexOutOfRange {
                    part: part.style.name.clone(),
                    triangle: t,
                    index,
                    vertex_count,
                });
            }
        }
    }

    let x: Vec<f64> = mesh.vertices.iter().map(|v| v.x).collect();
    let y: Vec<f64> = mesh.vertices.iter().map(|v| v.y).collect();
    let z: Vec<f64> = mesh.vertices.iter().map(|v| v.z).collect();
    let i: Vec<usize> = mesh.triangles.iter().map(|t| t.indices[0]).collect();
    let j: Vec<usize> = mesh.triangles.iter().map(|t| t.indices[1]).collect();
    let k: Vec<usize> = mesh.triangles.iter().map(|t| t.indices[2]).collect();

    Ok(json!({
        "type": "mesh3d",
        "x": x,
        "y": y,
        "z": z,
        "i": i,
        "j": j,
        "k": k,
        "color": part.style.color,
        "opacity": part.style.opacity,
        "name": part.style.name,
    }))
}

fn layout_value(layout: &SceneLayout) -> Value {
    json!({
        "scene": {
            "xaxis": { "visible": layout.show_axes },
            "yaxis": { "visible": layout.show_axes },
            "zaxis": { "visible": layout.show_axes },
            "aspectratio": {
                "x": layout.aspect_ratio.x,
                "y": layout.aspect_ratio.y,
                "z": layout.aspect_ratio.z,
            },
            "camera": {
                "eye": {
                    "x": layout.camera_eye.x,
                    "y": layout.camera_eye.y,
                    "z": layout.camera_eye.z,
                },
            },
        },
        "showlegend": layout.show_legend,
        "margin": { "l": 0, "r": 0, "t": 0, "b": 0 },
        "title": layout.title,
    })
}
