// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cabinetry Inc.

//! End-to-end cabinet scene generation tests

use anyhow::Result;
use cabinetry::{build_cabinet, render_cabinet, write_scene_json, CabinetParams, SceneLayout};
use tempfile::NamedTempFile;

#[test]
fn test_default_scene_document() -> Result<()> {
    let document = render_cabinet(&CabinetParams::default())?;

    let traces = document["data"].as_array().unwrap();
    println!("Default cabinet: {} traces", traces.len());
    assert_eq!(traces.len(), 9);

    let names: Vec<&str> = traces
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "Body",
            "Left Door",
            "Right Door",
            "Left Handle",
            "Right Handle",
            "Shelf 1",
            "Shelf 2",
            "Shelf 3",
            "Shelf 4",
        ]
    );

    // Body is a box: 8 vertices, 12 triangles
    assert_eq!(traces[0]["x"].as_array().unwrap().len(), 8);
    assert_eq!(traces[0]["i"].as_array().unwrap().len(), 12);
    assert_eq!(traces[0]["color"], "saddlebrown");
    assert_eq!(traces[0]["opacity"], 0.7);

    // The cylindrical handle has 18 segments: 36 vertices, 36 triangles
    assert_eq!(traces[4]["x"].as_array().unwrap().len(), 36);
    assert_eq!(traces[4]["i"].as_array().unwrap().len(), 36);
    assert_eq!(traces[4]["color"], "gold");

    Ok(())
}

#[test]
fn test_scene_document_layout() -> Result<()> {
    let document = render_cabinet(&CabinetParams::default())?;
    let layout = &document["layout"];

    assert_eq!(layout["scene"]["xaxis"]["visible"], false);
    assert_eq!(layout["scene"]["yaxis"]["visible"], false);
    assert_eq!(layout["scene"]["zaxis"]["visible"], false);
    assert_eq!(layout["scene"]["aspectratio"]["x"], 1.0);
    assert_eq!(layout["scene"]["aspectratio"]["y"], 0.5);
    assert_eq!(layout["scene"]["aspectratio"]["z"], 2.0);
    assert_eq!(layout["scene"]["camera"]["eye"]["x"], 1.8);
    assert_eq!(layout["scene"]["camera"]["eye"]["y"], 2.0);
    assert_eq!(layout["scene"]["camera"]["eye"]["z"], 1.2);
    assert_eq!(layout["showlegend"], false);
    assert_eq!(layout["margin"]["l"], 0);

    Ok(())
}

#[test]
fn test_write_scene_json_roundtrip() -> Result<()> {
    let params = CabinetParams::default();
    let parts = build_cabinet(&params);
    let layout = SceneLayout::for_cabinet(&params);

    let file = NamedTempFile::new()?;
    write_scene_json(file.path(), &parts, &layout, true)?;

    let contents = std::fs::read_to_string(file.path())?;
    let parsed: serde_json::Value = serde_json::from_str(&contents)?;
    assert_eq!(parsed["data"].as_array().unwrap().len(), 9);

    Ok(())
}

#[test]
fn test_custom_dimensions_flow_through() -> Result<()> {
    let params = CabinetParams {
        width: 2.0,
        depth: 0.8,
        height: 2.4,
        shelf_count: 2,
        ..CabinetParams::default()
    };
    let document = render_cabinet(&params)?;

    let traces = document["data"].as_array().unwrap();
    assert_eq!(traces.len(), 7);

    // Body X coordinates span the new width
    let body_x = traces[0]["x"].as_array().unwrap();
    let max_x = body_x.iter().map(|v| v.as_f64().unwrap()).fold(0.0, f64::max);
    assert!((max_x - 2.0).abs() < 1e-12);

    // Aspect ratio follows the new proportions
    let layout = &document["layout"]["scene"]["aspectratio"];
    assert!((layout["y"].as_f64().unwrap() - 0.4).abs() < 1e-12);
    assert!((layout["z"].as_f64().unwrap() - 1.2).abs() < 1e-12);

    Ok(())
}

#[test]
fn test_wide_open_door_clears_body() -> Result<()> {
    // At 90 degrees the open door plane swings fully onto the -X side
    let params = CabinetParams {
        door_angle: std::f64::consts::FRAC_PI_2,
        ..CabinetParams::default()
    };
    let parts = build_cabinet(&params);
    let door = &parts[1];

    let bbox = door.mesh.bounding_box();
    assert!(bbox.max.x < 1e-9, "open door should not cross the hinge");
    assert!(bbox.max.y > params.depth, "open door swings toward the viewer");

    Ok(())
}
