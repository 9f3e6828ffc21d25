// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cabinetry Inc.

//! Cabinetry CLI

use anyhow::Result;
use cabinetry::{build_cabinet, write_scene_json, CabinetParams, SceneLayout};
use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "cabinetry")]
#[command(about = "Cabinetry - parametric wardrobe cabinet scene generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Output JSON file
    #[arg(short, long, value_name = "FILE", default_value = "cabinet.json")]
    output: String,

    /// Cabinet width (X extent)
    #[arg(long, default_value_t = 1.0)]
    width: f64,

    /// Cabinet depth (Y extent)
    #[arg(long, default_value_t = 0.5)]
    depth: f64,

    /// Cabinet height (Z extent)
    #[arg(long, default_value_t = 2.0)]
    height: f64,

    /// Left door opening angle in degrees
    #[arg(long, default_value_t = 60.0)]
    door_angle: f64,

    /// Number of shelves
    #[arg(long, default_value_t = 4)]
    shelves: u32,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let params = CabinetParams {
        width: cli.width,
        depth: cli.depth,
        height: cli.height,
        door_angle: cli.door_angle.to_radians(),
        shelf_count: cli.shelves,
        ..CabinetParams::default()
    };

    let parts = build_cabinet(&params);
    let layout = SceneLayout::for_cabinet(&params);

    if cli.verbose {
        for part in &parts {
            println!(
                "  {} - {} vertices, {} triangles",
                part.style.name,
                part.mesh.vertex_count(),
                part.mesh.triangle_count()
            );
        }
    }

    write_scene_json(&cli.output, &parts, &layout, cli.pretty)?;
    println!("{} {}", "Wrote".green().bold(), cli.output);

    Ok(())
}
