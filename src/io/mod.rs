// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cabinetry Inc.

//! I/O module - scene document export

mod export_scene;

pub use export_scene::{export_scene, write_scene_json, ExportError};
