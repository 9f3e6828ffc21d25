// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cabinetry Inc.

//! Scene module - styled parts and render layout

use crate::cabinet::CabinetParams;
use crate::geometry::Mesh;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Style attributes the renderer applies to one part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartStyle {
    /// CSS color name understood by the renderer
    pub color: String,
    /// Opacity in [0, 1]
    pub opacity: f64,
    /// Display name
    pub name: String,
}

impl PartStyle {
    pub fn new(color: &str, opacity: f64, name: impl Into<String>) -> Self {
        Self {
            color: color.to_string(),
            opacity,
            name: name.into(),
        }
    }
}

/// A styled, positioned mesh ready for rendering. Assembled once per
/// cabinet part and never revisited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenePart {
    pub mesh: Mesh,
    pub style: PartStyle,
}

impl ScenePart {
    pub fn new(mesh: Mesh, style: PartStyle) -> Self {
        Self { mesh, style }
    }
}

/// Global scene layout handed to the renderer alongside the parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneLayout {
    pub show_axes: bool,
    pub aspect_ratio: Vector3<f64>,
    pub camera_eye: Point3<f64>,
    pub show_legend: bool,
    pub title: String,
}

impl SceneLayout {
    /// Layout matching the cabinet proportions: axes and legend hidden,
    /// aspect ratio taken from the body dimensions, a fixed oblique camera.
    pub fn for_cabinet(params: &CabinetParams) -> Self {
        // Normalize by width so the default cabinet keeps the 1 : 0.5 : 2
        // proportions of its body.
        let w = params.width.max(f64::MIN_POSITIVE);

        Self {
            show_axes: false,
            aspect_ratio: Vector3::new(params.width / w, params.depth / w, params.height / w),
            camera_eye: Point3::new(1.8, 2.0, 1.2),
            show_legend: false,
            title: "Wardrobe 3D - Left Door Open".to_string(),
        }
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::for_cabinet(&CabinetParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_layout_matches_cabinet_proportions() {
        let layout = SceneLayout::default();
        assert!(!layout.show_axes);
        assert!(!layout.show_legend);
        assert_relative_eq!(layout.aspect_ratio.x, 1.0);
        assert_relative_eq!(layout.aspect_ratio.y, 0.5);
        assert_relative_eq!(layout.aspect_ratio.z, 2.0);
        assert_eq!(layout.camera_eye, Point3::new(1.8, 2.0, 1.2));
    }
}
