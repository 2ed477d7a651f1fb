//! Centralized motion-tuning options with TOML preset support.
//!
//! All tweakable integrator settings (speed bounds, accelerations, drag
//! factors, zoom-coupling curves) are consolidated here. Options
//! serialize to/from TOML for tuning presets; every section uses
//! `#[serde(default)]` so a partial preset file (e.g. only overriding
//! `[fps_linear]`) works correctly.
//!
//! Applying options goes through the integrators' validating setters,
//! so a preset carrying an out-of-range value is rejected with an
//! error rather than silently clamped.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::KinecamError;
use crate::integrator::angular::{
    DEFAULT_ANGULAR_ACCELERATION, DEFAULT_ANGULAR_DRAG,
    DEFAULT_ANGULAR_MAX_SPEED,
};
use crate::integrator::linear::{
    DEFAULT_LINEAR_ACCELERATION, DEFAULT_LINEAR_DRAG,
    DEFAULT_LINEAR_MAX_SPEED,
};
use crate::integrator::{AxisDrive, FpsRig, OrbitRig};
use crate::util::scale::RadiusScale;

/// Tuning for one pair of rotation axes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AngularOptions {
    /// Rotation speed bound in radians per second.
    pub max_speed: f64,
    /// Rotation acceleration in radians per second squared.
    pub acceleration: f64,
    /// Per-second rotation speed retention factor.
    pub drag: f64,
}

impl Default for AngularOptions {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_ANGULAR_MAX_SPEED,
            acceleration: DEFAULT_ANGULAR_ACCELERATION,
            drag: DEFAULT_ANGULAR_DRAG,
        }
    }
}

impl AngularOptions {
    fn apply(&self, axis: &mut AxisDrive) -> Result<(), KinecamError> {
        axis.set_max_speed(self.max_speed)?;
        axis.set_acceleration(self.acceleration)?;
        axis.set_drag(self.drag)
    }
}

/// Tuning for the free-look translation axes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinearOptions {
    /// Translation speed bound in units per second.
    pub max_speed: f64,
    /// Translation acceleration in units per second squared.
    pub acceleration: f64,
    /// Per-second translation speed retention factor.
    pub drag: f64,
}

impl Default for LinearOptions {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_LINEAR_MAX_SPEED,
            acceleration: DEFAULT_LINEAR_ACCELERATION,
            drag: DEFAULT_LINEAR_DRAG,
        }
    }
}

impl LinearOptions {
    fn apply(&self, axis: &mut AxisDrive) -> Result<(), KinecamError> {
        axis.set_max_speed(self.max_speed)?;
        axis.set_acceleration(self.acceleration)?;
        axis.set_drag(self.drag)
    }
}

/// Tuning for the orbit pan and zoom axes, including the zoom-coupling
/// curves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitLinearOptions {
    /// Pan speed bound in units per second (before radius scaling).
    pub max_speed: f64,
    /// Pan acceleration (before radius scaling).
    pub acceleration: f64,
    /// Per-second pan speed retention factor.
    pub drag: f64,
    /// Zoom speed bound in radius units per second.
    pub zoom_max_speed: f64,
    /// Zoom acceleration.
    pub zoom_acceleration: f64,
    /// Per-second zoom speed retention factor.
    pub zoom_drag: f64,
    /// Curve scaling pan acceleration and bound by the orbit radius.
    /// `unit` decouples panning from zoom entirely.
    pub pan_scale: RadiusScale,
    /// Curve scaling the pan drag base by the orbit radius.
    pub drag_scale: RadiusScale,
}

impl Default for OrbitLinearOptions {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_LINEAR_MAX_SPEED,
            acceleration: DEFAULT_LINEAR_ACCELERATION,
            drag: DEFAULT_LINEAR_DRAG,
            zoom_max_speed: DEFAULT_LINEAR_MAX_SPEED,
            zoom_acceleration: DEFAULT_LINEAR_ACCELERATION,
            zoom_drag: DEFAULT_LINEAR_DRAG,
            pan_scale: RadiusScale::DEFAULT_PAN,
            drag_scale: RadiusScale::DEFAULT_DRAG,
        }
    }
}

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default,
)]
#[serde(default)]
pub struct Options {
    /// Free-look rotation tuning (both axes).
    pub fps_angular: AngularOptions,
    /// Free-look translation tuning (all three axes).
    pub fps_linear: LinearOptions,
    /// Orbit rotation tuning (heading and incline).
    pub orbit_angular: AngularOptions,
    /// Orbit pan/zoom tuning and coupling curves.
    pub orbit_linear: OrbitLinearOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`KinecamError::Io`] if the file cannot be read,
    /// [`KinecamError::PresetParse`] if it is not valid TOML for this
    /// schema.
    pub fn load(path: &Path) -> Result<Self, KinecamError> {
        let content = std::fs::read_to_string(path).map_err(KinecamError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| KinecamError::PresetParse(e.to_string()))?;
        log::info!("Loaded tuning preset from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`KinecamError::PresetParse`] on serialization failure,
    /// [`KinecamError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), KinecamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| KinecamError::PresetParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(KinecamError::Io)?;
        }
        std::fs::write(path, content).map_err(KinecamError::Io)?;
        log::info!("Saved tuning preset to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Apply the free-look sections to a rig.
    ///
    /// # Errors
    ///
    /// Propagates the first setter rejection; earlier fields may
    /// already have been applied.
    pub fn apply_fps(&self, rig: &mut FpsRig) -> Result<(), KinecamError> {
        self.fps_angular.apply(rig.angular_mut().horizontal_mut())?;
        self.fps_angular.apply(rig.angular_mut().vertical_mut())?;
        self.fps_linear.apply(rig.linear_mut().forward_mut())?;
        self.fps_linear.apply(rig.linear_mut().right_mut())?;
        self.fps_linear.apply(rig.linear_mut().up_mut())
    }

    /// Apply the orbit sections to a rig.
    ///
    /// # Errors
    ///
    /// Propagates the first setter rejection; earlier fields may
    /// already have been applied.
    pub fn apply_orbit(&self, rig: &mut OrbitRig) -> Result<(), KinecamError> {
        self.orbit_angular.apply(rig.angular_mut().heading_mut())?;
        self.orbit_angular.apply(rig.angular_mut().incline_mut())?;

        let pan = LinearOptions {
            max_speed: self.orbit_linear.max_speed,
            acceleration: self.orbit_linear.acceleration,
            drag: self.orbit_linear.drag,
        };
        pan.apply(rig.linear_mut().forward_mut())?;
        pan.apply(rig.linear_mut().right_mut())?;
        pan.apply(rig.linear_mut().up_mut())?;

        let zoom = rig.linear_mut().zoom_mut();
        zoom.set_max_speed(self.orbit_linear.zoom_max_speed)?;
        zoom.set_acceleration(self.orbit_linear.zoom_acceleration)?;
        zoom.set_drag(self.orbit_linear.zoom_drag)?;

        rig.linear_mut().set_pan_scale(self.orbit_linear.pan_scale);
        rig.linear_mut().set_drag_scale(self.orbit_linear.drag_scale);
        Ok(())
    }
}
