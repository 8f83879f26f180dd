//! Configuration of the bouncing animation
//!
//! Options are plain serde data so they can be supplied as process-wide
//! defaults, per marker, or patched from a JSON document the way the
//! Leaflet plugin's `setBouncingOptions` extends its option object.

use crate::core::constants::{
    DEFAULT_BOUNCE_HEIGHT, DEFAULT_BOUNCE_SPEED, DEFAULT_CONTRACT_HEIGHT, DEFAULT_CONTRACT_SPEED,
    DEFAULT_SHADOW_ANGLE,
};
use crate::{BounceError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options of the bouncing animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BouncingOptions {
    /// How high the marker can bounce (px)
    pub bounce_height: u32,
    /// How much the marker can contract (px)
    pub contract_height: u32,
    /// Bouncing speed coefficient
    pub bounce_speed: u32,
    /// Contracting speed coefficient
    pub contract_speed: u32,
    /// Shadow inclination angle (radians); `None` keeps the shadow in place
    pub shadow_angle: Option<f64>,
    /// Activate the contract animation
    pub elastic: bool,
    /// Stop every other marker when this one starts bouncing
    pub exclusive: bool,
}

impl Default for BouncingOptions {
    fn default() -> Self {
        Self {
            bounce_height: DEFAULT_BOUNCE_HEIGHT,
            contract_height: DEFAULT_CONTRACT_HEIGHT,
            bounce_speed: DEFAULT_BOUNCE_SPEED,
            contract_speed: DEFAULT_CONTRACT_SPEED,
            shadow_angle: Some(DEFAULT_SHADOW_ANGLE),
            elastic: true,
            exclusive: false,
        }
    }
}

impl BouncingOptions {
    /// Parses an options document; missing fields keep their default value
    pub fn from_json_str(json: &str) -> Result<Self> {
        let patch: Value = serde_json::from_str(json)?;
        let mut options = Self::default();
        options.merge(&patch)?;
        Ok(options)
    }

    /// Overlays a partial JSON object onto these options.
    ///
    /// Keys absent from `patch` are left untouched and `"shadowAngle": null`
    /// cancels shadow movement. On error the options are not modified.
    pub fn merge(&mut self, patch: &Value) -> Result<()> {
        let patch = patch.as_object().ok_or_else(|| {
            BounceError::InvalidOptions("options patch must be a JSON object".to_string())
        })?;

        let mut current = serde_json::to_value(&*self)?;
        if let Value::Object(fields) = &mut current {
            for (key, value) in patch {
                fields.insert(key.clone(), value.clone());
            }
        }

        let merged: BouncingOptions = serde_json::from_value(current)?;
        merged.validate()?;
        *self = merged;
        Ok(())
    }

    /// Checks the invariants the numeric types cannot express
    pub fn validate(&self) -> Result<()> {
        match self.shadow_angle {
            Some(angle) if !angle.is_finite() => Err(BounceError::InvalidOptions(format!(
                "shadow angle must be finite, got {angle}"
            ))),
            _ => Ok(()),
        }
    }

    pub fn with_bounce_height(mut self, height: u32) -> Self {
        self.bounce_height = height;
        self
    }

    pub fn with_contract_height(mut self, height: u32) -> Self {
        self.contract_height = height;
        self
    }

    pub fn with_speeds(mut self, bounce_speed: u32, contract_speed: u32) -> Self {
        self.bounce_speed = bounce_speed;
        self.contract_speed = contract_speed;
        self
    }

    pub fn with_shadow_angle(mut self, angle: Option<f64>) -> Self {
        self.shadow_angle = angle;
        self
    }

    pub fn with_elastic(mut self, elastic: bool) -> Self {
        self.elastic = elastic;
        self
    }

    pub fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }
}
