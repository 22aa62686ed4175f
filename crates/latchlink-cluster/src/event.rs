//! Attribute-change events delivered by the device session layer.

use serde::{Deserialize, Serialize};

use crate::{LockState, OperatingMode};

/// Typed value carried by an attribute-change event.
///
/// The two enumerated variants cover the attributes the door-lock bridge
/// reacts to; `Number` and `Text` carry everything else through
/// untouched so the bridge can ignore attributes it does not map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    /// Enumerated lock state.
    LockState(LockState),

    /// Enumerated operating mode.
    OperatingMode(OperatingMode),

    /// Unmapped numeric attribute.
    Number(i64),

    /// Unmapped textual attribute.
    Text(String),
}

/// Notification that a cluster attribute changed on the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeChange {
    /// Name of the attribute that changed, e.g. `lockState`.
    pub attribute: String,

    /// New value of the attribute.
    pub value: AttributeValue,
}

impl AttributeChange {
    /// Create a new attribute-change event.
    pub fn new(attribute: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            attribute: attribute.into(),
            value,
        }
    }
}
