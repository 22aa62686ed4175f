//! Door-lock cluster feature map.

use serde::{Deserialize, Serialize};

/// Feature flags reported by a door-lock device.
///
/// The feature map is read once when the device is commissioned and does
/// not change afterwards. Only [`unbolting`](FeatureMap::unbolting)
/// influences the channel layer (it gates the momentary unlock channel);
/// the remaining flags are carried as snapshot data for the host runtime.
///
/// # Examples
///
/// ```
/// use latchlink_cluster::FeatureMap;
///
/// let features = FeatureMap::default().with_unbolting(true);
/// assert!(features.unbolting);
/// assert!(!features.pin_credential);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureMap {
    /// Device supports PIN credentials.
    pub pin_credential: bool,

    /// Device supports RFID credentials.
    pub rfid_credential: bool,

    /// Device supports fingerprint or vein credentials.
    pub fingerprint_credential: bool,

    /// Device keeps an operation event log.
    pub logging: bool,

    /// Device supports access schedules.
    pub schedules: bool,

    /// Device can retract the latch without a full unlock.
    pub unbolting: bool,
}

impl FeatureMap {
    /// Set the PIN credential flag.
    #[must_use]
    pub fn with_pin_credential(mut self, value: bool) -> Self {
        self.pin_credential = value;
        self
    }

    /// Set the RFID credential flag.
    #[must_use]
    pub fn with_rfid_credential(mut self, value: bool) -> Self {
        self.rfid_credential = value;
        self
    }

    /// Set the fingerprint credential flag.
    #[must_use]
    pub fn with_fingerprint_credential(mut self, value: bool) -> Self {
        self.fingerprint_credential = value;
        self
    }

    /// Set the event logging flag.
    #[must_use]
    pub fn with_logging(mut self, value: bool) -> Self {
        self.logging = value;
        self
    }

    /// Set the schedules flag.
    #[must_use]
    pub fn with_schedules(mut self, value: bool) -> Self {
        self.schedules = value;
        self
    }

    /// Set the unbolting flag.
    #[must_use]
    pub fn with_unbolting(mut self, value: bool) -> Self {
        self.unbolting = value;
        self
    }
}
