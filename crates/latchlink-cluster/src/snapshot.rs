//! Cluster state snapshot read at bridge construction.

use serde::{Deserialize, Serialize};

use crate::{FeatureMap, LockState, OperatingMode};

/// Point-in-time state of a door-lock cluster.
///
/// The host runtime reads this from the device when the channel bridge is
/// constructed; the bridge uses it to seed initial channel state and to
/// sample the feature map. It is never written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorLockSnapshot {
    /// Current lock state.
    pub lock_state: LockState,

    /// Current operating mode, when the device reports one.
    pub operating_mode: Option<OperatingMode>,

    /// Feature flags reported at commissioning time.
    pub features: FeatureMap,
}

impl DoorLockSnapshot {
    /// Create a snapshot with the given lock state and default features.
    #[must_use]
    pub fn new(lock_state: LockState) -> Self {
        Self {
            lock_state,
            operating_mode: None,
            features: FeatureMap::default(),
        }
    }

    /// Set the operating mode.
    #[must_use]
    pub fn with_operating_mode(mut self, mode: OperatingMode) -> Self {
        self.operating_mode = Some(mode);
        self
    }

    /// Set the feature map.
    #[must_use]
    pub fn with_features(mut self, features: FeatureMap) -> Self {
        self.features = features;
        self
    }
}
