//! Door-lock cluster data model.
//!
//! This crate models the device side of the lock bridge: enumerated lock
//! state and operating mode, the feature map sampled at commissioning
//! time, the commands the bridge can dispatch, and the attribute-change
//! events the device session layer delivers.

pub mod command;
pub mod event;
pub mod features;
pub mod snapshot;
pub mod state;

pub use command::LockCommand;
pub use event::{AttributeChange, AttributeValue};
pub use features::FeatureMap;
pub use snapshot::DoorLockSnapshot;
pub use state::{LockState, OperatingMode};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
