//! Core constants for the door-lock channel bridge.
//!
//! This module defines the fixed identifiers shared between the cluster
//! layer and the channel layer: channel ids, the cluster name used when
//! dispatching device commands, and the attribute names carried by
//! attribute-change events.
//!
//! # Channel Uid Format
//!
//! A full channel uid is the group id and the channel id joined by `#`:
//!
//! ```text
//! <GROUP>#<CHANNEL_ID>
//! ```
//!
//! For example `node-12345-1#lock-state`. Group ids therefore must not
//! contain the `#` separator themselves.
//!
//! # Usage
//!
//! ```
//! use latchlink_core::constants::*;
//!
//! assert_eq!(CHANNEL_ID_LOCK_STATE, "lock-state");
//! assert_eq!(ATTR_OPERATING_MODE, "operatingMode");
//! ```

/// Channel id of the persistent lock-state channel (Switch).
///
/// Reflects the binary projection of the device's lock state: ON when
/// fully locked, OFF for every other state.
pub const CHANNEL_ID_LOCK_STATE: &str = "lock-state";

/// Channel id of the momentary unlock channel (Switch).
///
/// Only exists on devices that support unbolting; its ON state is never
/// persisted.
pub const CHANNEL_ID_UNLOCK: &str = "unlock";

/// Channel id of the operating-mode channel (Number).
pub const CHANNEL_ID_OPERATING_MODE: &str = "operating-mode";

/// Cluster name used when addressing the door-lock device.
pub const CLUSTER_NAME: &str = "doorLock";

/// Attribute name of the device's lock state.
pub const ATTR_LOCK_STATE: &str = "lockState";

/// Attribute name of the device's operating mode.
pub const ATTR_OPERATING_MODE: &str = "operatingMode";

/// Separator between a channel group id and a channel id in a full uid.
pub const UID_SEPARATOR: char = '#';
