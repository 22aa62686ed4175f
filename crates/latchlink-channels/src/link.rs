//! Host boundary trait definitions.
//!
//! This module defines the contract between a channel bridge and the host
//! runtime it is plugged into. The host owns the device transport and the
//! channel registry; the bridge only calls through this trait. Everything
//! is synchronous and runs to completion: the host delivers later device
//! responses as separate attribute-change events.

use latchlink_cluster::LockCommand;
use latchlink_core::ChannelValue;

/// Host-side sink for everything a channel bridge emits.
///
/// Implementations forward to the real device session and channel
/// registry. Command and write failures are the host's concern; the
/// bridge fires and forgets.
pub trait DeviceLink {
    /// Dispatch a cluster command to the device.
    fn send_command(&mut self, command: LockCommand);

    /// Write a cluster attribute on the device.
    fn write_attribute(&mut self, attribute: &str, value: String);

    /// Push a new state value to a channel.
    fn update_state(&mut self, channel_id: &str, value: ChannelValue);
}
