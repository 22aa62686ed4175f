//! Mock device link for testing and development.
//!
//! This module provides a [`DeviceLink`] implementation that records
//! everything a bridge emits, so tests can assert on dispatched commands,
//! attribute writes, and channel updates without a host runtime.

use latchlink_cluster::LockCommand;
use latchlink_core::ChannelValue;

use crate::DeviceLink;

/// Recording device link for tests.
///
/// # Examples
///
/// ```
/// use latchlink_channels::{ChannelAdapter, LockChannelAdapter, mock::MockDeviceLink};
/// use latchlink_cluster::{DoorLockSnapshot, LockState};
///
/// let snapshot = DoorLockSnapshot::new(LockState::Locked);
/// let mut bridge = LockChannelAdapter::new(snapshot, "Front Door");
///
/// let mut link = MockDeviceLink::new();
/// bridge.init_state(&mut link);
/// assert_eq!(link.updates().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockDeviceLink {
    commands: Vec<LockCommand>,
    writes: Vec<(String, String)>,
    updates: Vec<(String, ChannelValue)>,
}

impl MockDeviceLink {
    /// Create an empty recording link.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands dispatched to the device, in order.
    #[must_use]
    pub fn commands(&self) -> &[LockCommand] {
        &self.commands
    }

    /// Attribute writes, as (attribute, value) pairs in order.
    #[must_use]
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    /// Channel state updates, as (channel id, value) pairs in order.
    #[must_use]
    pub fn updates(&self) -> &[(String, ChannelValue)] {
        &self.updates
    }

    /// True when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.writes.is_empty() && self.updates.is_empty()
    }

    /// Clear all recordings.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.writes.clear();
        self.updates.clear();
    }
}

impl DeviceLink for MockDeviceLink {
    fn send_command(&mut self, command: LockCommand) {
        self.commands.push(command);
    }

    fn write_attribute(&mut self, attribute: &str, value: String) {
        self.writes.push((attribute.to_string(), value));
    }

    fn update_state(&mut self, channel_id: &str, value: ChannelValue) {
        self.updates.push((channel_id.to_string(), value));
    }
}
