//! Generic channel-bridge seam.
//!
//! Every device bridge implements [`ChannelAdapter`]: it describes its
//! channels, handles inbound channel commands, reacts to device
//! attribute-change events, and seeds initial channel state. The default
//! method bodies are the shared fallthrough handlers; a bridge matches
//! the inputs it understands and routes everything else to them.

use latchlink_cluster::AttributeChange;
use latchlink_core::{ChannelCommand, ChannelGroupId};
use tracing::debug;

use crate::{Channel, DeviceLink};

/// Shared fallthrough for channel commands no bridge handler matched.
///
/// Unrecognized commands are not errors on the bus; they are traced and
/// dropped.
pub fn unhandled_command(channel_id: &str, command: &ChannelCommand) {
    debug!(channel_id, ?command, "Ignoring unhandled channel command");
}

/// Shared fallthrough for attribute changes no bridge handler matched.
pub fn unhandled_event(change: &AttributeChange) {
    debug!(attribute = %change.attribute, "Ignoring unhandled attribute change");
}

/// Bidirectional translator between one device cluster and its channels.
pub trait ChannelAdapter {
    /// Describe the channels this bridge exposes under the given group.
    ///
    /// Pure: no host calls, no side effects. The returned set is fixed
    /// for the lifetime of the bridge.
    fn create_channels(&self, group: &ChannelGroupId) -> Vec<Channel>;

    /// Handle a command received on one of this bridge's channels.
    fn handle_command(
        &mut self,
        link: &mut dyn DeviceLink,
        channel_id: &str,
        command: &ChannelCommand,
    ) {
        let _ = link;
        unhandled_command(channel_id, command);
    }

    /// Handle an attribute-change event from the device.
    fn on_event(&mut self, link: &mut dyn DeviceLink, change: &AttributeChange) {
        let _ = link;
        unhandled_event(change);
    }

    /// Push the bridge's initial channel state from its snapshot.
    fn init_state(&mut self, link: &mut dyn DeviceLink) {
        let _ = link;
    }
}
