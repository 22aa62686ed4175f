//! Channel descriptors and their builder.
//!
//! A channel descriptor names one automation-bus channel of a device
//! endpoint: its uid, the item kind it accepts, and a display label. The
//! host runtime turns descriptors into bus channels; this crate only
//! constructs them.

use latchlink_core::ChannelUid;
use serde::{Deserialize, Serialize};

/// Item kind a channel accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Binary on/off items.
    Switch,

    /// Integer number items.
    Number,
}

impl ItemKind {
    /// Get the bus item-type name for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Switch => "Switch",
            ItemKind::Number => "Number",
        }
    }
}

/// Descriptor of one automation-bus channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    uid: ChannelUid,
    item_kind: ItemKind,
    label: Option<String>,
}

impl Channel {
    /// Get the full channel uid.
    #[must_use]
    pub fn uid(&self) -> &ChannelUid {
        &self.uid
    }

    /// Get the channel id without the group prefix.
    #[must_use]
    pub fn channel_id(&self) -> &str {
        self.uid.channel_id()
    }

    /// Get the item kind this channel accepts.
    #[must_use]
    pub fn item_kind(&self) -> ItemKind {
        self.item_kind
    }

    /// Get the display label, if one was set.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Builder for channel descriptors
///
/// # Example
/// ```
/// use latchlink_channels::{ChannelBuilder, ItemKind};
/// use latchlink_core::{ChannelGroupId, ChannelUid};
///
/// let group = ChannelGroupId::new("node-12345-1").unwrap();
/// let uid = ChannelUid::new(group, "lock-state").unwrap();
/// let channel = ChannelBuilder::new(uid, ItemKind::Switch)
///     .label("Front Door Lock State")
///     .build();
///
/// assert_eq!(channel.channel_id(), "lock-state");
/// assert_eq!(channel.item_kind().as_str(), "Switch");
/// ```
pub struct ChannelBuilder {
    uid: ChannelUid,
    item_kind: ItemKind,
    label: Option<String>,
}

impl ChannelBuilder {
    /// Create a new builder for the given uid and item kind.
    pub fn new(uid: ChannelUid, item_kind: ItemKind) -> Self {
        ChannelBuilder {
            uid,
            item_kind,
            label: None,
        }
    }

    /// Set the display label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build the channel descriptor.
    #[must_use]
    pub fn build(self) -> Channel {
        Channel {
            uid: self.uid,
            item_kind: self.item_kind,
            label: self.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latchlink_core::ChannelGroupId;

    fn uid(channel_id: &str) -> ChannelUid {
        let group = ChannelGroupId::new("node-1").unwrap();
        ChannelUid::new(group, channel_id).unwrap()
    }

    #[test]
    fn test_builder_without_label() {
        let channel = ChannelBuilder::new(uid("operating-mode"), ItemKind::Number).build();
        assert_eq!(channel.channel_id(), "operating-mode");
        assert_eq!(channel.item_kind(), ItemKind::Number);
        assert_eq!(channel.label(), None);
    }

    #[test]
    fn test_builder_with_label() {
        let channel = ChannelBuilder::new(uid("unlock"), ItemKind::Switch)
            .label("Unlock")
            .build();
        assert_eq!(channel.label(), Some("Unlock"));
        assert_eq!(channel.uid().to_string(), "node-1#unlock");
    }
}
