//! Door-lock channel bridge.
//!
//! Translates a door-lock cluster onto three automation channels:
//!
//! | Channel | Kind | Direction | Meaning |
//! |---------|------|-----------|---------|
//! | `lock-state` | Switch | both | ON = fully locked; commanding ON locks, OFF unbolts |
//! | `unlock` | Switch | command only | momentary full unlock, only on unbolting devices |
//! | `operating-mode` | Number | both | numeric operating-mode code |
//!
//! The bridge is a stateless projector: the device is the source of
//! truth, commands are fire-and-forget, and confirmed changes arrive back
//! as attribute-change events.

use latchlink_cluster::{
    AttributeChange, AttributeValue, DoorLockSnapshot, LockCommand,
};
use latchlink_core::{
    ChannelCommand, ChannelGroupId, ChannelUid, ChannelValue, OnOff,
    constants::{
        ATTR_LOCK_STATE, ATTR_OPERATING_MODE, CHANNEL_ID_LOCK_STATE, CHANNEL_ID_OPERATING_MODE,
        CHANNEL_ID_UNLOCK,
    },
};
use tracing::debug;

use crate::{
    Channel, ChannelAdapter, ChannelBuilder, DeviceLink, ItemKind,
    adapter::{unhandled_command, unhandled_event},
};

/// Channel bridge for a door-lock device.
///
/// The unbolting feature flag is sampled once from the snapshot at
/// construction; the channel set never changes afterwards.
///
/// # Examples
///
/// ```
/// use latchlink_channels::{ChannelAdapter, LockChannelAdapter};
/// use latchlink_cluster::{DoorLockSnapshot, LockState};
/// use latchlink_core::ChannelGroupId;
///
/// let snapshot = DoorLockSnapshot::new(LockState::Locked);
/// let bridge = LockChannelAdapter::new(snapshot, "Front Door");
///
/// let group = ChannelGroupId::new("node-1").unwrap();
/// let channels = bridge.create_channels(&group);
/// assert_eq!(channels.len(), 2); // no unlock channel without unbolting
/// ```
#[derive(Debug)]
pub struct LockChannelAdapter {
    /// Cluster state read at construction time.
    snapshot: DoorLockSnapshot,

    /// Unbolting support, sampled once from the snapshot's feature map.
    unbolting: bool,

    /// Prefix for channel display labels.
    label_prefix: String,
}

impl LockChannelAdapter {
    /// Create a bridge from a cluster snapshot and a label prefix.
    pub fn new(snapshot: DoorLockSnapshot, label_prefix: impl Into<String>) -> Self {
        Self {
            unbolting: snapshot.features.unbolting,
            snapshot,
            label_prefix: label_prefix.into(),
        }
    }

    /// True when the device supports unbolting.
    #[must_use]
    pub fn supports_unbolting(&self) -> bool {
        self.unbolting
    }

    fn channel(&self, group: &ChannelGroupId, channel_id: &str, kind: ItemKind, label: &str) -> Channel {
        // Channel ids here are the crate's fixed constants, all valid.
        let uid = ChannelUid::new(group.clone(), channel_id).expect("fixed channel ids are valid");
        ChannelBuilder::new(uid, kind)
            .label(format!("{} {label}", self.label_prefix))
            .build()
    }

    fn lock_state_projection(&self, locked: bool) -> ChannelValue {
        ChannelValue::Switch(OnOff::from_bool(locked))
    }
}

impl ChannelAdapter for LockChannelAdapter {
    fn create_channels(&self, group: &ChannelGroupId) -> Vec<Channel> {
        let mut channels = Vec::with_capacity(3);

        // Lock state channel - reflects actual lock state
        channels.push(self.channel(group, CHANNEL_ID_LOCK_STATE, ItemKind::Switch, "Lock State"));

        // Momentary unlock channel, only on devices that can unbolt
        if self.unbolting {
            channels.push(self.channel(group, CHANNEL_ID_UNLOCK, ItemKind::Switch, "Unlock"));
        }

        channels.push(self.channel(
            group,
            CHANNEL_ID_OPERATING_MODE,
            ItemKind::Number,
            "Operating Mode",
        ));

        channels
    }

    fn handle_command(
        &mut self,
        link: &mut dyn DeviceLink,
        channel_id: &str,
        command: &ChannelCommand,
    ) {
        match (channel_id, command) {
            // Lock state channel: ON = lock, OFF = unbolt (not a full unlock)
            (CHANNEL_ID_LOCK_STATE, ChannelCommand::Switch(value)) => {
                let lock_command = if value.is_on() {
                    LockCommand::Lock
                } else {
                    LockCommand::Unbolt
                };
                debug!(command = lock_command.name(), "Dispatching lock-state command");
                link.send_command(lock_command);
            }
            // Unlock channel: momentary, only ON does anything
            (CHANNEL_ID_UNLOCK, ChannelCommand::Switch(OnOff::On)) => {
                debug!(command = LockCommand::Unlock.name(), "Dispatching momentary unlock");
                link.send_command(LockCommand::Unlock);

                // Echo OFF immediately; the channel models an action, not a state
                link.update_state(CHANNEL_ID_UNLOCK, ChannelValue::Switch(OnOff::Off));
            }
            (CHANNEL_ID_UNLOCK, ChannelCommand::Switch(OnOff::Off)) => {}
            // Operating mode channel: write the attribute, no local echo
            (CHANNEL_ID_OPERATING_MODE, ChannelCommand::Number(code)) => {
                link.write_attribute(ATTR_OPERATING_MODE, code.to_string());
            }
            _ => unhandled_command(channel_id, command),
        }
    }

    fn on_event(&mut self, link: &mut dyn DeviceLink, change: &AttributeChange) {
        match (change.attribute.as_str(), &change.value) {
            (ATTR_LOCK_STATE, AttributeValue::LockState(state)) => {
                link.update_state(
                    CHANNEL_ID_LOCK_STATE,
                    self.lock_state_projection(state.is_locked()),
                );
            }
            (ATTR_OPERATING_MODE, AttributeValue::OperatingMode(mode)) => {
                link.update_state(CHANNEL_ID_OPERATING_MODE, ChannelValue::Number(mode.code()));
            }
            _ => unhandled_event(change),
        }
    }

    fn init_state(&mut self, link: &mut dyn DeviceLink) {
        link.update_state(
            CHANNEL_ID_LOCK_STATE,
            self.lock_state_projection(self.snapshot.lock_state.is_locked()),
        );
        if let Some(mode) = self.snapshot.operating_mode {
            link.update_state(CHANNEL_ID_OPERATING_MODE, ChannelValue::Number(mode.code()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockDeviceLink;
    use latchlink_cluster::{FeatureMap, LockState, OperatingMode};
    use rstest::rstest;

    fn bridge(unbolting: bool) -> LockChannelAdapter {
        let snapshot = DoorLockSnapshot::new(LockState::Locked)
            .with_features(FeatureMap::default().with_unbolting(unbolting));
        LockChannelAdapter::new(snapshot, "Test")
    }

    fn group() -> ChannelGroupId {
        ChannelGroupId::new("node-1").unwrap()
    }

    #[rstest]
    #[case(false, 2)]
    #[case(true, 3)]
    fn test_channel_count_by_feature(#[case] unbolting: bool, #[case] expected: usize) {
        let channels = bridge(unbolting).create_channels(&group());
        assert_eq!(channels.len(), expected);
    }

    #[test]
    fn test_channel_kinds_and_labels() {
        let channels = bridge(true).create_channels(&group());
        let ids: Vec<&str> = channels.iter().map(Channel::channel_id).collect();
        assert_eq!(ids, vec!["lock-state", "unlock", "operating-mode"]);

        assert_eq!(channels[0].item_kind(), ItemKind::Switch);
        assert_eq!(channels[1].item_kind(), ItemKind::Switch);
        assert_eq!(channels[2].item_kind(), ItemKind::Number);
        assert_eq!(channels[0].label(), Some("Test Lock State"));
    }

    #[rstest]
    #[case(OnOff::On, LockCommand::Lock)]
    #[case(OnOff::Off, LockCommand::Unbolt)]
    fn test_lock_state_command(#[case] value: OnOff, #[case] expected: LockCommand) {
        let mut link = MockDeviceLink::new();
        bridge(false).handle_command(
            &mut link,
            CHANNEL_ID_LOCK_STATE,
            &ChannelCommand::Switch(value),
        );
        assert_eq!(link.commands(), &[expected]);
        assert!(link.updates().is_empty());
    }

    #[test]
    fn test_momentary_unlock_resets_to_off() {
        let mut link = MockDeviceLink::new();
        bridge(true).handle_command(&mut link, CHANNEL_ID_UNLOCK, &ChannelCommand::Switch(OnOff::On));

        assert_eq!(link.commands(), &[LockCommand::Unlock]);
        assert_eq!(
            link.updates(),
            &[("unlock".to_string(), ChannelValue::Switch(OnOff::Off))]
        );
    }

    #[test]
    fn test_unlock_off_is_ignored() {
        let mut link = MockDeviceLink::new();
        bridge(true).handle_command(&mut link, CHANNEL_ID_UNLOCK, &ChannelCommand::Switch(OnOff::Off));
        assert!(link.commands().is_empty());
        assert!(link.updates().is_empty());
    }

    #[test]
    fn test_operating_mode_write() {
        let mut link = MockDeviceLink::new();
        bridge(false).handle_command(&mut link, CHANNEL_ID_OPERATING_MODE, &ChannelCommand::Number(2));
        assert_eq!(
            link.writes(),
            &[("operatingMode".to_string(), "2".to_string())]
        );
        assert!(link.updates().is_empty());
    }

    #[rstest]
    #[case("lock-state", ChannelCommand::Number(1))] // wrong kind
    #[case("operating-mode", ChannelCommand::Switch(OnOff::On))] // wrong kind
    #[case("volume", ChannelCommand::Number(1))] // unknown channel
    fn test_unmatched_commands_ignored(#[case] channel_id: &str, #[case] command: ChannelCommand) {
        let mut link = MockDeviceLink::new();
        bridge(true).handle_command(&mut link, channel_id, &command);
        assert!(link.is_empty());
    }

    #[rstest]
    #[case(LockState::Locked, OnOff::On)]
    #[case(LockState::Unlocked, OnOff::Off)]
    #[case(LockState::Unlatched, OnOff::Off)]
    #[case(LockState::Unspecified, OnOff::Off)]
    fn test_lock_state_event_projection(#[case] state: LockState, #[case] expected: OnOff) {
        let mut link = MockDeviceLink::new();
        bridge(false).on_event(
            &mut link,
            &AttributeChange::new(ATTR_LOCK_STATE, AttributeValue::LockState(state)),
        );
        assert_eq!(
            link.updates(),
            &[("lock-state".to_string(), ChannelValue::Switch(expected))]
        );
    }

    #[test]
    fn test_operating_mode_event() {
        let mut link = MockDeviceLink::new();
        bridge(false).on_event(
            &mut link,
            &AttributeChange::new(
                ATTR_OPERATING_MODE,
                AttributeValue::OperatingMode(OperatingMode::Privacy),
            ),
        );
        assert_eq!(
            link.updates(),
            &[("operating-mode".to_string(), ChannelValue::Number(2))]
        );
    }

    #[test]
    fn test_unknown_attribute_ignored() {
        let mut link = MockDeviceLink::new();
        bridge(false).on_event(
            &mut link,
            &AttributeChange::new("doorState", AttributeValue::Number(1)),
        );
        assert!(link.is_empty());
    }

    #[test]
    fn test_init_state_with_mode() {
        let snapshot = DoorLockSnapshot::new(LockState::Locked)
            .with_operating_mode(OperatingMode::Normal);
        let mut adapter = LockChannelAdapter::new(snapshot, "Test");
        let mut link = MockDeviceLink::new();
        adapter.init_state(&mut link);

        assert_eq!(
            link.updates(),
            &[
                ("lock-state".to_string(), ChannelValue::Switch(OnOff::On)),
                ("operating-mode".to_string(), ChannelValue::Number(0)),
            ]
        );
    }

    #[test]
    fn test_init_state_without_mode() {
        let snapshot = DoorLockSnapshot::new(LockState::Unlocked);
        let mut adapter = LockChannelAdapter::new(snapshot, "Test");
        let mut link = MockDeviceLink::new();
        adapter.init_state(&mut link);

        assert_eq!(
            link.updates(),
            &[("lock-state".to_string(), ChannelValue::Switch(OnOff::Off))]
        );
    }
}
