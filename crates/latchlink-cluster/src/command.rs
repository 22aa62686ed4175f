//! Outbound door-lock cluster commands.

use serde::{Deserialize, Serialize};

/// Command sent to the door-lock device.
///
/// `Unlock` and `Unbolt` are deliberately distinct: unlock fully
/// disengages the mechanism, unbolt only retracts the latch.
///
/// # Examples
///
/// ```
/// use latchlink_cluster::LockCommand;
///
/// assert_eq!(LockCommand::Unbolt.name(), "unboltDoor");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockCommand {
    /// Engage the lock.
    Lock,

    /// Fully disengage the lock.
    Unlock,

    /// Retract the latch without a full unlock.
    Unbolt,
}

impl LockCommand {
    /// Get the wire command name used when dispatching to the device.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            LockCommand::Lock => "lockDoor",
            LockCommand::Unlock => "unlockDoor",
            LockCommand::Unbolt => "unboltDoor",
        }
    }
}
