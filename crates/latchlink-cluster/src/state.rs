//! Enumerated door-lock cluster states.
//!
//! This module defines the two enumerated attributes the bridge observes:
//! the lock state and the operating mode. Both carry fixed numeric codes
//! on the wire; the enums map between the code and the named value.
//!
//! # Examples
//!
//! ```
//! use latchlink_cluster::{LockState, OperatingMode};
//!
//! assert_eq!(OperatingMode::Privacy.code(), 2);
//! assert_eq!(OperatingMode::from_code(2).unwrap(), OperatingMode::Privacy);
//!
//! assert!(LockState::Locked.is_locked());
//! assert!(!LockState::Unlatched.is_locked());
//! ```

use latchlink_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Current state of the lock mechanism.
///
/// Only `Locked` means the door is fully secured; the channel layer
/// projects every other state to "not locked".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockState {
    /// Lock state is not known or not fully locked.
    Unspecified,

    /// Lock is fully engaged.
    Locked,

    /// Lock is fully disengaged.
    Unlocked,

    /// Bolt is engaged but the latch is retracted.
    Unlatched,
}

impl LockState {
    /// Get the numeric wire code for this state.
    #[must_use]
    pub fn code(&self) -> i64 {
        match self {
            LockState::Unspecified => 0,
            LockState::Locked => 1,
            LockState::Unlocked => 2,
            LockState::Unlatched => 3,
        }
    }

    /// Decode a numeric wire code into a lock state.
    ///
    /// # Errors
    /// Returns `Error::UnknownCode` for codes outside 0-3.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(LockState::Unspecified),
            1 => Ok(LockState::Locked),
            2 => Ok(LockState::Unlocked),
            3 => Ok(LockState::Unlatched),
            _ => Err(Error::UnknownCode {
                attribute: "lockState",
                code,
            }),
        }
    }

    /// True only for the fully locked state.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, LockState::Locked)
    }
}

/// Device-level operating mode.
///
/// Modes restrict which actors may operate the lock; the bridge forwards
/// the numeric code without interpreting the restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingMode {
    /// Regular operation, all actors allowed.
    Normal,

    /// Vacation mode, remote operation only.
    Vacation,

    /// Privacy mode, exterior operation disabled.
    Privacy,

    /// Remote lock and unlock disabled.
    NoRemoteLockUnlock,

    /// Passage mode, lock stays released.
    Passage,
}

impl OperatingMode {
    /// Get the numeric wire code for this mode.
    #[must_use]
    pub fn code(&self) -> i64 {
        match self {
            OperatingMode::Normal => 0,
            OperatingMode::Vacation => 1,
            OperatingMode::Privacy => 2,
            OperatingMode::NoRemoteLockUnlock => 3,
            OperatingMode::Passage => 4,
        }
    }

    /// Decode a numeric wire code into an operating mode.
    ///
    /// # Errors
    /// Returns `Error::UnknownCode` for codes outside 0-4.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(OperatingMode::Normal),
            1 => Ok(OperatingMode::Vacation),
            2 => Ok(OperatingMode::Privacy),
            3 => Ok(OperatingMode::NoRemoteLockUnlock),
            4 => Ok(OperatingMode::Passage),
            _ => Err(Error::UnknownCode {
                attribute: "operatingMode",
                code,
            }),
        }
    }
}
