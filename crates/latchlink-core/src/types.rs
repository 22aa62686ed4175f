use crate::{
    Result,
    constants::UID_SEPARATOR,
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel group identifier
///
/// Identifies the group all of a device endpoint's channels belong to,
/// for example `node-12345-1`. Group ids are non-empty ASCII without the
/// `#` uid separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelGroupId(String);

impl ChannelGroupId {
    /// Create a new channel group id with validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidChannelGroup` if the id is empty, contains
    /// non-ASCII characters, whitespace, or the `#` separator.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::InvalidChannelGroup(
                "Group id must not be empty".to_string(),
            ));
        }
        if !id.chars().all(|c| c.is_ascii_graphic() && c != UID_SEPARATOR) {
            return Err(Error::InvalidChannelGroup(format!(
                "Group id must be printable ASCII without '{UID_SEPARATOR}', got {id:?}"
            )));
        }
        Ok(ChannelGroupId(id))
    }

    /// Get the group id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelGroupId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ChannelGroupId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ChannelGroupId::new(s)
    }
}

/// Validate a bare channel id (the part after `#` in a full uid).
///
/// Channel ids are non-empty, lowercase ASCII alphanumerics and hyphens,
/// e.g. `lock-state`.
///
/// # Errors
/// Returns `Error::InvalidChannelId` if the id does not match that shape.
pub fn validate_channel_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidChannelId(
            "Channel id must not be empty".to_string(),
        ));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(Error::InvalidChannelId(format!(
            "Channel id must be lowercase alphanumeric with hyphens, got {id:?}"
        )));
    }
    Ok(())
}

/// Full channel uid: a channel group id plus a channel id.
///
/// Formatted as `<group>#<channel-id>`, e.g. `node-12345-1#lock-state`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelUid {
    group: ChannelGroupId,
    channel_id: String,
}

impl ChannelUid {
    /// Create a new channel uid from a group and a channel id.
    ///
    /// # Errors
    /// Returns `Error::InvalidChannelId` if the channel id is malformed.
    pub fn new(group: ChannelGroupId, channel_id: impl Into<String>) -> Result<Self> {
        let channel_id = channel_id.into();
        validate_channel_id(&channel_id)?;
        Ok(ChannelUid { group, channel_id })
    }

    /// Get the channel group id.
    #[must_use]
    pub fn group(&self) -> &ChannelGroupId {
        &self.group
    }

    /// Get the channel id without the group prefix.
    #[must_use]
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }
}

impl fmt::Display for ChannelUid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.group, UID_SEPARATOR, self.channel_id)
    }
}

impl std::str::FromStr for ChannelUid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (group, channel_id) = s.split_once(UID_SEPARATOR).ok_or_else(|| {
            Error::InvalidChannelUid(format!("Missing '{UID_SEPARATOR}' separator in {s:?}"))
        })?;
        ChannelUid::new(ChannelGroupId::new(group)?, channel_id)
    }
}

/// Binary channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnOff {
    On,
    Off,
}

impl OnOff {
    /// Convert a boolean into `On` (true) or `Off` (false).
    #[must_use]
    pub fn from_bool(value: bool) -> Self {
        if value { OnOff::On } else { OnOff::Off }
    }

    /// True when the value is `On`.
    #[must_use]
    pub fn is_on(&self) -> bool {
        matches!(self, OnOff::On)
    }
}

impl fmt::Display for OnOff {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OnOff::On => write!(f, "ON"),
            OnOff::Off => write!(f, "OFF"),
        }
    }
}

/// State value pushed to a channel.
///
/// Channels accept one item kind each; the value union covers the two
/// kinds the door-lock bridge uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelValue {
    /// Binary switch state.
    Switch(OnOff),

    /// Integer number state.
    Number(i64),
}

/// Command received from a channel.
///
/// Distinct from [`ChannelValue`]: a command asks the device to do
/// something, a value reports what the device did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelCommand {
    /// Binary switch command.
    Switch(OnOff),

    /// Integer number command.
    Number(i64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("node-12345-1")]
    #[case("a")]
    #[case("matter:node:test:12345:1")]
    fn test_group_id_valid(#[case] input: &str) {
        let group: ChannelGroupId = input.parse().unwrap();
        assert_eq!(group.as_str(), input);
    }

    #[rstest]
    #[case("")] // empty
    #[case("node#1")] // separator
    #[case("node 1")] // whitespace
    #[case("nó-1")] // non-ASCII
    fn test_group_id_invalid(#[case] input: &str) {
        let result: Result<ChannelGroupId> = input.parse();
        assert!(result.is_err());
    }

    #[rstest]
    #[case("lock-state")]
    #[case("unlock")]
    #[case("operating-mode")]
    fn test_channel_id_valid(#[case] input: &str) {
        assert!(validate_channel_id(input).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("Lock-State")]
    #[case("lock state")]
    fn test_channel_id_invalid(#[case] input: &str) {
        assert!(validate_channel_id(input).is_err());
    }

    #[test]
    fn test_channel_uid_display_roundtrip() {
        let uid: ChannelUid = "node-12345-1#lock-state".parse().unwrap();
        assert_eq!(uid.group().as_str(), "node-12345-1");
        assert_eq!(uid.channel_id(), "lock-state");
        assert_eq!(uid.to_string(), "node-12345-1#lock-state");
    }

    #[test]
    fn test_channel_uid_missing_separator() {
        let result: Result<ChannelUid> = "lock-state".parse();
        assert!(result.is_err());
    }

    #[rstest]
    #[case(true, OnOff::On)]
    #[case(false, OnOff::Off)]
    fn test_on_off_from_bool(#[case] input: bool, #[case] expected: OnOff) {
        assert_eq!(OnOff::from_bool(input), expected);
        assert_eq!(OnOff::from_bool(input).is_on(), input);
    }

    #[test]
    fn test_channel_value_serde() {
        let value = ChannelValue::Switch(OnOff::On);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"switch":"on"}"#);

        let value = ChannelValue::Number(2);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"number":2}"#);
    }
}
