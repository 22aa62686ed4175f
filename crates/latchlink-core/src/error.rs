use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Identifier errors
    #[error("Invalid channel group id: {0}")]
    InvalidChannelGroup(String),

    #[error("Invalid channel id: {0}")]
    InvalidChannelId(String),

    #[error("Invalid channel uid: {0}")]
    InvalidChannelUid(String),

    // Cluster value errors
    #[error("Unknown {attribute} code: {code}")]
    UnknownCode { attribute: &'static str, code: i64 },

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
}

pub type Result<T> = std::result::Result<T, Error>;
