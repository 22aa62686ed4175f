//! Channel layer of the door-lock bridge.
//!
//! This crate defines the channel descriptors, the host boundary trait
//! ([`DeviceLink`]), the generic bridge seam ([`ChannelAdapter`]), and the
//! door-lock bridge itself ([`LockChannelAdapter`]). A mock device link
//! for tests lives in [`mock`].

pub mod adapter;
pub mod channel;
pub mod link;
pub mod lock;
pub mod mock;

pub use adapter::ChannelAdapter;
pub use channel::{Channel, ChannelBuilder, ItemKind};
pub use link::DeviceLink;
pub use lock::LockChannelAdapter;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
