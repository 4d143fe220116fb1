//! Capability interfaces the [`Classifier`](crate::Classifier) merges.
//!
//! Each trait is one independent opinion about a user agent. Implementations
//! must be cheap to share between threads and must never mutate their
//! databases while classifying. Blank or unusable input is reported as
//! [`Error::MalformedInput`](crate::Error::MalformedInput) rather than a panic.

use crate::error::Result;
use crate::types::{DeviceClassification, GeneralClassification, MobileClassification};

/// Software family/version and OS family/version.
pub trait GeneralParser: Send + Sync {
    fn parse_general(&self, ua: &str) -> Result<GeneralClassification>;
}

/// Bot identity, or client type, rendering engine, brand/model and OS meta.
/// The authority on bot vs. human.
pub trait DeviceAndBotParser: Send + Sync {
    fn parse_device_and_bot(&self, ua: &str) -> Result<DeviceClassification>;
}

/// Mobile and tablet signatures. Has no notion of bots.
pub trait MobileTabletParser: Send + Sync {
    fn parse_mobile_tablet(&self, ua: &str) -> Result<MobileClassification>;
}
