use super::{BotInfo, MobileClassification, OsMeta};
use crate::version::VersionInfo;
use serde::Serialize;

/// The merged classification handed back to callers.
///
/// Every string leaf is either a value or `None`, never `""`. Field names
/// are the serialized names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnifiedResult {
    pub client_summary: Option<String>,
    pub ua_family: Option<String>,
    pub ua_version: VersionInfo,
    pub os_family: Option<String>,
    pub os_version: VersionInfo,
    /// Client type, or the bot category when the client type is unknown.
    pub ua_type: Option<String>,
    pub bot_info: BotInfo,
    pub os_meta: OsMeta,
    pub ua_rendering_engine: Option<String>,
    pub ua_rendering_engine_version: VersionInfo,
    pub device: DeviceInfo,
    pub client: ClientFlags,
}

/// Device flags and hardware.
///
/// The flags come from one [`MobileClassification`] so desktop is always
/// exactly "neither mobile nor tablet".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    is_mobile: bool,
    is_tablet: bool,
    is_desktop: bool,
    pub brand: Option<String>,
    pub model: Option<String>,
}

impl DeviceInfo {
    pub fn from_mobile(mobile: MobileClassification) -> Self {
        Self {
            is_mobile: mobile.is_mobile,
            is_tablet: mobile.is_tablet,
            is_desktop: mobile.is_desktop(),
            brand: None,
            model: None,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.is_tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.is_desktop
    }
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self::from_mobile(MobileClassification::default())
    }
}

/// Bot or human. Exactly one of the two flags is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClientFlags {
    bot: bool,
    user: bool,
}

impl ClientFlags {
    pub fn from_is_bot(is_bot: bool) -> Self {
        Self {
            bot: is_bot,
            user: !is_bot,
        }
    }

    pub fn bot(&self) -> bool {
        self.bot
    }

    pub fn user(&self) -> bool {
        self.user
    }
}

impl Default for ClientFlags {
    fn default() -> Self {
        Self::from_is_bot(false)
    }
}
