use crate::error::{Error, Result};
use crate::version::VersionInfo;
use serde::Serialize;

/// A user agent or OS as seen by the general parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub family: Option<String>,
    pub version: VersionInfo,
}

impl ClientInfo {
    pub fn summary(&self) -> Option<&str> {
        self.version.summary.as_deref()
    }
}

/// Output of a [`GeneralParser`](crate::GeneralParser).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralClassification {
    pub user_agent: ClientInfo,
    pub os: ClientInfo,
    /// `"<user agent summary>/<os summary>"`.
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BotInfo {
    pub name: Option<String>,
    pub category: Option<String>,
    /// Page describing what the crawler does.
    pub url: Option<String>,
    pub vendor: BotVendor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BotVendor {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderingEngine {
    pub name: Option<String>,
    pub version: VersionInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OsMeta {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub version: Option<String>,
    pub platform: Option<String>,
}

impl OsMeta {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.short_name.is_none()
            && self.version.is_none()
            && self.platform.is_none()
    }
}

/// Output of a [`DeviceAndBotParser`](crate::DeviceAndBotParser).
///
/// A bot carries only `bot_info`; every human-client field stays at its
/// default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceClassification {
    pub is_bot: bool,
    pub bot_info: Option<BotInfo>,
    pub rendering_engine: RenderingEngine,
    pub client_type: Option<String>,
    pub client_name: Option<String>,
    pub client_brand: Option<String>,
    pub client_model: Option<String>,
    pub os: OsMeta,
}

impl DeviceClassification {
    fn has_human_fields(&self) -> bool {
        self.rendering_engine != RenderingEngine::default()
            || self.client_type.is_some()
            || self.client_name.is_some()
            || self.client_brand.is_some()
            || self.client_model.is_some()
            || !self.os.is_empty()
    }

    /// Errors when a bot identity and a human client are reported together.
    pub fn check_consistency(&self, adapter: &'static str) -> Result<()> {
        let bot = self.is_bot || self.bot_info.is_some();
        if bot && (!self.is_bot || self.has_human_fields()) {
            return Err(Error::InternalInconsistency { adapter });
        }
        Ok(())
    }

    /// Resolve an inconsistent result in favour of the bot identity.
    pub fn prefer_bot(&mut self) {
        *self = Self {
            is_bot: true,
            bot_info: self.bot_info.take(),
            ..Self::default()
        };
    }
}

/// Output of a [`MobileTabletParser`](crate::MobileTabletParser).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileClassification {
    pub is_mobile: bool,
    pub is_tablet: bool,
}

impl MobileClassification {
    /// Desktop is never detected, only inferred.
    pub fn is_desktop(&self) -> bool {
        !self.is_mobile && !self.is_tablet
    }
}
