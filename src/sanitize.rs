use crate::types::{BotInfo, BotVendor, DeviceInfo, OsMeta, UnifiedResult};
use crate::version::VersionInfo;

/// Rewrites every empty string leaf to `None`, recursively.
pub trait Sanitize {
    fn sanitize_blanks(&mut self);
}

impl Sanitize for Option<String> {
    fn sanitize_blanks(&mut self) {
        if self.as_deref() == Some("") {
            *self = None;
        }
    }
}

impl Sanitize for VersionInfo {
    fn sanitize_blanks(&mut self) {
        self.summary.sanitize_blanks();
    }
}

impl Sanitize for BotVendor {
    fn sanitize_blanks(&mut self) {
        self.name.sanitize_blanks();
        self.url.sanitize_blanks();
    }
}

impl Sanitize for BotInfo {
    fn sanitize_blanks(&mut self) {
        self.name.sanitize_blanks();
        self.category.sanitize_blanks();
        self.url.sanitize_blanks();
        self.vendor.sanitize_blanks();
    }
}

impl Sanitize for OsMeta {
    fn sanitize_blanks(&mut self) {
        self.name.sanitize_blanks();
        self.short_name.sanitize_blanks();
        self.version.sanitize_blanks();
        self.platform.sanitize_blanks();
    }
}

impl Sanitize for DeviceInfo {
    fn sanitize_blanks(&mut self) {
        self.brand.sanitize_blanks();
        self.model.sanitize_blanks();
    }
}

impl Sanitize for UnifiedResult {
    fn sanitize_blanks(&mut self) {
        self.client_summary.sanitize_blanks();
        self.ua_family.sanitize_blanks();
        self.ua_version.sanitize_blanks();
        self.os_family.sanitize_blanks();
        self.os_version.sanitize_blanks();
        self.ua_type.sanitize_blanks();
        self.bot_info.sanitize_blanks();
        self.os_meta.sanitize_blanks();
        self.ua_rendering_engine.sanitize_blanks();
        self.ua_rendering_engine_version.sanitize_blanks();
        self.device.sanitize_blanks();
    }
}

/// Fill derived fields. Must run after [`Sanitize::sanitize_blanks`] so it
/// sees `None`, not `""`.
pub fn fill_fallbacks(result: &mut UnifiedResult) {
    if result.ua_type.is_none() {
        result.ua_type = result.bot_info.category.clone();
    }
}

/// Both passes, in order.
pub fn sanitize(result: &mut UnifiedResult) {
    result.sanitize_blanks();
    fill_fallbacks(result);
}
