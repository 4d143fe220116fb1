use std::borrow::Cow;

/// Raw result of [`DeviceDetector::parse`](crate::DeviceDetector::parse).
///
/// Borrows from the detector's databases and from the parsed user agent.
/// When `bot` is set every other field is `None`.
#[derive(Debug, Clone, Default)]
pub struct Detection<'a> {
    pub bot: Option<Bot<'a>>,
    pub os: Option<Os<'a>>,
    pub client: Option<Client<'a>>,
    pub device: Option<Device<'a>>,
}

impl<'a> Detection<'a> {
    pub fn is_bot(&self) -> bool {
        self.bot.is_some()
    }
    pub fn bot(&self) -> Option<&Bot<'a>> {
        self.bot.as_ref()
    }
    pub fn os(&self) -> Option<&Os<'a>> {
        self.os.as_ref()
    }
    pub fn client(&self) -> Option<&Client<'a>> {
        self.client.as_ref()
    }
    pub fn device(&self) -> Option<&Device<'a>> {
        self.device.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct Bot<'a> {
    pub name: Cow<'a, str>,
    pub category: Option<&'a str>,
    pub url: Option<&'a str>,
    pub producer: Option<BotProducer<'a>>,
}

#[derive(Debug, Clone)]
pub struct BotProducer<'a> {
    pub name: Option<&'a str>,
    pub url: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct Os<'a> {
    pub name: Cow<'a, str>,
    pub version: Cow<'a, str>,
    /// Matomo short code, `"UNK"` for names outside the table.
    pub short_name: &'static str,
    /// CPU architecture hinted by the user agent (`"x64"`, `"ARM"`, ...).
    pub platform: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Client<'a> {
    pub kind: super::ClientType,
    pub name: Cow<'a, str>,
    pub version: Cow<'a, str>,
    pub engine: Cow<'a, str>,
    pub engine_version: Cow<'a, str>,
}

#[derive(Debug, Clone)]
pub struct Device<'a> {
    pub brand: Cow<'a, str>,
    pub model: Cow<'a, str>,
}
