#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientType {
    Browser,
    FeedReader,
    MobileApp,
    Pim,
    Library,
    MediaPlayer,
}

impl ClientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::FeedReader => "feed reader",
            Self::MobileApp => "mobile app",
            Self::Pim => "pim",
            Self::Library => "library",
            Self::MediaPlayer => "mediaplayer",
        }
    }

    /// Database file under `client/` holding this client type.
    pub(crate) fn file_name(&self) -> &'static str {
        match self {
            Self::Browser => "browsers.yml",
            Self::FeedReader => "feed_readers.yml",
            Self::MobileApp => "mobile_apps.yml",
            Self::Pim => "pim.yml",
            Self::Library => "libraries.yml",
            Self::MediaPlayer => "mediaplayers.yml",
        }
    }
}
