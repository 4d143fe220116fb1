#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("invalid pattern {pattern:?}: {reason}")]
    Pattern { pattern: String, reason: String },
    /// A classifier's signature database could not be loaded.
    #[error("{adapter} is unavailable: {source}")]
    AdapterUnavailable {
        adapter: &'static str,
        #[source]
        source: Box<Error>,
    },
    /// The user agent is blank or otherwise unusable for this classifier.
    #[error("{adapter} could not classify the user agent")]
    MalformedInput { adapter: &'static str },
    /// A classifier reported a bot identity and a human client at once.
    #[error("{adapter} reported both a bot and a human client")]
    InternalInconsistency { adapter: &'static str },
}

impl Error {
    pub(crate) fn unavailable(adapter: &'static str, source: Error) -> Self {
        Self::AdapterUnavailable {
            adapter,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
