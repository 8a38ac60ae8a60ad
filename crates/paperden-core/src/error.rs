use thiserror::Error;

/// The failures this renderer can actually hit. Markdown itself cannot
/// fail to parse; callers recover from each of these by rendering the
/// matching fallback fragment.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid update feed: {0}")]
    Feed(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),
}
