#![forbid(unsafe_code)]

/// Carousel construction and configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The slide set is empty; there is nothing to rotate.
    NoSlides,
    /// A configuration value is out of range.
    InvalidConfig(&'static str),
    /// Configuration JSON could not be parsed.
    Config(String),
}

impl core::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoSlides => f.write_str("carousel needs at least one slide"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Config(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl std::error::Error for CarouselError {}

impl From<serde_json::Error> for CarouselError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
