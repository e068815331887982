#![forbid(unsafe_code)]

use carousel_core::CarouselError;

/// Reasons the carousel could not be mounted on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// No `window`/`document` (not running in a browser main thread).
    NoDocument,
    /// A required element matched nothing; carries the selector.
    MissingElement(String),
    /// Options object could not be serialized or parsed.
    Options(String),
    Carousel(CarouselError),
}

impl core::fmt::Display for MountError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoDocument => f.write_str("no browser document available"),
            Self::MissingElement(selector) => write!(f, "no element matches `{selector}`"),
            Self::Options(msg) => write!(f, "invalid mount options: {msg}"),
            Self::Carousel(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for MountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Carousel(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CarouselError> for MountError {
    fn from(err: CarouselError) -> Self {
        Self::Carousel(err)
    }
}
