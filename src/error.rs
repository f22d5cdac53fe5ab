//! Guide Errors

/// Common result type for guide loading
pub type GuideResult<T> = Result<T, GuideError>;

/// Errors raised while loading guide content or its maps
#[derive(Debug, Clone, PartialEq)]
pub enum GuideError {
    /// The guide JSON could not be parsed
    Parse(String),
    /// The guide parsed but lists no cities
    Empty,
    /// A city map could not be created
    Map(String),
}

impl std::fmt::Display for GuideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuideError::Parse(msg) => write!(f, "Invalid guide data: {}", msg),
            GuideError::Empty => write!(f, "Guide data contains no cities"),
            GuideError::Map(msg) => write!(f, "Map unavailable: {}", msg),
        }
    }
}

impl std::error::Error for GuideError {}

impl From<serde_json::Error> for GuideError {
    fn from(err: serde_json::Error) -> Self {
        GuideError::Parse(err.to_string())
    }
}
