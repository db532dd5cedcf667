//! Build Mode
//!
//! Development builds log every request/response for diagnostics,
//! production builds stay quiet.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

/// Error when parsing a build mode name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown build mode: {0} (expected \"development\" or \"production\")")]
pub struct UnknownBuildMode(pub String);

impl BuildMode {
    /// Mode of the current compilation (`debug_assertions` means development)
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    #[inline]
    pub const fn is_development(&self) -> bool {
        matches!(self, BuildMode::Development)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::current()
    }
}

impl FromStr for BuildMode {
    type Err = UnknownBuildMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => Err(UnknownBuildMode(other.to_string())),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
