#![forbid(unsafe_code)]

//! Slideout width tokens.

use std::fmt;
use std::str::FromStr;

/// Width of a slideout, as a design-system size token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeToken {
    #[cfg_attr(feature = "serde", serde(rename = "sm"))]
    Sm,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "md"))]
    Md,
    #[cfg_attr(feature = "serde", serde(rename = "lg"))]
    Lg,
    #[cfg_attr(feature = "serde", serde(rename = "xl"))]
    Xl,
    #[cfg_attr(feature = "serde", serde(rename = "2xl"))]
    Xxl,
    #[cfg_attr(feature = "serde", serde(rename = "full"))]
    Full,
}

impl SizeToken {
    /// Width used when neither the caller nor the registry names one.
    pub const DEFAULT: SizeToken = SizeToken::Md;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSizeTokenError(pub String);

impl fmt::Display for ParseSizeTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown size token: {}", self.0)
    }
}

impl std::error::Error for ParseSizeTokenError {}

impl FromStr for SizeToken {
    type Err = ParseSizeTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            "2xl" => Ok(Self::Xxl),
            "full" => Ok(Self::Full),
            other => Err(ParseSizeTokenError(other.to_owned())),
        }
    }
}
