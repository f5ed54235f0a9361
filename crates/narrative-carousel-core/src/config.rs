//! Host-wide configuration consumed by components.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reading direction of the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextDirection {
    /// Left-to-right.
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    /// Right-to-left.
    #[serde(rename = "rtl")]
    RightToLeft,
}

/// Global flags the host applies to every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Skip slide animations and resolve transitions immediately.
    #[serde(rename = "_disableAnimation", default)]
    pub disable_animation: bool,
    /// Default text direction of the document.
    #[serde(rename = "_defaultDirection", default)]
    pub default_direction: TextDirection,
}

/// Viewport size category as classified by the host's breakpoint policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ViewportCategory {
    /// Small screens.
    #[default]
    Small,
    /// Medium screens.
    Medium,
    /// Large screens.
    Large,
}

impl From<&str> for ViewportCategory {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "large" => Self::Large,
            "medium" => Self::Medium,
            _ => Self::Small,
        }
    }
}

impl From<String> for ViewportCategory {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl FromStr for ViewportCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
