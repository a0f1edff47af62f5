use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Which rollup is displayed (and exported).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Product,
    #[default]
    Creator,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownViewMode(pub String);

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Product, ViewMode::Creator, ViewMode::Video];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            ViewMode::Product => "product",
            ViewMode::Creator => "creator",
            ViewMode::Video => "video",
        }
    }

    /// Section title for human output.
    #[inline]
    pub const fn title(self) -> &'static str {
        match self {
            ViewMode::Product => "PRODUCT VIEW",
            ViewMode::Creator => "CREATOR VIEW",
            ViewMode::Video => "VIDEO VIEW",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown view \"{}\" (expected product, creator, or video)",
            self.0
        )
    }
}

impl std::error::Error for UnknownViewMode {}

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "product" | "products" => Ok(ViewMode::Product),
            "creator" | "creators" => Ok(ViewMode::Creator),
            "video" | "videos" => Ok(ViewMode::Video),
            _ => Err(UnknownViewMode(s.to_string())),
        }
    }
}
