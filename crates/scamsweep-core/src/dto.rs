use crate::domain::ScamCategory;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What goes into the `locker_type` output column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockerStyle {
    #[default]
    Tag,
    Description,
}

impl LockerStyle {
    pub fn render(self, category: ScamCategory) -> &'static str {
        match self {
            LockerStyle::Tag => category.as_str(),
            LockerStyle::Description => category.description(),
        }
    }
}

impl FromStr for LockerStyle {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tag" => Ok(LockerStyle::Tag),
            "description" => Ok(LockerStyle::Description),
            other => Err(CoreError::UnknownLockerStyle(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRow {
    pub number: String,
    #[serde(rename = "type")]
    pub label: String,
    pub locker_type: String,
}

impl CleanRow {
    pub fn new(
        number: impl Into<String>,
        label: impl Into<String>,
        category: ScamCategory,
        style: LockerStyle,
    ) -> Self {
        Self {
            number: number.into(),
            label: label.into(),
            locker_type: style.render(category).to_string(),
        }
    }
}
