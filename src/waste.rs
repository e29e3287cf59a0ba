//! Waste categories and bin assignment.
//!
//! The classifier returns a free-form category label; the dashboard maps it
//! onto one of a fixed set of dustbins.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// One classifier result for a submitted image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub category: String,
    pub confidence: f64,
    /// Which backend produced the result, e.g. "demo" or "tensorflow".
    pub mode: String,
}

/// The dustbins an item can be sorted into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    Cardboard,
    Paper,
    Glass,
    Metal,
    Plastic,
    Organic,
    Miscellaneous,
}

impl WasteCategory {
    /// Parse a classifier label. Unknown labels yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        key.trim().parse().ok()
    }

    pub fn key(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cardboard => "Cardboard",
            Self::Paper => "Paper",
            Self::Glass => "Glass",
            Self::Metal => "Metal",
            Self::Plastic => "Plastic",
            Self::Organic => "Organic",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Cardboard => "Boxes, cartons, kraft packaging",
            Self::Paper => "Newspaper, sheets, receipts",
            Self::Glass => "Bottles, jars, glass containers",
            Self::Metal => "Aluminum cans, tins, foil",
            Self::Plastic => "Bottles, packaging, wrappers",
            Self::Organic => "Food waste, compostables",
            Self::Miscellaneous => "Non-recyclables, mixed waste",
        }
    }

    /// All bins in dashboard display order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Pick the bin for a prediction, if its label names one.
pub fn assign_bin(prediction: &Prediction) -> Option<WasteCategory> {
    WasteCategory::from_key(&prediction.category)
}
