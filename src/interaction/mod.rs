//! Interaction lookup: name resolution, direct matching against both
//! reference sources, and fallback suggestions when nothing matches.

pub mod markup;
pub mod matcher;
pub mod resolve;
pub mod suggest;

use serde::Serialize;

/// Which reference source produced a resolved interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionSource {
    Catalog,
    Pair,
}

/// A direct interaction between the two queried substances, ready for
/// display. Serialized field names follow the shell contract.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedInteraction {
    pub source: InteractionSource,
    #[serde(rename = "drug1")]
    pub substance_a: String,
    #[serde(rename = "drug2")]
    pub substance_b: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_description: Option<String>,
}

/// A weaker, single-substance result: one queried substance paired with
/// some other partner. Shown only when no direct interaction exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedInteraction {
    #[serde(rename = "drug1")]
    pub substance_a: String,
    #[serde(rename = "drug2")]
    pub substance_b: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_description: Option<String>,
}
