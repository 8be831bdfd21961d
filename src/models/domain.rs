use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Sentinel reported when the collector could not resolve a contact field.
pub const UNKNOWN_CONTACT: &str = "Desconhecido";

/// One captured group message, as emitted by the WhatsApp collector
/// (one JSON object per line in `messages.jsonl`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub message_id: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_phone: Option<String>,
    pub message: String,
    /// Unix seconds at capture time; 0 when the feed did not carry one.
    #[serde(default)]
    pub timestamp: i64,
}

impl RawMessage {
    /// Author display name, falling back to the collector sentinel.
    pub fn author_name(&self) -> &str {
        self.author_name.as_deref().unwrap_or(UNKNOWN_CONTACT)
    }

    /// Author phone, falling back to the collector sentinel.
    pub fn author_phone(&self) -> &str {
        self.author_phone.as_deref().unwrap_or(UNKNOWN_CONTACT)
    }
}

/// Triage outcome for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Selling,
    Buying,
    Useless,
}

impl Intent {
    /// The ad side this intent contributes to, if any.
    pub fn as_ad_intent(&self) -> Option<AdIntent> {
        match self {
            Intent::Selling => Some(AdIntent::Sell),
            Intent::Buying => Some(AdIntent::Buy),
            Intent::Useless => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Intent::Selling => "selling",
            Intent::Buying => "buying",
            Intent::Useless => "useless",
        };
        write!(f, "{}", label)
    }
}

/// Side of the market a normalized ad belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdIntent {
    Sell,
    Buy,
}

/// One keyword or regex signal that contributed to a classification score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalHit {
    pub signal: String,
    pub weight: i32,
}

impl SignalHit {
    pub fn new(signal: impl Into<String>, weight: i32) -> Self {
        Self {
            signal: signal.into(),
            weight,
        }
    }
}

/// A raw message plus its triage verdict and the signals behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedMessage {
    pub message: RawMessage,
    pub intent: Intent,
    /// Score of the winning side (highest side score for Useless).
    pub score: i32,
    /// Ordered trace of every matched signal, for auditing verdicts.
    pub trace: Vec<SignalHit>,
}

/// Inclusive numeric range extracted from free text.
///
/// Both bounds absent means the attribute is unknown, which is distinct
/// from a zero-width range such as {3, 3}.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Range {
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Range spanning the given values; unknown when the slice is empty.
    pub fn from_values(values: &[i64]) -> Self {
        match (values.iter().min(), values.iter().max()) {
            (Some(&min), Some(&max)) => Self {
                min: Some(min),
                max: Some(max),
            },
            _ => Self::unknown(),
        }
    }

    pub fn single(value: i64) -> Self {
        Self {
            min: Some(value),
            max: Some(value),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether two fully bounded ranges intersect.
    ///
    /// A range missing either bound never overlaps anything: unknown data
    /// earns no partial credit during matching.
    pub fn overlaps(&self, other: &Range) -> bool {
        match (self.min, self.max, other.min, other.max) {
            (Some(a_min), Some(a_max), Some(b_min), Some(b_max)) => {
                !(a_max < b_min || b_max < a_min)
            }
            _ => false,
        }
    }
}

/// Canonical property categories recognized by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyType {
    Apartamento,
    Casa,
    Terreno,
    Cobertura,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PropertyType::Apartamento => "APARTAMENTO",
            PropertyType::Casa => "CASA",
            PropertyType::Terreno => "TERRENO",
            PropertyType::Cobertura => "COBERTURA",
        };
        write!(f, "{}", label)
    }
}

/// Structured attributes distilled from one Selling/Buying message.
///
/// Built once by the extractor and never mutated; the matcher shares ads
/// across opportunities through `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedAd {
    pub intent: AdIntent,
    pub property_type: Option<PropertyType>,
    /// Uppercase canonical neighborhood names; a message may name several.
    pub neighborhoods: BTreeSet<String>,
    pub price: Range,
    pub bedrooms: Range,
    pub area_m2: Range,
    pub raw_text: String,
    pub author_name: String,
    pub author_phone: String,
}

/// A buyer/seller pairing whose attribute overlap cleared the score floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub buyer: Arc<NormalizedAd>,
    pub seller: Arc<NormalizedAd>,
    pub score: i32,
    /// Names of the criteria that contributed positively to the score.
    pub matched_criteria: Vec<String>,
}

/// Weights for the opportunity score, one per compared attribute.
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub neighborhood: i32,
    pub price: i32,
    pub property_type: i32,
    pub bedrooms: i32,
    pub area_m2: i32,
    /// Subtracted when both bedroom ranges are known but disjoint.
    pub bedroom_mismatch_penalty: i32,
    /// A pair qualifies only with a total strictly above this floor.
    pub min_score: i32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            neighborhood: 10,
            price: 10,
            property_type: 5,
            bedrooms: 5,
            area_m2: 5,
            bedroom_mismatch_penalty: 20,
            min_score: 20,
        }
    }
}
