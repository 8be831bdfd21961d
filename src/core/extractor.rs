use regex::Regex;
use std::collections::BTreeSet;
use std::sync::{Arc, LazyLock};
use tracing::warn;

use crate::core::normalizer::normalize;
use crate::models::{AdIntent, NormalizedAd, PropertyType, Range, RawMessage};
use crate::services::analyzer::{LinguisticAnalyzer, Token};

/// Surface/lemma forms accepted for each canonical property type.
const PROPERTY_TYPE_FORMS: &[(PropertyType, &[&str])] = &[
    (PropertyType::Apartamento, &["apartamento", "apto", "ap", "apt"]),
    (PropertyType::Casa, &["casa", "residencia"]),
    (PropertyType::Terreno, &["terreno", "lote"]),
    (PropertyType::Cobertura, &["cobertura", "cob"]),
];

/// Amounts attached to these words are fees, never the sale price.
/// Price extraction runs on raw (unfolded) text, so accented spellings are
/// listed alongside their plain forms.
const FORBIDDEN_PRICE_CONTEXT: &[&str] = &[
    "condominio",
    "condomínio",
    "iptu",
    "taxa",
    "foro",
    "laudemio",
    "laudêmio",
];

/// Recognized neighborhoods, stored accent-folded to match normalized text.
const NEIGHBORHOODS: &[&str] = &[
    "recreio",
    "barra",
    "jacarepagua",
    "vargem grande",
    "vargem pequena",
    "freguesia",
    "ipanema",
    "copacabana",
    "centro da cidade",
    "curicica",
    "taquara",
    "anil",
    "pechincha",
    "itanhanga",
];

/// Token distance inspected around a numeric token when looking for a
/// "quarto" lemma.
const BEDROOM_WINDOW_BEFORE: usize = 2;
const BEDROOM_WINDOW_AFTER: usize = 3;

/// Formal listing price: "R$ 650.000,00" with dot thousands and comma cents.
static FORMAL_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"r\$\s*([\d\.]+,\d{2})").expect("invalid price pattern"));

/// Informal amounts: "650k", "900 mil", "1,2 mi", "2 milhoes". Longest
/// suffix first so "milhoes" is never consumed as "mil".
static INFORMAL_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:[\.,]\d+)?)\s*(milhoes|milhao|mil|mi|k)\b")
        .expect("invalid informal price pattern")
});

/// Floor area: 2-4 digits before m²/m2/metros (quadrados)/bare m. The bare
/// forms take a word boundary so "90 mil" is never read as 90 meters.
static AREA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2,4})\s*(?:m²|m2\b|metros(?:\s+quadrados)?\b|m\b)")
        .expect("invalid area pattern")
});

/// Extracts structured attributes from classified Selling/Buying messages.
///
/// The five sub-extractions are independent: each works from the raw or
/// normalized text on its own and a failure in one never aborts the others.
pub struct AttributeExtractor {
    analyzer: Arc<dyn LinguisticAnalyzer>,
}

impl AttributeExtractor {
    pub fn new(analyzer: Arc<dyn LinguisticAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Build the normalized ad for one message of the given market side.
    ///
    /// An analyzer failure leaves property type and bedrooms unknown for
    /// this message; the regex-driven attributes still extract.
    pub fn extract(&self, intent: AdIntent, message: &RawMessage) -> NormalizedAd {
        let raw_text = message.message.clone();
        let text = normalize(&raw_text);

        let tokens = match self.analyzer.analyze(&text) {
            Ok(tokens) => Some(tokens),
            Err(error) => {
                warn!(
                    message_id = %message.message_id,
                    %error,
                    "linguistic analysis failed, lemma-based attributes unknown"
                );
                None
            }
        };

        let property_type = tokens.as_deref().and_then(extract_property_type);
        let bedrooms = tokens
            .as_deref()
            .map(extract_bedrooms)
            .unwrap_or_else(Range::unknown);

        NormalizedAd {
            intent,
            property_type,
            neighborhoods: extract_neighborhoods(&text),
            price: extract_price(&raw_text),
            bedrooms,
            area_m2: extract_area(&raw_text),
            author_name: message.author_name().to_string(),
            author_phone: message.author_phone().to_string(),
            raw_text,
        }
    }
}

/// First token whose lemma names a canonical property type, scanning left
/// to right.
pub fn extract_property_type(tokens: &[Token]) -> Option<PropertyType> {
    for token in tokens {
        for (property_type, forms) in PROPERTY_TYPE_FORMS {
            if forms.contains(&token.lemma.as_str()) {
                return Some(*property_type);
            }
        }
    }

    None
}

/// Sale price range from formal currency amounts, with informal magnitude
/// parsing as fallback when no formal amount exists anywhere in the text.
///
/// Formal matching is scoped per segment (a line, further split on sentence
/// breaks) so that a fee quoted next to the asking price never leaks in:
/// segments mentioning a forbidden context word are dropped wholesale.
pub fn extract_price(raw_text: &str) -> Range {
    let text = raw_text.to_lowercase();
    let mut prices: Vec<i64> = Vec::new();

    for line in text.lines() {
        for segment in line.split(". ") {
            if FORBIDDEN_PRICE_CONTEXT
                .iter()
                .any(|word| segment.contains(word))
            {
                continue;
            }

            for capture in FORMAL_PRICE.captures_iter(segment) {
                let value = capture[1].replace('.', "").replace(',', ".");
                match value.parse::<f64>() {
                    Ok(amount) => prices.push(amount.trunc() as i64),
                    Err(_) => continue,
                }
            }
        }
    }

    if prices.is_empty() {
        prices = parse_informal_amounts(&text);
    }

    Range::from_values(&prices)
}

/// Bare numbers qualified with k/mil/mi/milhao/milhoes, over the whole text.
fn parse_informal_amounts(text: &str) -> Vec<i64> {
    let mut amounts = Vec::new();

    for capture in INFORMAL_PRICE.captures_iter(text) {
        let number = capture[1].replace(',', ".");
        let multiplier: i64 = match &capture[2] {
            "k" | "mil" => 1_000,
            _ => 1_000_000,
        };

        match number.parse::<f64>() {
            Ok(value) => amounts.push((value * multiplier as f64).round() as i64),
            Err(_) => continue,
        }
    }

    amounts
}

/// Bedroom counts: numeric tokens with a "quarto" lemma inside the sliding
/// window around them.
pub fn extract_bedrooms(tokens: &[Token]) -> Range {
    let mut counts: Vec<i64> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        if !token.is_number {
            continue;
        }

        let start = index.saturating_sub(BEDROOM_WINDOW_BEFORE);
        let end = (index + BEDROOM_WINDOW_AFTER + 1).min(tokens.len());

        if tokens[start..end].iter().any(|near| near.lemma == "quarto") {
            match token.text.parse::<i64>() {
                Ok(count) => counts.push(count),
                Err(_) => continue,
            }
        }
    }

    Range::from_values(&counts)
}

/// Every gazetteer neighborhood mentioned in the normalized text, reported
/// in uppercase canonical form. Multiple mentions are all retained.
pub fn extract_neighborhoods(text: &str) -> BTreeSet<String> {
    NEIGHBORHOODS
        .iter()
        .filter(|name| text.contains(*name))
        .map(|name| name.to_uppercase())
        .collect()
}

/// Floor area range in square meters.
pub fn extract_area(raw_text: &str) -> Range {
    let text = raw_text.to_lowercase();
    let mut areas: Vec<i64> = Vec::new();

    for capture in AREA.captures_iter(&text) {
        match capture[1].parse::<i64>() {
            Ok(value) => areas.push(value),
            Err(_) => continue,
        }
    }

    Range::from_values(&areas)
}
