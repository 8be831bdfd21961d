// Unit tests for Sentinela Intel

use sentinela_intel::core::classifier::{decide, score_text};
use sentinela_intel::core::extractor::{extract_area, extract_neighborhoods, extract_price};
use sentinela_intel::core::{normalize, score_pair, IntentClassifier};
use sentinela_intel::models::{
    AdIntent, Intent, MatchWeights, NormalizedAd, PropertyType, Range, RawMessage,
};
use std::collections::BTreeSet;

fn raw_message(text: &str) -> RawMessage {
    RawMessage {
        message_id: "m1".to_string(),
        group_id: "g1".to_string(),
        group_name: "Imoveis RJ".to_string(),
        author_id: "a1@c.us".to_string(),
        author_name: Some("Ana".to_string()),
        author_phone: Some("5521999".to_string()),
        message: text.to_string(),
        timestamp: 1_716_400_000,
    }
}

fn test_ad(intent: AdIntent) -> NormalizedAd {
    NormalizedAd {
        intent,
        property_type: Some(PropertyType::Apartamento),
        neighborhoods: BTreeSet::from(["RECREIO".to_string()]),
        price: Range::from_values(&[600_000, 700_000]),
        bedrooms: Range::from_values(&[3, 4]),
        area_m2: Range::from_values(&[80, 100]),
        raw_text: String::new(),
        author_name: "Ana".to_string(),
        author_phone: "5521999".to_string(),
    }
}

#[test]
fn test_normalize_is_idempotent() {
    let samples = [
        "Vendo apartamento com 3 quartos, 90m², no Recreio, R$ 650.000,00",
        "*Ótima* _oportunidade_   na Freguesia!!!",
        "çãéíóú ÀÂÊÔÜ",
        "",
    ];

    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "failed for {:?}", sample);
    }
}

#[test]
fn test_normalize_folds_and_collapses() {
    assert_eq!(
        normalize("  *Vendo*   CASA  em  Jacarepaguá "),
        "vendo casa em jacarepagua"
    );
}

#[test]
fn test_range_invariant_on_extracted_values() {
    for text in [
        "R$ 650.000,00 ou R$ 500.000,00",
        "entre 600 mil e 700 mil",
        "90m² ou 120m²",
    ] {
        let price = extract_price(text);
        let area = extract_area(text);

        for range in [price, area] {
            if let (Some(min), Some(max)) = (range.min, range.max) {
                assert!(min <= max, "range invariant broken for {:?}", text);
            }
        }
    }
}

#[test]
fn test_decision_rule_boundaries() {
    // buying 15 against selling 14: rule 2 fires
    assert_eq!(decide(14, 15, false), Intent::Buying);
    // dead tie below every threshold lead: nothing fires
    assert_eq!(decide(14, 14, false), Intent::Useless);
}

#[test]
fn test_classifier_determinism() {
    let classifier = IntentClassifier::new();
    let message = raw_message("Vendo apartamento com 3 quartos, 90m², no Recreio, R$ 650.000,00");

    let first = classifier.classify(&message);
    let second = classifier.classify(&message);

    assert_eq!(first.intent, second.intent);
    assert_eq!(first.score, second.score);
    assert_eq!(first.trace, second.trace);
}

#[test]
fn test_short_message_is_useless() {
    let classifier = IntentClassifier::new();
    assert_eq!(classifier.classify(&raw_message("vendo")).intent, Intent::Useless);
}

#[test]
fn test_score_trace_records_signals() {
    let (selling, _, trace) = score_text("vendo casa, oportunidade na taquara por r$ 480.000,00");

    assert!(selling > 0);
    assert!(!trace.is_empty());

    // Every traced weight contributes to a side score
    for hit in &trace {
        assert!(hit.weight > 0);
    }
}

#[test]
fn test_forbidden_context_price_exclusion() {
    let range = extract_price("Condomínio: R$ 800,00. Valor: R$ 450.000,00");
    assert_eq!(range, Range::single(450_000));
}

#[test]
fn test_neighborhood_set_keeps_multiple_matches() {
    let found = extract_neighborhoods(&normalize("Barra ou Recreio, aceito os dois"));

    assert_eq!(found.len(), 2);
    assert!(found.contains("BARRA"));
    assert!(found.contains("RECREIO"));
}

#[test]
fn test_bedroom_mismatch_produces_no_opportunity_score() {
    let mut buyer = test_ad(AdIntent::Buy);
    let mut seller = test_ad(AdIntent::Sell);
    buyer.bedrooms = Range::from_values(&[3, 4]);
    seller.bedrooms = Range::from_values(&[1, 2]);

    let (score, _) = score_pair(&buyer, &seller, &MatchWeights::default());

    assert_eq!(score, 10);
    assert!(score <= MatchWeights::default().min_score);
}

#[test]
fn test_perfect_pair_clears_the_floor() {
    let buyer = test_ad(AdIntent::Buy);
    let seller = test_ad(AdIntent::Sell);

    let (score, matched) = score_pair(&buyer, &seller, &MatchWeights::default());

    assert_eq!(score, 35);
    assert_eq!(matched.len(), 5);
}
