// Integration tests for Sentinela Intel

use sentinela_intel::core::Pipeline;
use sentinela_intel::models::{AdIntent, MatchWeights, PropertyType, Range, RawMessage};
use sentinela_intel::services::RuleAnalyzer;
use std::sync::Arc;

fn build_pipeline() -> Pipeline {
    Pipeline::new(Arc::new(RuleAnalyzer::new()), MatchWeights::default())
}

fn capture(id: &str, author: &str, phone: &str, text: &str) -> RawMessage {
    RawMessage {
        message_id: id.to_string(),
        group_id: "g1".to_string(),
        group_name: "Imoveis RJ".to_string(),
        author_id: format!("{}@c.us", author),
        author_name: Some(author.to_string()),
        author_phone: Some(phone.to_string()),
        message: text.to_string(),
        timestamp: 1_716_400_000,
    }
}

#[test]
fn test_end_to_end_listing_normalization() {
    let pipeline = build_pipeline();

    let outcome = pipeline.run(&[capture(
        "1",
        "Ana",
        "5521999",
        "Vendo apartamento com 3 quartos, 90m², no Recreio, R$ 650.000,00",
    )]);

    assert_eq!(outcome.sellers.len(), 1);

    let ad = &outcome.sellers[0];
    assert_eq!(ad.intent, AdIntent::Sell);
    assert_eq!(ad.property_type, Some(PropertyType::Apartamento));
    assert_eq!(ad.bedrooms, Range::from_values(&[3, 3]));
    assert_eq!(ad.area_m2, Range::from_values(&[90, 90]));
    assert_eq!(ad.price, Range::from_values(&[650_000, 650_000]));
    assert!(ad.neighborhoods.contains("RECREIO"));
}

#[test]
fn test_end_to_end_matching() {
    let pipeline = build_pipeline();

    let outcome = pipeline.run(&[
        capture(
            "1",
            "Ana",
            "5521999",
            "Vendo apartamento com 3 quartos, 90m², no Recreio, R$ 650.000,00",
        ),
        capture(
            "2",
            "Bia",
            "5521888",
            "Procuro apartamento de 3 quartos no Recreio, entre 600 mil e 700 mil",
        ),
        capture("3", "Carlos", "5521777", "Bom dia!!!!"),
        capture("4", "Davi", "5521666", "https://example.com/foto.jpg"),
    ]);

    assert_eq!(outcome.processed, 4);
    assert_eq!(outcome.sellers.len(), 1);
    assert_eq!(outcome.buyers.len(), 1);
    assert_eq!(outcome.useless, 2);
    assert_eq!(outcome.pairs_compared, 1);
    assert_eq!(outcome.opportunities.len(), 1);

    let opportunity = &outcome.opportunities[0];
    assert_eq!(opportunity.score, 30);
    assert_eq!(opportunity.buyer.author_name, "Bia");
    assert_eq!(opportunity.seller.author_name, "Ana");
}

#[test]
fn test_bedroom_mismatch_disqualifies_pair() {
    let pipeline = build_pipeline();

    let outcome = pipeline.run(&[
        capture(
            "1",
            "Ana",
            "5521999",
            "Vendo apartamento com 2 quartos, 90m², no Recreio, R$ 650.000,00",
        ),
        capture(
            "2",
            "Bia",
            "5521888",
            "Procuro apartamento de 4 quartos no Recreio, entre 600 mil e 700 mil",
        ),
    ]);

    assert_eq!(outcome.pairs_compared, 1);
    assert!(outcome.opportunities.is_empty());
}

#[test]
fn test_missing_contact_fields_use_sentinel() {
    let pipeline = build_pipeline();

    let mut message = capture(
        "1",
        "Ana",
        "5521999",
        "Vendo casa na Freguesia, R$ 820.000,00",
    );
    message.author_name = None;
    message.author_phone = None;

    let outcome = pipeline.run(&[message]);

    assert_eq!(outcome.sellers.len(), 1);
    assert_eq!(outcome.sellers[0].author_name, "Desconhecido");
    assert_eq!(outcome.sellers[0].author_phone, "Desconhecido");
}

#[test]
fn test_fees_never_leak_into_price() {
    let pipeline = build_pipeline();

    let outcome = pipeline.run(&[capture(
        "1",
        "Ana",
        "5521999",
        "Vendo apartamento no Pechincha\nValor: R$ 450.000,00\nCondomínio: R$ 800,00\nIPTU: R$ 120,00",
    )]);

    assert_eq!(outcome.sellers.len(), 1);
    assert_eq!(outcome.sellers[0].price, Range::from_values(&[450_000, 450_000]));
}

#[test]
fn test_rerun_is_deterministic() {
    let pipeline = build_pipeline();
    let batch = vec![
        capture(
            "1",
            "Ana",
            "5521999",
            "Vendo apartamento com 3 quartos, 90m², no Recreio, R$ 650.000,00",
        ),
        capture(
            "2",
            "Bia",
            "5521888",
            "Procuro apartamento de 3 quartos no Recreio, entre 600 mil e 700 mil",
        ),
    ];

    let first = pipeline.run(&batch);
    let second = pipeline.run(&batch);

    assert_eq!(first.opportunities.len(), second.opportunities.len());
    assert_eq!(first.opportunities[0].score, second.opportunities[0].score);
}
