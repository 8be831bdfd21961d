// Criterion benchmarks for Sentinela Intel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sentinela_intel::core::{normalize, IntentClassifier, OpportunityMatcher, Pipeline};
use sentinela_intel::models::{AdIntent, MatchWeights, NormalizedAd, PropertyType, Range, RawMessage};
use sentinela_intel::services::RuleAnalyzer;
use std::collections::BTreeSet;
use std::sync::Arc;

const LISTING: &str = "Vendo apartamento com 3 quartos, 90m², no Recreio, R$ 650.000,00";
const REQUEST: &str = "Procuro apartamento de 3 quartos no Recreio, entre 600 mil e 700 mil";

fn capture(id: usize, text: &str) -> RawMessage {
    RawMessage {
        message_id: id.to_string(),
        group_id: "g1".to_string(),
        group_name: "Imoveis RJ".to_string(),
        author_id: format!("{}@c.us", id),
        author_name: Some(format!("Corretor {}", id)),
        author_phone: Some("5521999".to_string()),
        message: text.to_string(),
        timestamp: 1_716_400_000 + id as i64,
    }
}

fn synthetic_ad(id: usize, intent: AdIntent) -> Arc<NormalizedAd> {
    let neighborhood = ["RECREIO", "BARRA", "TAQUARA", "ANIL"][id % 4];
    Arc::new(NormalizedAd {
        intent,
        property_type: Some(if id % 3 == 0 {
            PropertyType::Casa
        } else {
            PropertyType::Apartamento
        }),
        neighborhoods: BTreeSet::from([neighborhood.to_string()]),
        price: Range::from_values(&[400_000 + (id as i64 % 10) * 50_000, 900_000]),
        bedrooms: Range::from_values(&[1 + (id as i64 % 4), 1 + (id as i64 % 4)]),
        area_m2: Range::from_values(&[60 + (id as i64 % 5) * 10, 150]),
        raw_text: LISTING.to_string(),
        author_name: format!("Corretor {}", id),
        author_phone: "5521999".to_string(),
    })
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box("*Vendo* Apartamento  em Jacarepaguá, 90m², R$ 650.000,00")));
    });
}

fn bench_classify(c: &mut Criterion) {
    let classifier = IntentClassifier::new();
    let listing = capture(1, LISTING);
    let request = capture(2, REQUEST);

    c.bench_function("classify_listing", |b| {
        b.iter(|| classifier.classify(black_box(&listing)));
    });
    c.bench_function("classify_request", |b| {
        b.iter(|| classifier.classify(black_box(&request)));
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = Pipeline::new(Arc::new(RuleAnalyzer::new()), MatchWeights::default());

    let mut group = c.benchmark_group("pipeline");

    for message_count in [10, 100, 500].iter() {
        let messages: Vec<RawMessage> = (0..*message_count)
            .map(|i| capture(i, if i % 2 == 0 { LISTING } else { REQUEST }))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("run", message_count),
            message_count,
            |b, _| {
                b.iter(|| pipeline.run(black_box(&messages)));
            },
        );
    }

    group.finish();
}

fn bench_cartesian_scan(c: &mut Criterion) {
    let matcher = OpportunityMatcher::with_default_weights();

    let mut group = c.benchmark_group("matching");

    for side_count in [10, 50, 100].iter() {
        let buyers: Vec<_> = (0..*side_count)
            .map(|i| synthetic_ad(i, AdIntent::Buy))
            .collect();
        let sellers: Vec<_> = (0..*side_count)
            .map(|i| synthetic_ad(i + 1, AdIntent::Sell))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("find_opportunities", side_count),
            side_count,
            |b, _| {
                b.iter(|| matcher.find_opportunities(black_box(&buyers), black_box(&sellers)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_classify,
    bench_pipeline,
    bench_cartesian_scan
);

criterion_main!(benches);
