use regex::Regex;
use std::sync::LazyLock;

use crate::core::normalizer::normalize;
use crate::models::{ClassifiedMessage, Intent, RawMessage, SignalHit};

/// Messages shorter than this (trimmed) are noise by definition.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Decision thresholds, applied in `decide` in strict priority order.
/// Hand-tuned against captured group traffic; changing any of them changes
/// verdicts on the corpus.
const BUYING_STRONG_THRESHOLD: i32 = 15;
const SELLING_STRONG_THRESHOLD: i32 = 20;
const BUYING_LEAN_THRESHOLD: i32 = 10;
const SELLING_LEAN_THRESHOLD: i32 = 12;

/// Phrases that mark a broker publishing their own listing options; they
/// force a Selling verdict regardless of scores.
const SELLING_OVERRIDES: &[&str] = &["minhas opcoes", "opcoes diretas para venda"];

/// Highest-confidence listing phrases.
const SELLING_STRONG: &[(&str, i32)] = &[
    ("vendo", 12),
    ("vende-se", 12),
    ("vendemos", 10),
    ("oportunidade unica", 9),
    ("a venda", 8),
    ("direto com proprietario", 8),
    ("porteira fechada", 8),
    ("exclusividade", 7),
    ("lancamento", 7),
];

/// Listing phrases that need company before they convince.
const SELLING_MEDIUM: &[(&str, i32)] = &[
    ("agende sua visita", 6),
    ("pronto para morar", 6),
    ("aceita financiamento", 5),
    ("aceita permuta", 5),
    ("venda", 5),
    ("oportunidade", 5),
    ("imperdivel", 4),
    ("localizado", 4),
    ("fica no", 4),
];

/// Weak contextual hints that show up in listing copy.
const SELLING_INDICATORS: &[(&str, i32)] = &[
    ("reformado", 3),
    ("mobiliado", 3),
    ("area de lazer", 2),
    ("andar alto", 2),
    ("vaga", 2),
    ("varanda", 2),
    ("suite", 2),
    ("iptu", 2),
    ("condominio", 2),
    ("piscina", 1),
    ("churrasqueira", 1),
    ("portaria", 1),
];

/// Highest-confidence buy-side phrases.
const BUYING_STRONG: &[(&str, i32)] = &[
    ("cliente procura", 15),
    ("cliente busca", 15),
    ("compro", 12),
    ("tenho cliente", 12),
    ("procuro", 10),
    ("procura-se", 10),
    ("busco", 10),
    ("preciso de", 8),
];

/// Buy-side phrases that lean the verdict without deciding it alone.
const BUYING_MEDIUM: &[(&str, i32)] = &[
    ("alguem tem", 6),
    ("quem tiver", 6),
    ("cliente", 5),
    ("preciso", 5),
    ("para comprar", 5),
    ("indicacao", 4),
];

/// Noise shapes that bypass scoring entirely: greetings and courtesies,
/// bare links, bare media filenames.
static NOISE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(
            r"^(?:oi|ola|e ai|bom dia|boa tarde|boa noite|obrigado|obrigada|valeu|abraco|abracos|blz|ok)[!?., ]*$",
        )
        .expect("invalid greeting pattern"),
        Regex::new(r"^https?://\S+$").expect("invalid url pattern"),
        Regex::new(r"^\S+\.(?:jpe?g|png|gif|webp|pdf|docx?|xlsx?|mp4)$")
            .expect("invalid attachment pattern"),
    ]
});

/// Price mention: "r$", "valor:" or "preco:" followed by an amount.
static CURRENCY_BOOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:r\$|valor:|preco:)\s*\d[\d.,]*").expect("invalid currency pattern")
});

/// Floor area mention: digits immediately before m²/m2.
static AREA_BOOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d\s*m[2²]").expect("invalid area pattern"));

/// Room count mention: digits before quarto/suite.
static ROOMS_BOOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d\s*(?:quarto|suite)").expect("invalid rooms pattern"));

/// Informal magnitude mention: a number qualified by mil/milhao/milhoes.
static MAGNITUDE_BOOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\s*(?:milhoes|milhao|mil)\b").expect("invalid magnitude pattern")
});

/// Regex boosts credited to the selling side only: listing copy carries
/// prices, areas and room counts; buy-side requests rarely do.
const CURRENCY_BOOST_WEIGHT: i32 = 8;
const AREA_BOOST_WEIGHT: i32 = 6;
const ROOMS_BOOST_WEIGHT: i32 = 5;
const MAGNITUDE_BOOST_WEIGHT: i32 = 4;

/// Weighted keyword/regex triage of raw broker messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify one captured message.
    ///
    /// Deterministic: identical input text always produces the same verdict
    /// and the same signal trace.
    pub fn classify(&self, message: &RawMessage) -> ClassifiedMessage {
        let trimmed = message.message.trim();

        if trimmed.is_empty() || trimmed.chars().count() < MIN_MESSAGE_CHARS {
            return ClassifiedMessage {
                message: message.clone(),
                intent: Intent::Useless,
                score: 0,
                trace: Vec::new(),
            };
        }

        let text = normalize(trimmed);

        if NOISE_PATTERNS.iter().any(|pattern| pattern.is_match(&text)) {
            return ClassifiedMessage {
                message: message.clone(),
                intent: Intent::Useless,
                score: 0,
                trace: Vec::new(),
            };
        }

        let (selling, buying, trace) = score_text(&text);
        let has_override = SELLING_OVERRIDES.iter().any(|phrase| text.contains(phrase));
        let intent = decide(selling, buying, has_override);

        let score = match intent {
            Intent::Selling => selling,
            Intent::Buying => buying,
            Intent::Useless => selling.max(buying),
        };

        ClassifiedMessage {
            message: message.clone(),
            intent,
            score,
            trace,
        }
    }
}

/// Score normalized text against both keyword tables and the selling-side
/// regex boosts. Returns (selling, buying, ordered signal trace).
pub fn score_text(text: &str) -> (i32, i32, Vec<SignalHit>) {
    let mut selling = 0;
    let mut buying = 0;
    let mut trace = Vec::new();

    let selling_tables = [SELLING_STRONG, SELLING_MEDIUM, SELLING_INDICATORS];
    for table in selling_tables {
        for &(keyword, weight) in table {
            if text.contains(keyword) {
                selling += weight;
                trace.push(SignalHit::new(keyword, weight));
            }
        }
    }

    let buying_tables = [BUYING_STRONG, BUYING_MEDIUM];
    for table in buying_tables {
        for &(keyword, weight) in table {
            if text.contains(keyword) {
                buying += weight;
                trace.push(SignalHit::new(keyword, weight));
            }
        }
    }

    let boosts: [(&Regex, &str, i32); 4] = [
        (&*CURRENCY_BOOST, "currency", CURRENCY_BOOST_WEIGHT),
        (&*AREA_BOOST, "area", AREA_BOOST_WEIGHT),
        (&*ROOMS_BOOST, "rooms", ROOMS_BOOST_WEIGHT),
        (&*MAGNITUDE_BOOST, "magnitude", MAGNITUDE_BOOST_WEIGHT),
    ];
    for (pattern, name, weight) in boosts {
        if pattern.is_match(text) {
            selling += weight;
            trace.push(SignalHit::new(name, weight));
        }
    }

    (selling, buying, trace)
}

/// Resolve the final verdict from both side scores.
///
/// Rules are evaluated in this exact order; the first satisfied rule wins:
/// 1. an override phrase forces Selling;
/// 2. buying >= 15 and buying >= selling -> Buying;
/// 3. selling >= 20 -> Selling;
/// 4. buying >= 10 and buying > selling -> Buying;
/// 5. selling >= 12 and selling > buying -> Selling;
/// 6. otherwise Useless.
pub fn decide(selling: i32, buying: i32, has_override: bool) -> Intent {
    if has_override {
        return Intent::Selling;
    }

    if buying >= BUYING_STRONG_THRESHOLD && buying >= selling {
        return Intent::Buying;
    }

    if selling >= SELLING_STRONG_THRESHOLD {
        return Intent::Selling;
    }

    if buying >= BUYING_LEAN_THRESHOLD && buying > selling {
        return Intent::Buying;
    }

    if selling >= SELLING_LEAN_THRESHOLD && selling > buying {
        return Intent::Selling;
    }

    Intent::Useless
}
