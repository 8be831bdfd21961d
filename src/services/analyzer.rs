use std::collections::HashMap;
use thiserror::Error;

/// Errors from the linguistic analysis collaborator.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("text could not be analyzed: {0}")]
    Unanalyzable(String),
}

/// One token produced by linguistic analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form as it appears in the (normalized) text.
    pub text: String,
    /// Canonical lemma used for dictionary lookups.
    pub lemma: String,
    /// Cardinal number composed only of digits.
    pub is_number: bool,
}

/// Linguistic analysis seam used by the attribute extractor.
///
/// Analysis is pure and stateless per call; a failure is scoped to the
/// message being analyzed, never to the batch.
pub trait LinguisticAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Vec<Token>, AnalyzerError>;
}

/// Rule-based analyzer for the Portuguese broker vocabulary.
///
/// Tokenizes on non-alphanumeric boundaries and lemmatizes with a small
/// irregular table plus plural-stripping suffix rules. It only needs to be
/// good enough to canonicalize the surface forms the extractor dictionaries
/// look up (quartos -> quarto, apartamentos -> apartamento, ...).
pub struct RuleAnalyzer {
    irregular: HashMap<&'static str, &'static str>,
}

impl Default for RuleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleAnalyzer {
    pub fn new() -> Self {
        let mut irregular = HashMap::new();
        irregular.insert("imoveis", "imovel");
        irregular.insert("opcoes", "opcao");
        irregular.insert("meses", "mes");

        Self { irregular }
    }

    fn lemmatize(&self, word: &str) -> String {
        if let Some(&lemma) = self.irregular.get(word) {
            return lemma.to_string();
        }

        if let Some(stem) = word.strip_suffix("oes") {
            if word.len() > 4 {
                return format!("{}ao", stem);
            }
        }

        if let Some(stem) = word.strip_suffix('s') {
            if word.len() > 3 {
                return stem.to_string();
            }
        }

        word.to_string()
    }
}

impl LinguisticAnalyzer for RuleAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Token>, AnalyzerError> {
        let tokens = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(|part| {
                let is_number = part.chars().all(|c| c.is_ascii_digit());
                let lemma = if is_number {
                    part.to_string()
                } else {
                    self.lemmatize(part)
                };

                Token {
                    text: part.to_string(),
                    lemma,
                    is_number,
                }
            })
            .collect();

        Ok(tokens)
    }
}
