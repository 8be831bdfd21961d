/// Normalize free-form chat text for keyword and gazetteer matching.
///
/// Steps, in order: lowercase, drop markdown emphasis markers, fold the
/// accented characters brokers actually type to their ASCII forms, collapse
/// whitespace runs and trim. Pure and idempotent.
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for c in text.to_lowercase().chars() {
        match c {
            '*' | '_' | '~' | '`' => {}
            'ã' | 'â' | 'á' | 'à' => folded.push('a'),
            'ê' | 'é' => folded.push('e'),
            'í' => folded.push('i'),
            'ô' | 'õ' | 'ó' => folded.push('o'),
            'ü' | 'ú' => folded.push('u'),
            'ç' => folded.push('c'),
            other => folded.push(other),
        }
    }

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
