//! Whitespace tokenization with byte offsets.

/// Byte ranges of whitespace-separated tokens.
pub(crate) fn token_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

/// Join the tokens `from..=to` (clamped) with single spaces.
pub(crate) fn window(text: &str, spans: &[(usize, usize)], from: usize, to: usize) -> String {
    if spans.is_empty() {
        return String::new();
    }
    let to = to.min(spans.len() - 1);
    spans[from.min(to)..=to]
        .iter()
        .map(|&(s, e)| &text[s..e])
        .collect::<Vec<_>>()
        .join(" ")
}
