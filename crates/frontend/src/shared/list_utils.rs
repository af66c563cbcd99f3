/// Helpers for rendering filtered lists
use leptos::prelude::*;

/// A run of text, flagged when it matches the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPart<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Split `text` into matching and non-matching runs (case-insensitive)
pub fn split_matches<'a>(text: &'a str, filter: &str) -> Vec<TextPart<'a>> {
    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();

    // Byte offsets of the lowercased text only line up with `text` for ASCII.
    if filter_lower.is_empty() || !text.is_ascii() {
        return vec![TextPart { text, matched: false }];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push(TextPart {
                text: &text[last_pos..actual_pos],
                matched: false,
            });
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push(TextPart {
            text: &text[actual_pos..match_end],
            matched: true,
        });
        last_pos = match_end;
    }
    if last_pos < text.len() || parts.is_empty() {
        parts.push(TextPart {
            text: &text[last_pos..],
            matched: false,
        });
    }
    parts
}

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = split_matches(text, filter)
        .into_iter()
        .map(|part| {
            let text = part.text.to_string();
            if part.matched {
                view! { <mark class="match-highlight">{text}</mark> }.into_any()
            } else {
                view! { <span>{text}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <>{parts}</> }.into_any()
}
