use std::sync::LazyLock;

use regex::Regex;

const MAX_TITLE_CHARS: usize = 80;
const ELLIPSIS: char = '…';

/// Polite fillers and command starters, longest phrase of each family first.
/// Question words (how, what, bagaimana, apa) stay in the title.
const FILLER_PREFIXES: &[&str] = &[
    // Indonesian
    "tolong jelaskan",
    "tolong buatkan",
    "tolong cari",
    "tolong",
    "bisakah anda",
    "bisakah kamu",
    "bisa bantu",
    "bisa",
    "saya ingin bertanya mengenai",
    "saya ingin bertanya",
    "saya ingin",
    "saya butuh",
    "beritahu saya",
    "kasih tahu",
    "coba sebutkan",
    "sebutkan",
    // English
    "please explain",
    "please tell me",
    "please",
    "can you help",
    "can you",
    "i want to ask about",
    "i want to ask",
    "i need",
    "tell me about",
];

static PREFIX_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FILLER_PREFIXES
        .iter()
        .map(|p| Regex::new(&format!(r"(?i)^{}\s+", regex::escape(p))).expect("valid regex"))
        .collect()
});

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Builds a session title from the first user message of a conversation.
pub fn derive_title(text: &str) -> String {
    let stripped = strip_filler(text);
    let mut clean = collapse_whitespace(stripped);
    if clean.is_empty() {
        clean = collapse_whitespace(text);
    }
    truncate(capitalize_first(&clean))
}

fn strip_filler(text: &str) -> &str {
    PREFIX_PATTERNS
        .iter()
        .find_map(|re| re.find(text).map(|m| &text[m.end()..]))
        .unwrap_or(text)
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncate(text: String) -> String {
    if text.chars().count() <= MAX_TITLE_CHARS {
        return text;
    }
    let mut cut: String = text.chars().take(MAX_TITLE_CHARS).collect();
    cut.push(ELLIPSIS);
    cut
}
