//! Placeholder substitution and deterministic emoji stripping.

/// Replace `{theme}` with the theme and each `{keyword}` occurrence with
/// the next word from `keywords`, round-robin via `counter`. When no
/// keywords were supplied, `fallback` (the genre's default noun list)
/// feeds the placeholders instead.
///
/// The counter is shared across a variant's slots so consecutive
/// placeholders draw consecutive keywords.
pub fn fill_placeholders(
    template: &str,
    theme: &str,
    keywords: &[String],
    fallback: &[&str],
    counter: &mut usize,
) -> String {
    let mut out = template.replace("{theme}", theme);

    while let Some(pos) = out.find("{keyword}") {
        let word: &str = if !keywords.is_empty() {
            &keywords[*counter % keywords.len()]
        } else if !fallback.is_empty() {
            fallback[*counter % fallback.len()]
        } else {
            "content"
        };
        out.replace_range(pos..pos + "{keyword}".len(), word);
        *counter += 1;
    }

    out
}

/// Remove whitespace-delimited tokens consisting entirely of emoji
/// glyphs, rejoining the rest with single spaces. Tokens containing any
/// non-emoji character survive untouched, so `{placeholder}` syntax can
/// never be corrupted.
pub fn strip_emoji_tokens(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| !is_emoji_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_emoji_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_emoji_char)
}

fn is_emoji_char(c: char) -> bool {
    matches!(c,
        '\u{1F000}'..='\u{1FAFF}'   // pictographs, emoticons, symbols
        | '\u{2600}'..='\u{27BF}'   // misc symbols, dingbats
        | '\u{2190}'..='\u{21FF}'   // arrows
        | '\u{2B00}'..='\u{2BFF}'   // more arrows and symbols
        | '\u{FE0F}'                // variation selector
        | '\u{200D}'                // zero-width joiner
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_and_keywords_substituted_in_order() {
        let mut counter = 0;
        let out = fill_placeholders(
            "{keyword} then {keyword} for {theme}",
            "meal prep",
            &["planning".into(), "batching".into()],
            &[],
            &mut counter,
        );
        assert_eq!(out, "planning then batching for meal prep");
        assert_eq!(counter, 2);
    }

    #[test]
    fn fallback_nouns_fill_when_no_keywords() {
        let mut counter = 0;
        let out = fill_placeholders("focus on {keyword}", "x", &[], &["habits"], &mut counter);
        assert_eq!(out, "focus on habits");
    }

    #[test]
    fn emoji_tokens_are_stripped_whole() {
        assert_eq!(
            strip_emoji_tokens("\u{1F6A8} 90% of people get {theme} wrong."),
            "90% of people get {theme} wrong."
        );
        assert_eq!(
            strip_emoji_tokens("Bookmark this. \u{1F516}"),
            "Bookmark this."
        );
    }

    #[test]
    fn placeholders_survive_stripping() {
        let stripped = strip_emoji_tokens("\u{1F440} The {keyword} detail about {theme}");
        assert!(stripped.contains("{keyword}"));
        assert!(stripped.contains("{theme}"));
    }

    #[test]
    fn plain_text_is_unchanged_apart_from_whitespace_normalization() {
        assert_eq!(strip_emoji_tokens("no emoji here"), "no emoji here");
    }
}
