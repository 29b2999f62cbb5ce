pub const DEFAULT_STRIP_CHARS: &str = ",'";

/// `"Prosper, Tome-Bound"` becomes `"prosper-tome-bound"`.
pub fn commander_slug(name: &str, strip_chars: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !strip_chars.contains(*c))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

pub fn page_url(template: &str, name: &str, strip_chars: &str) -> String {
    template.replace("{slug}", &commander_slug(name, strip_chars))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_strips_commas() {
        assert_eq!(
            commander_slug("Prosper, Tome-Bound", DEFAULT_STRIP_CHARS),
            "prosper-tome-bound"
        );
    }

    #[test]
    fn test_slug_strips_apostrophes() {
        assert_eq!(
            commander_slug("Atraxa, Praetors' Voice", DEFAULT_STRIP_CHARS),
            "atraxa-praetors-voice"
        );
    }

    #[test]
    fn test_slug_keeps_unlisted_punctuation() {
        assert_eq!(commander_slug("Prosper, Tome-Bound", ""), "prosper,-tome-bound");
    }

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url(
                "https://edhrec.com/commanders/{slug}",
                "Prosper, Tome-Bound",
                DEFAULT_STRIP_CHARS
            ),
            "https://edhrec.com/commanders/prosper-tome-bound"
        );
    }
}
