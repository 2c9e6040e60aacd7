//! Consolidation and synopsis placeholders
//!
//! Both take ordered snippets and return prose; both are pure and will be
//! replaced by model-backed implementations behind the same signatures.

/// Consolidate snippets into a short block: trimmed, empties dropped,
/// first five joined by newlines. Never mutates the input.
pub fn consolidate_snippets(snippets: &[String]) -> String {
    let clean: Vec<&str> = snippets
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    clean.iter().take(5).copied().collect::<Vec<_>>().join("\n")
}

/// Render a short synopsis over the topics that received content: a
/// bullet per topic, capped at ten.
pub fn make_synopsis(topics_done: &[String]) -> String {
    if topics_done.is_empty() {
        return "- (sem tópicos)".to_string();
    }
    topics_done
        .iter()
        .take(10)
        .map(|t| format!("- {t}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consolidate_trims_and_caps() {
        let snippets = vec![
            "  primeiro  ".to_string(),
            String::new(),
            "   ".to_string(),
            "segundo".to_string(),
            "terceiro".to_string(),
            "quarto".to_string(),
            "quinto".to_string(),
            "sexto".to_string(),
        ];
        let out = consolidate_snippets(&snippets);
        assert_eq!(out, "primeiro\nsegundo\nterceiro\nquarto\nquinto");
    }

    #[test]
    fn test_consolidate_empty() {
        assert_eq!(consolidate_snippets(&[]), "");
        assert_eq!(consolidate_snippets(&["   ".to_string()]), "");
    }

    #[test]
    fn test_synopsis() {
        let topics = vec!["Introdução".to_string(), "Teses centrais".to_string()];
        assert_eq!(make_synopsis(&topics), "- Introdução\n- Teses centrais");
        assert_eq!(make_synopsis(&[]), "- (sem tópicos)");
    }

    #[test]
    fn test_synopsis_caps_at_ten() {
        let topics: Vec<String> = (0..15).map(|i| format!("Tópico {i}")).collect();
        assert_eq!(make_synopsis(&topics).lines().count(), 10);
    }
}
