use dictionary::{normalize, WordEntry};

use crate::theme::Theme;

pub const MAX_DEFINITIONS: usize = 3;
pub const MAX_SYNONYMS: usize = 5;

/// The synonyms shown for `entry`, in the order they are numbered on screen.
pub fn displayed_synonyms(entry: &WordEntry) -> Vec<&str> {
    entry
        .meanings
        .iter()
        .flat_map(|meaning| meaning.synonyms.iter().take(MAX_SYNONYMS))
        .map(String::as_str)
        .collect()
}

pub fn format_entry(entry: &WordEntry, theme: Theme) -> String {
    let mut lines = vec![format!("Showing definition for '{}':", theme.heading(&entry.word))];
    if let Some(phonetic) = entry.phonetic() {
        lines.push(format!("  {phonetic}"));
    }
    if entry.audio_url().is_some() {
        lines.push("  (pronunciation available, type `audio`)".to_string());
    }
    let mut synonym_number = 0;
    for meaning in &entry.meanings {
        lines.push(format!("    {}:", theme.accent(&meaning.part_of_speech)));
        for definition in meaning.definitions.iter().take(MAX_DEFINITIONS) {
            lines.push(format!("        {}", definition.text));
            if let Some(example) = &definition.example {
                lines.push(format!("          example: \"{example}\""));
            }
        }
        if !meaning.synonyms.is_empty() {
            let synonyms = meaning
                .synonyms
                .iter()
                .take(MAX_SYNONYMS)
                .map(|synonym| {
                    synonym_number += 1;
                    format!("[{synonym_number}] {synonym}")
                })
                .collect::<Vec<String>>();
            lines.push(format!("      synonyms: {}", synonyms.join(", ")));
        }
    }
    lines.join("\n")
}

pub fn format_not_found(query: &str) -> String {
    format!(
        "Word not found.\nCouldn't find a definition for \"{}\". Try another word or check the spelling.",
        normalize(query)
    )
}

/// `None` when there is nothing to suggest.
pub fn format_suggestions(suggestions: &[&str]) -> Option<String> {
    if suggestions.is_empty() {
        return None;
    }
    Some(format!("Suggestions: {}", suggestions.join(", ")))
}

pub fn format_history(words: &[String]) -> String {
    if words.is_empty() {
        return "No recent searches".to_string();
    }
    words
        .iter()
        .enumerate()
        .map(|(index, word)| format!("[{}]: {word}", index + 1))
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictionary::{Definition, Meaning};

    fn definition(text: &str, example: Option<&str>) -> Definition {
        Definition {
            text: text.to_string(),
            example: example.map(str::to_string),
        }
    }

    fn entry() -> WordEntry {
        WordEntry {
            word: "run".to_string(),
            phonetic: Some("/rʌn/".to_string()),
            audio_url: None,
            meanings: vec![
                Meaning {
                    part_of_speech: "verb".to_string(),
                    definitions: vec![
                        definition("Move at a speed faster than a walk.", Some("He ran home.")),
                        definition("Move about in a hurried way.", None),
                        definition("Pass or cause to pass quickly.", None),
                        definition("Be in charge of.", None),
                    ],
                    synonyms: ["sprint", "race", "dash", "jog", "bolt", "gallop"]
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                },
                Meaning {
                    part_of_speech: "noun".to_string(),
                    definitions: vec![definition("An act of running.", None)],
                    synonyms: vec!["jog".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_definitions_are_capped() {
        let text = format_entry(&entry(), Theme::Light);
        assert!(text.contains("Move at a speed faster than a walk."));
        assert!(text.contains("example: \"He ran home.\""));
        assert!(text.contains("Pass or cause to pass quickly."));
        assert!(!text.contains("Be in charge of."));
        assert!(text.contains("An act of running."));
        assert!(text.contains("/rʌn/"));
        assert!(!text.contains("audio"));
    }

    #[test]
    fn test_synonyms_are_capped_and_numbered() {
        let entry = entry();
        assert_eq!(
            displayed_synonyms(&entry),
            vec!["sprint", "race", "dash", "jog", "bolt", "jog"]
        );

        let text = format_entry(&entry, Theme::Dark);
        assert!(text.contains("[1] sprint"));
        assert!(text.contains("[5] bolt"));
        assert!(!text.contains("gallop"));
        assert!(text.contains("[6] jog"));
    }

    #[test]
    fn test_audio_hint() {
        let mut entry = entry();
        entry.audio_url = Some("https://example.com/run.mp3".to_string());
        assert!(format_entry(&entry, Theme::Light).contains("type `audio`"));
    }

    #[test]
    fn test_not_found() {
        assert!(format_not_found(" luck ").contains("\"luck\""));
        let text = format_not_found("  Serendipitous ");
        assert!(text.contains("\"serendipitous\""));
        assert!(!text.contains("Serendipitous"));
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(format_suggestions(&[]), None);
        assert_eq!(
            format_suggestions(&["car", "cat"]).as_deref(),
            Some("Suggestions: car, cat")
        );
    }

    #[test]
    fn test_history() {
        assert_eq!(format_history(&[]), "No recent searches");
        assert_eq!(
            format_history(&["beta".to_string(), "alpha".to_string()]),
            "[1]: beta\n[2]: alpha"
        );
    }
}
