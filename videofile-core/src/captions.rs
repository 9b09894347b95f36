//! Caption track labels derived from caption filenames.
//!
//! A caption file named after a three letter ISO 639-2 code (`eng.vtt`,
//! `swe.srt`) is labelled with the localized language name. Any other file
//! is labelled with its filename stem.

use crate::host::LocalizationCatalog;

/// Catalog namespace holding three letter language code names.
pub const LANGUAGE_NAMESPACE: &str = "iso6392";

/// Returns the filename without its last extension.
///
/// A dot in the first position does not count, so `.vtt` stays `.vtt`.
pub fn caption_stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) if dot > 0 => &filename[..dot],
        _ => filename,
    }
}

/// Derives the label shown in the player's caption menu.
///
/// Never fails: without a usable translation the stem itself is the label.
pub fn caption_label(filename: &str, catalog: &dyn LocalizationCatalog) -> String {
    let stem = caption_stem(filename);

    if !is_language_code(stem) {
        return stem.to_string();
    }

    let translated = catalog.lookup(stem, LANGUAGE_NAMESPACE);
    if is_usable_translation(stem, &translated) {
        translated
    } else {
        stem.to_string()
    }
}

fn is_language_code(stem: &str) -> bool {
    stem.len() == 3 && stem.bytes().all(|b| b.is_ascii_lowercase())
}

// Untranslated keys come back as `[[key]]`. That placeholder is rejected so a
// code with no catalog entry is labelled with the code itself rather than a
// bracketed key. A bracketed phrase for some other key is still accepted as
// long as both bracket pairs are present.
fn is_usable_translation(key: &str, translated: &str) -> bool {
    if translated == placeholder_for(key) {
        return false;
    }
    !translated.starts_with("[[") || translated.ends_with("]]")
}

/// Returns the placeholder a catalog produces for a key it does not know.
pub fn placeholder_for(key: &str) -> String {
    format!("[[{key}]]")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    struct FixedCatalog(HashMap<&'static str, &'static str>);

    impl LocalizationCatalog for FixedCatalog {
        fn lookup(&self, key: &str, namespace: &str) -> String {
            assert_eq!(namespace, LANGUAGE_NAMESPACE);
            self.0
                .get(key)
                .map(|value| value.to_string())
                .unwrap_or_else(|| placeholder_for(key))
        }
    }

    fn catalog(entries: &[(&'static str, &'static str)]) -> FixedCatalog {
        FixedCatalog(entries.iter().copied().collect())
    }

    #[test]
    fn test_stem_strips_last_extension_only() {
        assert_eq!(caption_stem("eng.vtt"), "eng");
        assert_eq!(caption_stem("lecture.en.vtt"), "lecture.en");
        assert_eq!(caption_stem("transcript"), "transcript");
        assert_eq!(caption_stem(".vtt"), ".vtt");
        assert_eq!(caption_stem("notes."), "notes");
    }

    #[test]
    fn test_translated_language_code() {
        let catalog = catalog(&[("eng", "English")]);
        assert_eq!(caption_label("eng.vtt", &catalog), "English");
    }

    #[test]
    fn test_non_code_stem_is_used_verbatim() {
        let catalog = catalog(&[("eng", "English")]);
        assert_eq!(caption_label("transcript.vtt", &catalog), "transcript");
        assert_eq!(caption_label("ENG.vtt", &catalog), "ENG");
        assert_eq!(caption_label("en.vtt", &catalog), "en");
        assert_eq!(caption_label("engl.vtt", &catalog), "engl");
    }

    #[test]
    fn test_untranslated_code_falls_back_to_stem() {
        let catalog = catalog(&[]);
        assert_eq!(caption_label("xyz.vtt", &catalog), "xyz");
    }

    #[test]
    fn test_half_bracketed_translation_is_rejected() {
        let catalog = catalog(&[("abc", "[[broken")]);
        assert_eq!(caption_label("abc.vtt", &catalog), "abc");
    }

    #[test]
    fn test_fully_bracketed_translation_is_accepted() {
        let catalog = catalog(&[("abc", "[[Abcish]]")]);
        assert_eq!(caption_label("abc.vtt", &catalog), "[[Abcish]]");
    }

    #[test]
    fn test_translation_ending_in_brackets_only_is_accepted() {
        let catalog = catalog(&[("swe", "Swedish]]")]);
        assert_eq!(caption_label("swe.vtt", &catalog), "Swedish]]");
    }

    proptest! {
        #[test]
        fn prop_label_never_empty_for_non_empty_filename(filename in "[a-zA-Z0-9._-]{1,24}") {
            let catalog = catalog(&[]);
            let label = caption_label(&filename, &catalog);
            prop_assert!(!label.is_empty());
        }

        #[test]
        fn prop_unknown_codes_keep_stem(code in "[a-z]{3}", ext in "[a-z]{2,4}") {
            let catalog = catalog(&[]);
            let filename = format!("{code}.{ext}");
            prop_assert_eq!(caption_label(&filename, &catalog), code);
        }
    }
}
