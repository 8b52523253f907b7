//! Language tags and script-based language detection
//!
//! Only English text is normalized. The other voices the synthesis backend
//! supports are recognized so callers can route text, but their chunks pass
//! through untouched.

use std::fmt;

/// A recognized language tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LanguageTag {
    /// English (`en`, `en-US`, `eng`, ...)
    English,
    /// Korean
    Korean,
    /// Spanish
    Spanish,
    /// Portuguese
    Portuguese,
    /// French
    French,
    /// Anything else, lower-cased as given
    Other(String),
}

impl LanguageTag {
    /// Parse a BCP-47 or ISO 639 style tag by its primary subtag.
    pub fn parse(tag: &str) -> Self {
        let lower = tag.trim().to_lowercase();
        let primary = lower.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" | "eng" => LanguageTag::English,
            "ko" | "kor" => LanguageTag::Korean,
            "es" | "spa" => LanguageTag::Spanish,
            "pt" | "por" => LanguageTag::Portuguese,
            "fr" | "fra" | "fre" => LanguageTag::French,
            _ if lower.starts_with("en") => LanguageTag::English,
            _ => LanguageTag::Other(lower),
        }
    }

    /// Short code for the tag
    pub fn code(&self) -> &str {
        match self {
            LanguageTag::English => "en",
            LanguageTag::Korean => "ko",
            LanguageTag::Spanish => "es",
            LanguageTag::Portuguese => "pt",
            LanguageTag::French => "fr",
            LanguageTag::Other(code) => code,
        }
    }

    /// Whether text in this language is normalized
    pub fn is_normalized(&self) -> bool {
        matches!(self, LanguageTag::English)
    }

    /// Whether the synthesis backend has a voice for this language
    pub fn is_supported_voice(&self) -> bool {
        !matches!(self, LanguageTag::Other(_))
    }

    /// All languages with a voice, in display order
    pub fn supported() -> [LanguageTag; 5] {
        [
            LanguageTag::English,
            LanguageTag::Korean,
            LanguageTag::Spanish,
            LanguageTag::Portuguese,
            LanguageTag::French,
        ]
    }

    /// Human-readable name
    pub fn name(&self) -> &str {
        match self {
            LanguageTag::English => "English",
            LanguageTag::Korean => "Korean",
            LanguageTag::Spanish => "Spanish",
            LanguageTag::Portuguese => "Portuguese",
            LanguageTag::French => "French",
            LanguageTag::Other(code) => code,
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// True when `tag` names the normalized source language
pub fn is_english(tag: &str) -> bool {
    tag.trim().to_lowercase().starts_with("en")
}

fn has_any(text: &str, set: &[char]) -> bool {
    text.chars().any(|ch| set.contains(&ch))
}

fn has_word(text: &str, word: &str) -> bool {
    text.split(|ch: char| !ch.is_alphanumeric())
        .any(|token| token == word)
}

fn is_hangul(ch: char) -> bool {
    matches!(ch, '\u{3131}'..='\u{314E}' | '\u{314F}'..='\u{3163}' | '\u{AC00}'..='\u{D7A3}')
}

fn is_roman(ch: char) -> bool {
    ch.is_ascii() || ".,!?;:\"'()[]{}«»—– ".contains(ch)
}

/// Guess the language of a sentence from script and diacritics.
///
/// `hint` is the caller's preferred language; it wins whenever the text
/// carries no stronger signal and the hint has a voice.
pub fn detect_language(text: &str, hint: &str) -> LanguageTag {
    let hint = LanguageTag::parse(hint);
    let lower = text.to_lowercase();

    if lower.chars().any(is_hangul) {
        return LanguageTag::Korean;
    }
    if has_any(&lower, &['ã', 'õ']) {
        return LanguageTag::Portuguese;
    }
    if has_any(&lower, &['ñ', '¿', '¡']) {
        return LanguageTag::Spanish;
    }
    if has_any(&lower, &['è', 'ê', 'ë', 'î', 'ï', 'û', 'ù']) {
        return LanguageTag::French;
    }

    let acute = has_any(&lower, &['á', 'í', 'ó', 'ú']);
    if lower.contains('ç') {
        return if acute {
            LanguageTag::Portuguese
        } else {
            LanguageTag::French
        };
    }

    if acute {
        if has_any(&lower, &['â', 'ê', 'ô']) {
            return LanguageTag::Portuguese;
        }
        if has_word(&lower, "y") {
            return LanguageTag::Spanish;
        }
        if has_word(&lower, "e") || has_word(&lower, "em") {
            return LanguageTag::Portuguese;
        }
        return LanguageTag::Spanish;
    }

    if lower.contains('é') {
        if has_word(&lower, "et") || has_word(&lower, "est") {
            return LanguageTag::French;
        }
        if has_word(&lower, "y") {
            return LanguageTag::Spanish;
        }
        if has_word(&lower, "em") {
            return LanguageTag::Portuguese;
        }
        if has_word(&lower, "en") {
            return LanguageTag::Spanish;
        }
        if has_any(&lower, &['à', 'â', 'ô']) {
            return LanguageTag::French;
        }
        if matches!(
            hint,
            LanguageTag::Spanish | LanguageTag::Portuguese | LanguageTag::French
        ) {
            return hint;
        }
        return LanguageTag::Spanish;
    }

    if text.chars().all(is_roman) {
        return if hint != LanguageTag::Korean && hint.is_supported_voice() {
            hint
        } else {
            LanguageTag::English
        };
    }
    if hint.is_supported_voice() {
        hint
    } else {
        LanguageTag::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(LanguageTag::parse("en"), LanguageTag::English);
        assert_eq!(LanguageTag::parse("en-US"), LanguageTag::English);
        assert_eq!(LanguageTag::parse("EN_gb"), LanguageTag::English);
        assert_eq!(LanguageTag::parse("ko-KR"), LanguageTag::Korean);
        assert_eq!(LanguageTag::parse("pt-BR"), LanguageTag::Portuguese);
        assert_eq!(LanguageTag::parse("fra"), LanguageTag::French);
        assert_eq!(LanguageTag::parse("de"), LanguageTag::Other("de".to_string()));
    }

    #[test]
    fn test_is_english() {
        assert!(is_english("en"));
        assert!(is_english("en-US"));
        assert!(is_english("English"));
        assert!(!is_english("ko"));
        assert!(!is_english(""));
    }

    #[test]
    fn test_detect_scripts() {
        assert_eq!(detect_language("안녕하세요", "en"), LanguageTag::Korean);
        assert_eq!(detect_language("Não sei", "en"), LanguageTag::Portuguese);
        assert_eq!(detect_language("¿Qué pasa?", "en"), LanguageTag::Spanish);
        assert_eq!(detect_language("C'est très bien", "en"), LanguageTag::French);
        assert_eq!(detect_language("Ça va", "en"), LanguageTag::French);
    }

    #[test]
    fn test_detect_ambiguous_accents() {
        assert_eq!(detect_language("Él canta y baila", "en"), LanguageTag::Spanish);
        assert_eq!(detect_language("Ela está em casa", "en"), LanguageTag::Portuguese);
        assert_eq!(detect_language("Le café est chaud", "en"), LanguageTag::French);
        assert_eq!(detect_language("café", "pt"), LanguageTag::Portuguese);
    }

    #[test]
    fn test_ascii_keeps_hint() {
        assert_eq!(detect_language("Hello there.", "en"), LanguageTag::English);
        assert_eq!(detect_language("Hola amigo", "es"), LanguageTag::Spanish);
        assert_eq!(detect_language("Hello there.", "ko"), LanguageTag::English);
        assert_eq!(detect_language("Hello there.", "de"), LanguageTag::English);
    }
}
