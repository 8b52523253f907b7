//! Property tests for segmentation, chunking, and numeral conversion

use proptest::prelude::*;
use sayable_core::numeral::{convert, convert_decimal};
use sayable_core::{split_into_chunks, ChunkAssembler, Segmenter, MAX_CHUNK_LEN};

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

proptest! {
    #[test]
    fn segments_cover_input(text in "[A-Za-z0-9 ,.;!?'\"]{0,200}") {
        let segments = Segmenter::shared().segment(&text);
        prop_assert_eq!(
            collapse_whitespace(&segments.join(" ")),
            collapse_whitespace(&text)
        );
        for segment in &segments {
            prop_assert!(!segment.trim().is_empty());
        }
    }

    #[test]
    fn unit_offsets_point_into_input(text in "[A-Za-zé ,.!?]{0,120}") {
        for unit in Segmenter::shared().segment_units(&text) {
            prop_assert!(text[unit.original_offset..].starts_with(&unit.text));
        }
    }

    #[test]
    fn chunks_respect_limit_when_clauses_fit(
        words in prop::collection::vec("[a-z]{1,8}", 1..200),
    ) {
        let mut text = String::new();
        for (i, word) in words.iter().enumerate() {
            text.push_str(word);
            text.push_str(match i % 7 {
                3 => ", ",
                6 => ". ",
                _ => " ",
            });
        }
        for chunk in split_into_chunks(&text) {
            prop_assert!(chunk.chars().count() <= MAX_CHUNK_LEN);
            prop_assert!(!chunk.is_empty());
        }
    }

    #[test]
    fn assembler_keeps_every_word(
        segments in prop::collection::vec("[A-Z][a-z]{0,10}( [a-z]{1,10}){0,5}\\.", 0..40),
        max_len in 20usize..120,
    ) {
        let chunks = ChunkAssembler::new(max_len).assemble(&segments);
        prop_assert_eq!(
            collapse_whitespace(&chunks.join(" ")),
            collapse_whitespace(&segments.join(" "))
        );
    }

    #[test]
    fn convert_is_total(n in any::<i64>()) {
        let words = convert(n);
        prop_assert!(!words.is_empty());
        prop_assert!(!words.chars().any(|c| c.is_ascii_digit()));
        prop_assert_eq!(n < 0, words.starts_with("minus "));
    }

    #[test]
    fn convert_decimal_never_panics(token in "-?[0-9]{1,30}(\\.[0-9]{0,6})?") {
        let spoken = convert_decimal(&token);
        prop_assert!(!spoken.is_empty());
    }
}

#[test]
fn test_multibyte_text_is_safe() {
    let text = "Café owners said “Great.” Über 9000 fans came! 👋 Bye.";
    let chunks = split_into_chunks(text);
    assert!(!chunks.is_empty());
    assert_eq!(
        collapse_whitespace(&chunks.join(" ")),
        collapse_whitespace(text)
    );
}
