//! Basic tests for sayable-engine

use proptest::prelude::*;
use sayable_engine::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_end_to_end_article() {
    let text = "Mr. Smith arrived. He paid $5.50 for 2kg of apples. \
                The firm raised £800m ($1.08bn) in 2019.";
    let normalizer = Normalizer::default();
    let chunks: Vec<String> = split_into_chunks(text)
        .iter()
        .map(|chunk| normalizer.normalize(chunk, "en"))
        .collect();

    assert_eq!(chunks.len(), 1);
    assert_eq!(
        chunks[0],
        "Mister Smith arrived. He paid five dollars and fifty cents for two kilograms of apples. \
         The firm raised eight hundred million pounds equivalent to one point zero eight billion \
         dollars in twenty nineteen."
    );
}

#[test]
fn test_emergency_and_ranges() {
    assert_eq!(
        normalize("Call 911 for ages 10-15", "en"),
        "Call nine one one for ages ten to fifteen"
    );
}

#[test]
fn test_decimals_read_digit_by_digit() {
    assert_eq!(
        normalize("The ratio was 0.1999 today", "en"),
        "The ratio was zero point one nine nine nine today"
    );
    assert_eq!(
        normalize("It grew 3.2005 times", "en"),
        "It grew three point two zero zero five times"
    );
}

#[test]
fn test_plan_then_normalize() {
    let text = "First sentence here. ".repeat(40);
    let plan = ChunkPlan::build(&text, MAX_CHUNK_LEN);
    assert!(plan.total() > 1);
    for chunk in plan.chunks() {
        assert!(chunk.text.chars().count() <= MAX_CHUNK_LEN);
        assert_eq!(normalize(&chunk.text, "en"), chunk.text);
    }
}

#[test]
fn test_reload_during_concurrent_reads() {
    let store = Arc::new(LexiconStore::in_memory(vec![LexiconEntry::new("foo", "bar")]));
    let normalizer = Arc::new(Normalizer::with_resolver(
        NormalizerConfig::default(),
        store.clone(),
    ));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let normalizer = Arc::clone(&normalizer);
            thread::spawn(move || {
                for _ in 0..200 {
                    let out = normalizer.normalize("foo", "en");
                    assert!(out == "bar" || out == "baz", "unexpected {out}");
                }
            })
        })
        .collect();

    for i in 0..50 {
        let replacement = if i % 2 == 0 { "baz" } else { "bar" };
        store
            .save(vec![LexiconEntry::new("foo", replacement)])
            .unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
}

proptest! {
    #[test]
    fn normalize_is_idempotent(
        parts in prop::collection::vec(
            prop::sample::select(vec![
                "It cost $5.",
                "Dr. Smith ran 5km.",
                "Call 911 now.",
                "Growth was 2.5%.",
                "She finished 3rd in 2005.",
                "The deal was £800m ($1.08bn).",
                "Ages 10-15 only.",
                "Mix of cats vs. dogs.",
                "Plain words here.",
            ]),
            1..6,
        )
    ) {
        let text = parts.join(" ");
        let once = normalize(&text, "en");
        let twice = normalize(&once, "en");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn non_english_is_identity(text in "\\PC{0,80}", tag in "(ko|es|pt|fr|de)(-[A-Z]{2})?") {
        prop_assert_eq!(normalize(&text, &tag), text);
    }
}
