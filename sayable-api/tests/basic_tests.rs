//! Basic tests for sayable-api

use sayable_api::*;
use std::sync::atomic::AtomicBool;
use tempfile::tempdir;

#[test]
fn test_input_text_processing() {
    let input = Input::Text("Hello world.".to_string());
    let text = input.read_text().unwrap();
    assert_eq!(text, "Hello world.");
}

#[test]
fn test_input_bytes_processing() {
    let input = Input::from_bytes(b"Hello world.".to_vec());
    assert_eq!(input.read_text().unwrap(), "Hello world.");

    let invalid = Input::from_bytes(vec![0xff, 0xfe]);
    assert!(matches!(invalid.read_text(), Err(ApiError::Utf8(_))));
}

#[test]
fn test_process_text_convenience() {
    let output = process_text("It cost $5. Call 911 now.").unwrap();

    assert_eq!(output.chunks.len(), 1);
    assert_eq!(output.chunks[0].source, "It cost $5. Call 911 now.");
    assert_eq!(
        output.chunks[0].text,
        "It cost five dollars. Call nine one one now."
    );
    assert_eq!(output.metadata.total_bytes, 25);
    assert_eq!(output.metadata.chunk_count, 1);
    assert!(output.metadata.normalized);
}

#[test]
fn test_other_language_is_chunked_only() {
    let output = process_text_with_language("Costó $5. Muy caro.", "es").unwrap();
    assert_eq!(output.text(), "Costó $5. Muy caro.");
    assert_eq!(output.metadata.language, "es");
    assert!(!output.metadata.normalized);
}

#[test]
fn test_only_english_source_language() {
    assert!(matches!(Pipeline::with_language("ko"), Err(ApiError::Config(_))));
    let pipeline = Pipeline::with_language("en-GB").unwrap();
    assert_eq!(pipeline.normalize("It cost $5.", "ko"), "It cost $5.");
    assert_eq!(pipeline.normalize("It cost $5.", "en"), "It cost five dollars.");
}

#[test]
fn test_process_detected() {
    let pipeline = Pipeline::new().unwrap();

    let output = pipeline
        .process_detected(Input::from_text("Ela está em casa. Custa $5."), "en")
        .unwrap();
    assert_eq!(output.metadata.language, "pt");
    assert_eq!(output.text(), "Ela está em casa. Custa $5.");

    let output = pipeline
        .process_detected(Input::from_text("It cost $5."), "en")
        .unwrap();
    assert_eq!(output.metadata.language, "en");
    assert_eq!(output.text(), "It cost five dollars.");
}

#[test]
fn test_long_text_respects_chunk_bound() {
    let config = Config::builder().max_chunk_len(80).build().unwrap();
    let pipeline = Pipeline::with_config(config).unwrap();
    let text = "The committee met on Tuesday. ".repeat(10);

    let output = pipeline.process(Input::from_text(text)).unwrap();
    assert!(output.chunks.len() > 1);
    for (i, chunk) in output.chunks.iter().enumerate() {
        assert_eq!(chunk.index, i);
        assert!(chunk.source.chars().count() <= 80);
    }
}

#[test]
fn test_lexicon_file_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lexicon.json");
    std::fs::write(&path, r#"[{"term": "NHS", "replacement": "N H S"}]"#).unwrap();

    let config = Config::builder().lexicon(&path).build().unwrap();
    let pipeline = Pipeline::with_config(config).unwrap();
    assert_eq!(pipeline.normalize("The NHS said", "en"), "The N H S said");

    std::fs::write(
        &path,
        r#"[{"term": "NHS", "replacement": "health service"},
            {"term": "GP", "replacement": "doctor", "ignoreCase": false}]"#,
    )
    .unwrap();
    assert_eq!(pipeline.reload_lexicon(), 2);
    assert_eq!(
        pipeline.normalize("The NHS and the GP", "en"),
        "The health service and the doctor"
    );
}

#[test]
fn test_session_through_pipeline() {
    let pipeline = Pipeline::new().unwrap();
    let session = pipeline.session("First point. Second point.", "en");
    assert_eq!(session.total(), 1);

    let mut spoken = Vec::new();
    let mut sink = |chunk: &NormalizedChunk| -> SinkResult {
        spoken.push(chunk.text.clone());
        Ok(())
    };
    let progress = session
        .run(&mut sink, 0, &AtomicBool::new(false))
        .unwrap();

    assert!(progress.completed);
    assert_eq!(spoken, vec!["First point. Second point."]);
}

#[test]
#[cfg(feature = "serde")]
fn test_output_serialization() {
    let output = process_text("It cost $5.").unwrap();

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains(r#""source":"It cost $5.""#));

    let deserialized: Output = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, output);
}

#[test]
fn test_error_conversions() {
    use std::io;

    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let api_error: ApiError = io_error.into();
    assert!(matches!(api_error, ApiError::Io(_)));

    let missing = process_file("/definitely/not/here.txt");
    assert!(matches!(missing, Err(ApiError::Io(_))));
}
