//! Basic usage of the normalization pipeline and a resumable session

use sayable_api::{process_text, Config, NormalizedChunk, Pipeline, SinkResult};
use std::sync::atomic::AtomicBool;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let output = process_text("The firm raised £800m ($1.08bn) in 2019. Dr. Smith was pleased.")?;
    for chunk in &output.chunks {
        println!("  [{}] {}", chunk.index, chunk.text);
    }
    println!("Processing took {}ms\n", output.metadata.processing_time_ms);

    // Method 2: Web article preset with a shorter chunk bound
    println!("=== Method 2: Custom Configuration ===");
    let config = Config::builder()
        .normalizer(Config::web_article().normalizer().clone())
        .max_chunk_len(120)
        .build()?;
    let pipeline = Pipeline::with_config(config)?;
    let text = "Markets fell 2.5% on Monday.Subscribe to our newsletter. \
                Analysts expect the central bank to cut rates in the 3rd quarter, \
                although some economists warn that inflation remains sticky, \
                wages keep rising, and energy prices are volatile.";
    for chunk in pipeline.split(text) {
        println!("  {chunk}");
    }

    // Method 3: Speak chunks through a sink and resume after a stop
    println!("\n=== Method 3: Session ===");
    let session = pipeline.session(text, "en");
    let mut speak = |chunk: &NormalizedChunk| -> SinkResult {
        println!("  speaking #{}: {}", chunk.index, chunk.text);
        Ok(())
    };
    let progress = session.run(&mut speak, 1, &AtomicBool::new(false))?;
    println!(
        "Resumed at chunk 1, finished at {}/{}",
        progress.next_index, progress.total
    );

    Ok(())
}
