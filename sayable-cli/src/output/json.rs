//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use sayable_api::NormalizedChunk;
use std::io::Write;

/// JSON formatter - outputs chunks as a JSON array of
/// `{index, source, text}` objects
pub struct JsonFormatter<W: Write> {
    writer: W,
    chunks: Vec<NormalizedChunk>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            chunks: Vec::new(),
            pretty,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_chunk(&mut self, chunk: &NormalizedChunk) -> Result<()> {
        self.chunks.push(chunk.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.chunks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_chunk(&NormalizedChunk {
                index: 0,
                source: "$5.".to_string(),
                text: "five dollars.".to_string(),
            })
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(
            out,
            "[{\"index\":0,\"source\":\"$5.\",\"text\":\"five dollars.\"}]\n"
        );
    }
}
