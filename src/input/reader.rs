use anyhow::{Context, Result, bail};
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads the question for a one-shot exchange.
pub struct InputReader;

impl InputReader {
    /// Returns the question from the command line, or stdin when absent.
    ///
    /// The result is trimmed; an empty string means the user gave nothing.
    pub fn read(question: Option<&str>) -> Result<String> {
        match question {
            Some(text) => Ok(text.trim().to_string()),
            None => Self::read_from(io::stdin().lock()),
        }
    }

    fn read_from(mut reader: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let bytes_read = reader
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        let text = String::from_utf8(buffer).context("Input is not valid UTF-8")?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_argument_is_trimmed() {
        let question = InputReader::read(Some("  What is the capital of France?\n")).unwrap();
        assert_eq!(question, "What is the capital of France?");
    }

    #[test]
    fn test_read_from_stream() {
        let question = InputReader::read_from("Explain relativity.\n".as_bytes()).unwrap();
        assert_eq!(question, "Explain relativity.");
    }

    #[test]
    fn test_read_from_unicode_stream() {
        let question = InputReader::read_from("¿Qué es la vida?".as_bytes()).unwrap();
        assert_eq!(question, "¿Qué es la vida?");
    }

    #[test]
    fn test_read_from_blank_stream_is_empty() {
        assert!(InputReader::read_from(" \n\t".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_from_invalid_utf8() {
        let err = InputReader::read_from(&[0xff, 0xfe][..]).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_read_from_exceeds_max_size() {
        let large = "x".repeat(MAX_INPUT_SIZE + 1);
        let err = InputReader::read_from(large.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_from_at_max_size() {
        let content = "x".repeat(MAX_INPUT_SIZE);
        let result = InputReader::read_from(content.as_bytes()).unwrap();
        assert_eq!(result.len(), MAX_INPUT_SIZE);
    }
}
