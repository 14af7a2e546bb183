//! Output formatting utilities for CLI

use serde::Serialize;

use crate::joke_api::Joke;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a serializable value as JSON or use custom text formatter
pub fn print_formatted<T, F>(value: &T, format: OutputFormat, text_formatter: F)
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => println!("{}", text_formatter(value)),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a success message (suppressed in quiet mode)
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}

/// Multi-line text rendering of a joke
pub fn format_joke(joke: &Joke) -> String {
    format!(
        "{}\n{}\n(Type: {} • ID: {})",
        joke.setup, joke.punchline, joke.kind, joke.id
    )
}

/// One-line text rendering of a joke for lists
pub fn format_joke_line(joke: &Joke) -> String {
    format!("{:>5}  {}", joke.id, joke.clipboard_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Joke {
        Joke {
            id: 12,
            kind: "general".to_string(),
            setup: "S".to_string(),
            punchline: "P".to_string(),
        }
    }

    #[test]
    fn test_format_joke() {
        assert_eq!(format_joke(&sample()), "S\nP\n(Type: general • ID: 12)");
    }

    #[test]
    fn test_format_joke_line_aligns_ids() {
        assert_eq!(format_joke_line(&sample()), "   12  S - P");
    }
}
