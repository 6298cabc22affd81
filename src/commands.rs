//! Command-line parsing
//!
//! Parses `grounded-search [command] [args...]` into a [`Command`] and runs
//! the headless `ask` command.

use crate::backend::{validate_query, SearchClient, SearchError, SearchResult};
use crate::ui::state::{source_lines, SourceLine, NO_SOURCES_TEXT};

/// Parsed command from the process arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the search window (no arguments)
    Gui,
    /// Answer one question headless: ask <query...>
    Ask { query: String },
    /// Show help: help
    Help,
    /// Anything we do not recognise
    Unknown { name: String },
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let Some(first) = args.first() else {
            return Command::Gui;
        };

        match first.as_ref() {
            "ask" | "a" => Command::Ask {
                query: args[1..]
                    .iter()
                    .map(|s| s.as_ref())
                    .collect::<Vec<_>>()
                    .join(" "),
            },
            "help" | "--help" | "-h" => Command::Help,
            other => Command::Unknown {
                name: other.to_string(),
            },
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"grounded-search - web-grounded answers with cited sources

Usage: grounded-search [command]

Commands:
  (none)           Open the search window
  ask <question>   Print a single answer and its sources
  help             Show this help message

Environment:
  GEMINI_API_KEY             API key (overrides the config file)
  GROUNDED_SEARCH_MODEL      Model name
  GROUNDED_SEARCH_ENDPOINT   API base URL
  RUST_LOG                   Log filter, e.g. RUST_LOG=grounded_search=debug"#
    }
}

/// Plain-text answer followed by the numbered sources
pub fn render_answer(result: &SearchResult) -> String {
    let mut out = format!("{}\n\nSources:\n", result.answer);
    for line in source_lines(&result.sources) {
        match line {
            SourceLine::Cited { number, title, uri } => {
                out.push_str(&format!("  {}. {} <{}>\n", number, title, uri))
            }
            SourceLine::Placeholder => out.push_str(&format!("  {}\n", NO_SOURCES_TEXT)),
        }
    }
    out
}

/// Validate, search and render one question.
///
/// An `Err` means the process should exit with status 1.
pub async fn run_ask(client: &SearchClient, query: &str) -> Result<String, SearchError> {
    validate_query(query)?;
    let result = client.run_search(query).await?;
    Ok(render_answer(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::{EMPTY_QUERY_MESSAGE, SEARCH_FAILED_MESSAGE};
    use crate::backend::testing::{answer_body, FakeTransport};
    use crate::config::Config;
    use std::sync::Arc;

    fn client_with(transport: &Arc<FakeTransport>) -> SearchClient {
        let config = Config {
            api_key: "test-key".into(),
            ..Config::default()
        };
        SearchClient::with_transport(&config, transport.clone())
    }

    #[tokio::test]
    async fn test_ask_prints_numbered_sources() {
        let transport = FakeTransport::replying(
            200,
            &answer_body(
                "Paris is the capital of France.",
                &[
                    (Some("Wikipedia"), Some("https://en.wikipedia.org/wiki/Paris")),
                    (Some("Britannica"), Some("https://www.britannica.com/place/Paris")),
                ],
            ),
        );

        let out = run_ask(&client_with(&transport), "capital of France").await.unwrap();
        assert_eq!(
            out,
            "Paris is the capital of France.\n\nSources:\n  \
             1. Wikipedia <https://en.wikipedia.org/wiki/Paris>\n  \
             2. Britannica <https://www.britannica.com/place/Paris>\n"
        );
    }

    #[tokio::test]
    async fn test_ask_prints_placeholder_without_sources() {
        let transport = FakeTransport::replying(200, &answer_body("An answer.", &[]));

        let out = run_ask(&client_with(&transport), "q").await.unwrap();
        assert_eq!(out, format!("An answer.\n\nSources:\n  {}\n", NO_SOURCES_TEXT));
    }

    #[tokio::test]
    async fn test_ask_blank_query_fails_without_request() {
        let transport = FakeTransport::replying(200, &answer_body("unused", &[]));

        let err = run_ask(&client_with(&transport), "   ").await.unwrap_err();
        assert_eq!(err.user_message(), EMPTY_QUERY_MESSAGE);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_ask_http_error_fails() {
        let transport = FakeTransport::replying(500, "");

        let err = run_ask(&client_with(&transport), "q").await.unwrap_err();
        assert_eq!(err.user_message(), SEARCH_FAILED_MESSAGE);
    }

    #[test]
    fn test_parse_no_args() {
        let args: [&str; 0] = [];
        assert_eq!(Command::parse(&args), Command::Gui);
    }

    #[test]
    fn test_parse_ask_joins_words() {
        match Command::parse(&["ask", "capital", "of", "France"]) {
            Command::Ask { query } => assert_eq!(query, "capital of France"),
            other => panic!("Expected Ask, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_ask_without_query() {
        assert_eq!(
            Command::parse(&["ask"]),
            Command::Ask {
                query: String::new()
            }
        );
    }

    #[test]
    fn test_parse_help() {
        for flag in ["help", "--help", "-h"] {
            assert_eq!(Command::parse(&[flag]), Command::Help);
        }
    }

    #[test]
    fn test_parse_unknown() {
        match Command::parse(&["open"]) {
            Command::Unknown { name } => assert_eq!(name, "open"),
            other => panic!("Expected Unknown, got {:?}", other),
        }
    }
}
