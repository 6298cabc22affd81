//! Shared types for the generative search API
//!
//! The request types serialize to the `generateContent` payload; the response
//! types mirror only the fields we read, all optional, so a partial response
//! still deserializes and the gaps surface as domain errors instead.

use serde::{Deserialize, Serialize};

/// A cited web source attached to an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

/// Answer text plus the citations that survived normalization, in response order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub answer: String,
    pub sources: Vec<Source>,
}

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
    pub system_instruction: Content,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// Tool switch; serializes as `{"google_search": {}}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GoogleSearch {}

// ============================================================================
// Response
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    pub grounding_attributions: Option<Vec<GroundingAttribution>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GroundingAttribution {
    pub web: Option<WebSource>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebSource {
    pub title: Option<String>,
    pub uri: Option<String>,
}

impl GenerateContentResponse {
    fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.as_ref()?.first()
    }

    /// Text of the first part of the first candidate, if present and non-empty
    pub fn answer(&self) -> Option<&str> {
        self.first_candidate()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Grounding attributions of the first candidate (empty when absent)
    pub fn attributions(&self) -> &[GroundingAttribution] {
        self.first_candidate()
            .and_then(|c| c.grounding_metadata.as_ref())
            .and_then(|m| m.grounding_attributions.as_deref())
            .unwrap_or(&[])
    }
}

impl GroundingAttribution {
    /// Converts to a [`Source`] when both title and URI are present and non-empty
    pub fn to_source(&self) -> Option<Source> {
        let web = self.web.as_ref()?;
        let title = web.title.as_deref().filter(|t| !t.is_empty())?;
        let uri = web.uri.as_deref().filter(|u| !u.is_empty())?;
        Some(Source {
            title: title.to_string(),
            uri: uri.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_field_names() {
        let request = GenerateContentRequest {
            contents: vec![Content::text("capital of France")],
            tools: vec![Tool::default()],
            system_instruction: Content::text("be concise"),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contents": [{ "parts": [{ "text": "capital of France" }] }],
                "tools": [{ "google_search": {} }],
                "systemInstruction": { "parts": [{ "text": "be concise" }] }
            })
        );
    }

    #[test]
    fn test_answer_from_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"first"},{"text":"ignored"}]}},
                {"content":{"parts":[{"text":"second"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(response.answer(), Some("first"));
    }

    #[test]
    fn test_missing_pieces_yield_no_answer() {
        for body in [
            r#"{}"#,
            r#"{"candidates":null}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#,
        ] {
            let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.answer(), None, "body: {}", body);
        }
    }

    #[test]
    fn test_attribution_requires_title_and_uri() {
        let complete = GroundingAttribution {
            web: Some(WebSource {
                title: Some("Wikipedia".into()),
                uri: Some("https://en.wikipedia.org/wiki/Paris".into()),
            }),
        };
        assert_eq!(
            complete.to_source(),
            Some(Source {
                title: "Wikipedia".into(),
                uri: "https://en.wikipedia.org/wiki/Paris".into(),
            })
        );

        let no_uri = GroundingAttribution {
            web: Some(WebSource {
                title: Some("Wikipedia".into()),
                uri: None,
            }),
        };
        assert_eq!(no_uri.to_source(), None);

        let empty_title = GroundingAttribution {
            web: Some(WebSource {
                title: Some(String::new()),
                uri: Some("https://example.com".into()),
            }),
        };
        assert_eq!(empty_title.to_source(), None);

        assert_eq!(GroundingAttribution { web: None }.to_source(), None);
    }
}
