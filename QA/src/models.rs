use serde::{Deserialize, Serialize};

/// Text pulled out of an uploaded PDF. Lives only for the duration of a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub filename: String,
    pub text: String,
}

/// Generated answer for a query, with its (placeholder) citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub response: String,
    pub citation: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    pub content: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryParams {
    pub query: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
    pub citation: String,
}

impl From<Answer> for QueryResponse {
    fn from(answer: Answer) -> Self {
        Self {
            response: answer.response,
            citation: answer.citation,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
