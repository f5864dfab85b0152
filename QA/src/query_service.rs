use crate::error::{QaError, Result};
use crate::generation_service::TextGenerator;
use crate::models::Answer;
use std::sync::Arc;
use std::time::Instant;

pub struct QueryService {
    generator: Arc<dyn TextGenerator>,
}

impl QueryService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Answers `query` against `content`. Empty input is rejected with
    /// [`QaError::Validation`] before the model is touched.
    pub async fn query(&self, query: &str, content: &str) -> Result<Answer> {
        if query.is_empty() || content.is_empty() {
            return Err(QaError::empty_input());
        }

        let start_time = Instant::now();
        let prompt = build_prompt(query, content);
        let generator = Arc::clone(&self.generator);

        let response = tokio::task::spawn_blocking(move || generator.generate(&prompt))
            .await
            .map_err(|e| QaError::Task(e.to_string()))??;

        log::info!(
            "Answered query ({} chars of context) in {} ms",
            content.len(),
            start_time.elapsed().as_millis()
        );

        Ok(Answer {
            response,
            citation: build_citation(query),
        })
    }
}

pub fn build_prompt(query: &str, content: &str) -> String {
    format!("query: {query} context: {content}")
}

// Placeholder: echoes the query, carries no location in the source.
pub fn build_citation(query: &str) -> String {
    format!("Cited from: {query}")
}
