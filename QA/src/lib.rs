pub mod document_processor;
pub mod error;
pub mod generation_service;
pub mod models;
pub mod query_service;
pub mod questions;
pub mod sentences;
pub mod settings;

pub use document_processor::DocumentProcessor;
pub use error::{QaError, Result, EMPTY_INPUT_MESSAGE};
pub use generation_service::{T5Generator, TextGenerator};
pub use models::*;
pub use query_service::QueryService;
pub use questions::{extract_question, extract_questions};
pub use sentences::split_sentences;
pub use settings::{ModelSettings, Settings};
