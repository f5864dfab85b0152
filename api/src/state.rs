use qa_system::{DocumentProcessor, QueryService, TextGenerator};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything the handlers need, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub document_processor: DocumentProcessor,
    pub query_service: Arc<QueryService>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            document_processor: DocumentProcessor::new(),
            query_service: Arc::new(QueryService::new(generator)),
            static_dir: static_dir.into(),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
