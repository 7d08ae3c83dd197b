use std::sync::Arc;

use blog_summarizer::{ChatModel, ContentExtractor};

use crate::db::{FullTextStore, SummaryStore};

/// Clients shared by every request. Built once in `main` and injected into
/// the router; handlers never open their own connections.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn ContentExtractor>,
    pub chat: Arc<dyn ChatModel>,
    pub full_texts: Arc<dyn FullTextStore>,
    pub summaries: Arc<dyn SummaryStore>,
}

impl AppState {
    pub async fn close(&self) {
        self.full_texts.close().await;
        self.summaries.close().await;
    }
}
