use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use blog_summarizer::{ChatModel, ContentExtractor, SummarizerError, SummarizerResult};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

use crate::db::{FullTextStore, SummaryStore};
use crate::error::StoreError;
use crate::models::records::{FullTextRecord, SummaryRecord};
use crate::routes::api::app;
use crate::state::AppState;

pub struct StubExtractor {
    text: Option<String>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl ContentExtractor for StubExtractor {
    async fn extract(&self, url: &str) -> SummarizerResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.text
            .clone()
            .ok_or_else(|| SummarizerError::ExtractionFailed(url.to_string()))
    }
}

type Reply = Box<dyn Fn(usize, &str) -> SummarizerResult<String> + Send + Sync>;

/// Records prompts in call order; `reply` gets the 1-based call number.
pub struct StubChat {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl StubChat {
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for StubChat {
    async fn complete(&self, message: &str) -> SummarizerResult<String> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(message.to_string());
            prompts.len()
        };
        (self.reply)(call, message)
    }
}

#[derive(Default)]
pub struct MemoryFullTexts {
    pub records: Mutex<Vec<FullTextRecord>>,
    fail: bool,
}

#[async_trait]
impl FullTextStore for MemoryFullTexts {
    async fn insert_full_text(&self, record: &FullTextRecord) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Rejected("document store unavailable".into()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySummaries {
    pub records: Mutex<Vec<SummaryRecord>>,
    fail: bool,
}

#[async_trait]
impl SummaryStore for MemorySummaries {
    async fn insert_summary(&self, record: &SummaryRecord) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Rejected("500: row store unavailable".into()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub struct Harness {
    pub extractor: Arc<StubExtractor>,
    pub chat: Arc<StubChat>,
    pub full_texts: Arc<MemoryFullTexts>,
    pub summaries: Arc<MemorySummaries>,
}

pub struct HarnessBuilder {
    text: Option<String>,
    reply: Reply,
    full_texts_fail: bool,
    summaries_fail: bool,
}

impl Harness {
    pub fn builder() -> HarnessBuilder {
        HarnessBuilder {
            text: Some("Hello world.".to_string()),
            reply: Box::new(|call: usize, _: &str| Ok(format!("reply {call}"))),
            full_texts_fail: false,
            summaries_fail: false,
        }
    }

    pub fn app(&self) -> Router {
        app(AppState {
            extractor: self.extractor.clone(),
            chat: self.chat.clone(),
            full_texts: self.full_texts.clone(),
            summaries: self.summaries.clone(),
        })
    }

    pub fn extract_calls(&self) -> usize {
        self.extractor.calls.load(Ordering::SeqCst)
    }

    pub fn full_text_records(&self) -> Vec<FullTextRecord> {
        self.full_texts.records.lock().unwrap().clone()
    }

    pub fn summary_records(&self) -> Vec<SummaryRecord> {
        self.summaries.records.lock().unwrap().clone()
    }
}

impl HarnessBuilder {
    pub fn extracted(mut self, text: Option<&str>) -> Self {
        self.text = text.map(str::to_string);
        self
    }

    pub fn reply<F>(mut self, reply: F) -> Self
    where
        F: Fn(usize, &str) -> SummarizerResult<String> + Send + Sync + 'static,
    {
        self.reply = Box::new(reply);
        self
    }

    pub fn failing_full_texts(mut self) -> Self {
        self.full_texts_fail = true;
        self
    }

    pub fn failing_summaries(mut self) -> Self {
        self.summaries_fail = true;
        self
    }

    pub fn build(self) -> Harness {
        Harness {
            extractor: Arc::new(StubExtractor {
                text: self.text,
                calls: AtomicUsize::new(0),
            }),
            chat: Arc::new(StubChat {
                reply: self.reply,
                prompts: Mutex::new(Vec::new()),
            }),
            full_texts: Arc::new(MemoryFullTexts {
                fail: self.full_texts_fail,
                ..Default::default()
            }),
            summaries: Arc::new(MemorySummaries {
                fail: self.summaries_fail,
                ..Default::default()
            }),
        }
    }
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
