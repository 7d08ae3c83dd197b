pub mod ai;
mod error;
pub mod extractor;
pub mod pipeline;
pub mod utils;

#[cfg(test)]
mod tests;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use error::{SummarizerError, SummarizerResult};

/// Target language of the returned summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Urdu,
}

impl Language {
    /// Only the exact value `"urdu"` asks for a translation pass; anything
    /// else keeps the English summary.
    pub fn parse(value: &str) -> Self {
        match value {
            "urdu" => Language::Urdu,
            _ => Language::English,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Urdu => "urdu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArticleSummary {
    pub url: String,
    pub full_text: String,
    pub summary: String,
    pub language: Language,
}

/// Turns a page URL into the plain text of its main article.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> SummarizerResult<String>;
}

/// A hosted chat-completion model answering a single user message.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, message: &str) -> SummarizerResult<String>;
}
