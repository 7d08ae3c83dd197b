use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::{ContentExtractor, SummarizerError, SummarizerResult};

const USER_AGENT: &str = concat!("blog_summarizer/", env!("CARGO_PKG_VERSION"));

/// Candidate containers for the main article, most specific first.
pub(crate) const ROOT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role='main']",
    ".post-content",
    ".entry-content",
    "body",
];

const BLOCK_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "li", "blockquote", "pre",
];

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_PATTERN: OnceLock<Regex> = OnceLock::new();
static BLOCK_SELECTOR: OnceLock<Selector> = OnceLock::new();
static ROOT_SELECTOR_LIST: OnceLock<Vec<Selector>> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

fn whitespace_pattern() -> &'static Regex {
    WHITESPACE_PATTERN.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn block_selector() -> &'static Selector {
    BLOCK_SELECTOR.get_or_init(|| Selector::parse(&BLOCK_TAGS.join(", ")).unwrap())
}

fn root_selectors() -> &'static [Selector] {
    ROOT_SELECTOR_LIST.get_or_init(|| {
        ROOT_SELECTORS
            .iter()
            .map(|raw| Selector::parse(raw).unwrap())
            .collect()
    })
}

/// Strips every markup tag, collapses whitespace runs into one space and trims.
pub fn normalize_text(html: &str) -> String {
    let stripped = tag_pattern().replace_all(html, "");
    whitespace_pattern()
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Returns the markup of the page's main article, or `None` when no
/// candidate container holds any readable text.
pub fn parse_article(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);

    for selector in root_selectors() {
        let Some(root) = doc.select(selector).next() else {
            continue;
        };

        let content = collect_blocks(root);
        if !normalize_text(&content).is_empty() {
            return Some(content);
        }
    }

    None
}

fn collect_blocks(root: ElementRef<'_>) -> String {
    root.select(block_selector())
        // a <p> inside an <li> or <blockquote> is already part of its parent
        .filter(|el| !has_block_ancestor(el, &root))
        .map(|el| el.inner_html())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only ancestors below `root` count; the root itself may sit inside an `<li>`.
fn has_block_ancestor(el: &ElementRef<'_>, root: &ElementRef<'_>) -> bool {
    el.ancestors()
        .take_while(|a| a.id() != root.id())
        .filter_map(ElementRef::wrap)
        .any(|a| BLOCK_TAGS.contains(&a.value().name()))
}

pub struct ArticleExtractor {
    client: Client,
}

impl ArticleExtractor {
    pub fn new() -> SummarizerResult<Self> {
        Ok(Self {
            client: Client::builder().user_agent(USER_AGENT).build()?,
        })
    }
}

#[async_trait]
impl ContentExtractor for ArticleExtractor {
    async fn extract(&self, url: &str) -> SummarizerResult<String> {
        let url = Url::parse(url)?;

        let res = self.client.get(url.clone()).send().await?;
        if !res.status().is_success() {
            tracing::warn!(%url, status = %res.status(), "article fetch returned error status");
            return Err(SummarizerError::ExtractionFailed(url.to_string()));
        }

        let body = res.text().await?;
        let text = parse_article(&body)
            .map(|content| normalize_text(&content))
            .filter(|text| !text.is_empty())
            .ok_or_else(|| SummarizerError::ExtractionFailed(url.to_string()))?;

        tracing::debug!(%url, chars = text.len(), "article extracted");
        Ok(text)
    }
}
