//! Extract → summarize → (optionally) translate.
//!
//! Translation is a second, separate round trip to the chat model over the
//! English summary. It doubles latency and cost for Urdu requests.

use crate::{ArticleSummary, ChatModel, ContentExtractor, Language, SummarizerResult};

pub fn summarize_prompt(full_text: &str) -> String {
    format!("Summarize the following blog content:\n\n{full_text}")
}

pub fn translate_prompt(summary: &str) -> String {
    format!("Translate the following summary to Urdu:\n\n{summary}")
}

/// Asks the model for a summary of `full_text` in `language`.
pub async fn summarize_text(
    chat: &dyn ChatModel,
    full_text: &str,
    language: Language,
) -> SummarizerResult<String> {
    let english = chat.complete(&summarize_prompt(full_text)).await?;

    match language {
        Language::English => Ok(english),
        Language::Urdu => chat.complete(&translate_prompt(&english)).await,
    }
}

pub async fn summarize_article(
    extractor: &dyn ContentExtractor,
    chat: &dyn ChatModel,
    url: &str,
    language: Language,
) -> SummarizerResult<ArticleSummary> {
    let full_text = extractor.extract(url).await?;
    tracing::info!(%url, chars = full_text.len(), "article text extracted");

    let summary = summarize_text(chat, &full_text, language).await?;
    tracing::info!(%url, %language, "summary generated");

    Ok(ArticleSummary {
        url: url.to_string(),
        full_text,
        summary,
        language,
    })
}
