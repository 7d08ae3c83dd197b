use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use blog_summarizer::{pipeline, Language};

use crate::error::{AppError, ProcessError};
use crate::models::payloads::{ProcessRequest, ProcessResponse};
use crate::models::records::{FullTextRecord, SummaryRecord};
use crate::state::AppState;

/// POST /api/process
pub async fn process(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable process request");
            return Err(AppError::MissingInput("Missing URL or language"));
        }
    };
    let url = payload.url.filter(|u| !u.is_empty());
    let lang = payload.lang.filter(|l| !l.is_empty());
    let (Some(url), Some(lang)) = (url, lang) else {
        return Err(AppError::MissingInput("Missing URL or language"));
    };
    let language = Language::parse(&lang);

    match run(&state, &url, language).await {
        Ok(summary) => Ok(Json(ProcessResponse { summary })),
        Err(e) => {
            tracing::error!(%url, %language, error = %e, "processing failed");
            Err(AppError::ProcessingFailed(e))
        }
    }
}

async fn run(state: &AppState, url: &str, language: Language) -> Result<String, ProcessError> {
    let article = pipeline::summarize_article(
        state.extractor.as_ref(),
        state.chat.as_ref(),
        url,
        language,
    )
    .await?;

    // Nothing is rolled back if the second write fails.
    state
        .full_texts
        .insert_full_text(&FullTextRecord {
            url: article.url,
            text: article.full_text,
        })
        .await?;

    state
        .summaries
        .insert_summary(&SummaryRecord::new(article.summary.clone()))
        .await?;

    Ok(article.summary)
}
