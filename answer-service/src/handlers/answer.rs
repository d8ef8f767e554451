use crate::dtos::{AnswerRequest, AnswerResponse};
use crate::services::{get_answer, metrics::record_answer};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;

/// `POST /answer`: ask the model a question about the supplied document.
///
/// The body is decoded by hand rather than through `Json` so that any
/// content type is accepted and the decoder's message reaches the caller.
/// Invalid UTF-8 is replaced with U+FFFD and anything after the first JSON
/// value is ignored.
pub async fn answer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnswerResponse>, AppError> {
    let request = decode_request(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejecting malformed answer request");
        record_answer("bad_request");
        AppError::BadRequest(e.to_string())
    })?;

    tracing::debug!(
        document_len = request.document.len(),
        question_len = request.question.len(),
        "Answering question"
    );

    let answer = get_answer(
        state.text_provider.as_ref(),
        &request.document,
        &request.question,
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to answer question");
        record_answer(e.outcome());
        AppError::InternalError(e.to_string())
    })?;

    record_answer("ok");
    Ok(Json(AnswerResponse { answer }))
}

/// Read the first JSON value of `body` as an [`AnswerRequest`].
fn decode_request(body: &[u8]) -> Result<AnswerRequest, serde_json::Error> {
    let text = String::from_utf8_lossy(body);
    match serde_json::Deserializer::from_str(&text)
        .into_iter::<AnswerRequest>()
        .next()
    {
        Some(result) => result,
        // Empty or whitespace-only body; let the decoder report the EOF.
        None => serde_json::from_str(&text),
    }
}

/// Fallback for any method other than POST on `/answer`.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
