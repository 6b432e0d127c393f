#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use axum::{
    Form,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::pages;
use crate::{readability, validation};

/// Body of a `POST /results` request.
#[derive(Debug, Default, Deserialize)]
pub struct ReadabilityForm {
    /// Text to grade. Missing fields deserialize as empty and fail validation.
    #[serde(default)]
    pub textreadability: String,
}

/// `GET /`: the empty input form.
pub async fn index() -> Html<String> {
    Html(pages::form("", &[]))
}

/// `POST /results`: validates and grades the submitted text.
///
/// An invalid submission re-renders the form with its messages. A valid one
/// renders the text with its grade level, or with the too-short message when
/// it has fewer than the minimum number of words.
pub async fn results(Form(form): Form<ReadabilityForm>) -> Response {
    let text = form.textreadability;

    if let Err(e) = validation::validate_form(&text) {
        tracing::debug!("Rejected submission: {e}");
        return Html(pages::form(&text, &[e])).into_response();
    }

    match readability::assess(&text) {
        Ok(assessment) => {
            match assessment.grade() {
                Some(grade) => tracing::info!(
                    words = grade.stats().words(),
                    sentences = grade.stats().sentences(),
                    syllables = grade.stats().syllables(),
                    "Graded text at {grade}"
                ),
                None => tracing::info!("Text too short to grade"),
            }
            Html(pages::results(&text, &assessment)).into_response()
        }
        Err(e) => {
            tracing::warn!("Could not grade submission: {e}");
            (StatusCode::UNPROCESSABLE_ENTITY, Html(pages::form(&text, &[]))).into_response()
        }
    }
}

/// Fallback for every other route.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
