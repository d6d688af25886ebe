use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::tag_suggestion::errors::TagSuggestionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for TagSuggestionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            TagSuggestionError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "tag_suggestion.content_required",
            ),
            TagSuggestionError::UpstreamUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UpstreamError",
                "tag_suggestion.upstream_unavailable",
            ),
            TagSuggestionError::UpstreamMalformed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UpstreamError",
                "tag_suggestion.upstream_malformed",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
