use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::tag_suggestion::use_cases::suggest::{
    SuggestTagsParams, SuggestTagsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::{SuggestTagsRequest, SuggestTagsResponse};
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    suggest_use_case: Arc<dyn SuggestTagsUseCase>,
}

impl SuggestionApi {
    pub fn new(suggest_use_case: Arc<dyn SuggestTagsUseCase>) -> Self {
        Self { suggest_use_case }
    }
}

/// Suggestion API
///
/// AI-generated hashtag suggestions for post drafts.
#[OpenApi]
impl SuggestionApi {
    /// Suggest hashtags
    ///
    /// Forwards the draft to the generative-text API and returns up to 5 tags
    /// without the leading `#`. Repeated calls with the same content may
    /// return different tags.
    #[oai(path = "/suggest-tags", method = "post", tag = "ApiTags::Suggestions")]
    async fn suggest_tags(&self, body: Json<SuggestTagsRequest>) -> SuggestTagsApiResponse {
        let params = SuggestTagsParams {
            content: body.0.content.unwrap_or_default(),
        };

        match self.suggest_use_case.execute(params).await {
            Ok(tags) => SuggestTagsApiResponse::Ok(Json(tags.into())),
            Err(err) => match err.into_error_response() {
                (status, json) if status == StatusCode::BAD_REQUEST => {
                    SuggestTagsApiResponse::BadRequest(json)
                }
                (_, json) => SuggestTagsApiResponse::InternalError(json),
            },
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "invalid_request_body")]
pub enum SuggestTagsApiResponse {
    #[oai(status = 200)]
    Ok(Json<SuggestTagsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn invalid_request_body(err: poem::Error) -> SuggestTagsApiResponse {
    tracing::debug!(error = %err, "Rejected unparseable suggest-tags request");
    SuggestTagsApiResponse::BadRequest(Json(ErrorResponse::new(
        "ValidationError",
        "request.invalid_body",
    )))
}
