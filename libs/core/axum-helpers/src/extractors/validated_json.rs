use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that must pass [`Validate`] before the handler sees it.
///
/// Malformed JSON is rejected as `JSON_EXTRACTION`; a body that parses but
/// fails validation is rejected as `400 VALIDATION_ERROR` with per-field
/// details.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(required, length(min = 1))]
        name: Option<String>,
    }

    async fn accept(ValidatedJson(payload): ValidatedJson<Payload>) -> String {
        payload.name.unwrap_or_default()
    }

    async fn send(body: &'static str) -> StatusCode {
        Router::new()
            .route("/", post(accept))
            .oneshot(
                Request::post("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_valid_body_is_accepted() {
        assert_eq!(send(r#"{"name":"Desk"}"#).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_field_fails_validation() {
        assert_eq!(send("{}").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_field_fails_validation() {
        assert_eq!(send(r#"{"name":""}"#).await, StatusCode::BAD_REQUEST);
    }
}
