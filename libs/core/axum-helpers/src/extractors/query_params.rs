use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Query string deserialized into `T`.
///
/// Unparseable parameters are rejected as `400 BAD_REQUEST` in the
/// standard error envelope.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        Ok(QueryParams(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Paging {
        page: Option<i64>,
    }

    async fn page(QueryParams(paging): QueryParams<Paging>) -> String {
        paging.page.unwrap_or(1).to_string()
    }

    async fn get_uri(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = Router::new()
            .route("/", get(page))
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_numeric_page_is_accepted() {
        let (status, body) = get_uri("/?page=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"3");
    }

    #[tokio::test]
    async fn test_absent_page_is_accepted() {
        let (status, body) = get_uri("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"1");
    }

    #[tokio::test]
    async fn test_unparseable_page_uses_error_envelope() {
        let (status, body) = get_uri("/?page=two").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "BAD_REQUEST");
        assert_eq!(json["code"], 1006);
        assert!(json["message"].as_str().unwrap().contains("page"));
    }
}
