//! Pin value routes
//!
//! One route pattern, `/:token/widget/:pin`, dispatching GET and PUT
//! through a shared resolution pipeline: token → profile, segment →
//! pin address, address → widget. Every rejection renders as a bare
//! status code; the cause stays internal.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use pinion_core::{PinAddress, PinionError, PinionResult};
use pinion_state::{ProfileDirectory, Widget};

use crate::codec;

/// Build the pin value router. Mounted prefix-free; the binary nests it
/// wherever the deployment wants (`/app` historically).
pub fn app(directory: Arc<ProfileDirectory>) -> Router {
    Router::new()
        .route("/:token/widget/:pin", get(read_values).put(write_values))
        .with_state(directory)
}

/// Serve a router on an already-bound listener
pub async fn serve(listener: TcpListener, app: Router) -> PinionResult<()> {
    axum::serve(listener, app)
        .await
        .map_err(|e| PinionError::Server(e.to_string()))
}

/// Rejection wrapper carrying the internal error taxonomy to the wire.
///
/// Unknown token, malformed address, and unbound address all render as
/// the same 404; the distinction exists only in the logs.
pub struct ApiError(PinionError);

impl From<PinionError> for ApiError {
    fn from(err: PinionError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PinionError::UnknownToken
            | PinionError::InvalidAddress(_)
            | PinionError::UnboundAddress(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::debug!(error = %self.0, status = status.as_u16(), "request rejected");
        status.into_response()
    }
}

/// GET: current values as a JSON array of strings
async fn read_values(
    State(directory): State<Arc<ProfileDirectory>>,
    Path((token, pin)): Path<(String, String)>,
) -> Result<Json<Vec<String>>, ApiError> {
    let widget = resolve_widget(&directory, &token, &pin)?;
    Ok(Json(widget.values().as_ref().clone()))
}

/// PUT: replace the whole value sequence
async fn write_values(
    State(directory): State<Arc<ProfileDirectory>>,
    Path((token, pin)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let widget = resolve_widget(&directory, &token, &pin)?;
    require_json_content_type(&headers)?;
    let values = codec::decode_values(&body)?;
    widget.replace_values(values);
    Ok(StatusCode::NO_CONTENT)
}

/// Shared resolution pipeline for both verbs
fn resolve_widget(
    directory: &ProfileDirectory,
    token: &str,
    pin: &str,
) -> PinionResult<Arc<Widget>> {
    let profile = directory.resolve(token).ok_or(PinionError::UnknownToken)?;
    let addr = PinAddress::parse(pin)?;
    profile
        .find_widget(addr)
        .ok_or(PinionError::UnboundAddress(addr))
}

fn require_json_content_type(headers: &HeaderMap) -> PinionResult<()> {
    let declared = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .ok_or(PinionError::UnsupportedContentType)?;
    if !codec::is_json_content_type(declared) {
        return Err(PinionError::UnsupportedContentType);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinion_core::Token;
    use pinion_state::DeviceProfile;

    const TOKEN: &str = "4ae3851817194e2596cf1b7103603ef8";

    fn seeded_directory() -> Arc<ProfileDirectory> {
        let widgets = vec![
            Widget::with_values("button", Some("d8".parse().unwrap()), vec!["0".into()]),
            Widget::with_values("switch", Some("d1".parse().unwrap()), vec!["1".into()]),
            Widget::with_values("dimmer", Some("d3".parse().unwrap()), vec!["87".into()]),
            Widget::new("gauge", Some("a14".parse().unwrap())),
            Widget::with_values(
                "lcd",
                Some("a15".parse().unwrap()),
                vec!["1".into(), "2".into()],
            ),
            Widget::new("terminal", None),
        ];
        let profile = DeviceProfile::new(widgets).unwrap();
        Arc::new(ProfileDirectory::from_profiles([(
            Token::new(TOKEN),
            profile,
        )]))
    }

    async fn spawn_app() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = app(seeded_directory());
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn get_values(base: &str, token: &str, pin: &str) -> (u16, Option<Vec<String>>) {
        let response = reqwest::get(format!("{base}/{token}/widget/{pin}"))
            .await
            .unwrap();
        let status = response.status().as_u16();
        if status == 200 {
            (status, Some(response.json().await.unwrap()))
        } else {
            (status, None)
        }
    }

    async fn put_values(base: &str, token: &str, pin: &str, body: &str) -> u16 {
        reqwest::Client::new()
            .put(format!("{base}/{token}/widget/{pin}"))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .unwrap()
            .status()
            .as_u16()
    }

    #[tokio::test]
    async fn test_get_with_unknown_token() {
        let base = spawn_app().await;
        let (status, _) = get_values(&base, "dsadasddasdasdasdasdasdas", "d8").await;
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn test_get_with_wrong_middle_segment() {
        let base = spawn_app().await;
        let response = reqwest::get(format!("{base}/{TOKEN}/w/d8")).await.unwrap();
        assert_eq!(response.status().as_u16(), 404);
    }

    #[tokio::test]
    async fn test_get_with_malformed_pin() {
        let base = spawn_app().await;
        assert_eq!(get_values(&base, TOKEN, "x8").await.0, 404);
        assert_eq!(get_values(&base, TOKEN, "d").await.0, 404);
        assert_eq!(get_values(&base, TOKEN, "d08").await.0, 404);
        assert_eq!(get_values(&base, TOKEN, "d8x").await.0, 404);
    }

    #[tokio::test]
    async fn test_get_with_unbound_pin() {
        let base = spawn_app().await;
        let (status, _) = get_values(&base, TOKEN, "v10").await;
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn test_get_seeded_values() {
        let base = spawn_app().await;

        let (status, values) = get_values(&base, TOKEN, "d8").await;
        assert_eq!(status, 200);
        assert_eq!(values.unwrap(), vec!["0"]);

        let (_, values) = get_values(&base, TOKEN, "d1").await;
        assert_eq!(values.unwrap(), vec!["1"]);

        let (_, values) = get_values(&base, TOKEN, "d3").await;
        assert_eq!(values.unwrap(), vec!["87"]);
    }

    #[tokio::test]
    async fn test_get_never_written_pin_is_empty_array() {
        let base = spawn_app().await;
        let (status, values) = get_values(&base, TOKEN, "a14").await;
        assert_eq!(status, 200);
        assert!(values.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_multi_value_pin_preserves_order() {
        let base = spawn_app().await;
        let (status, values) = get_values(&base, TOKEN, "a15").await;
        assert_eq!(status, 200);
        assert_eq!(values.unwrap(), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_get_accepts_upper_case_pin_letter() {
        let base = spawn_app().await;
        let (status, values) = get_values(&base, TOKEN, "D8").await;
        assert_eq!(status, 200);
        assert_eq!(values.unwrap(), vec!["0"]);
    }

    #[tokio::test]
    async fn test_put_without_content_type() {
        let base = spawn_app().await;
        let status = reqwest::Client::new()
            .put(format!("{base}/{TOKEN}/widget/d8"))
            .send()
            .await
            .unwrap()
            .status()
            .as_u16();
        assert_eq!(status, 500);

        // Prior values survive the rejected write.
        let (_, values) = get_values(&base, TOKEN, "d8").await;
        assert_eq!(values.unwrap(), vec!["0"]);
    }

    #[tokio::test]
    async fn test_put_with_non_json_content_type() {
        let base = spawn_app().await;
        let status = reqwest::Client::new()
            .put(format!("{base}/{TOKEN}/widget/d8"))
            .header("Content-Type", "text/plain")
            .body("[\"100\"]")
            .send()
            .await
            .unwrap()
            .status()
            .as_u16();
        assert_eq!(status, 500);
    }

    #[tokio::test]
    async fn test_put_with_unknown_token() {
        let base = spawn_app().await;
        let status = put_values(&base, "dsadasddasdasdasdasdasdas", "d8", "[\"1\"]").await;
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn test_put_with_malformed_pin() {
        let base = spawn_app().await;
        assert_eq!(put_values(&base, TOKEN, "x8", "[\"1\"]").await, 404);
    }

    #[tokio::test]
    async fn test_put_with_unbound_pin() {
        let base = spawn_app().await;
        assert_eq!(put_values(&base, TOKEN, "v10", "[\"1\"]").await, 404);
    }

    #[tokio::test]
    async fn test_put_then_get_roundtrip() {
        let base = spawn_app().await;
        assert_eq!(put_values(&base, TOKEN, "a14", "[\"100\"]").await, 204);

        let (status, values) = get_values(&base, TOKEN, "a14").await;
        assert_eq!(status, 200);
        assert_eq!(values.unwrap(), vec!["100"]);
    }

    #[tokio::test]
    async fn test_put_empty_array_clears_values() {
        let base = spawn_app().await;
        assert_eq!(put_values(&base, TOKEN, "a15", "[]").await, 204);

        let (_, values) = get_values(&base, TOKEN, "a15").await;
        assert!(values.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_is_idempotent() {
        let base = spawn_app().await;
        assert_eq!(put_values(&base, TOKEN, "d1", "[\"7\"]").await, 204);
        assert_eq!(put_values(&base, TOKEN, "d1", "[\"7\"]").await, 204);

        let (_, values) = get_values(&base, TOKEN, "d1").await;
        assert_eq!(values.unwrap(), vec!["7"]);
    }

    #[tokio::test]
    async fn test_put_with_undecodable_body() {
        let base = spawn_app().await;
        assert_eq!(put_values(&base, TOKEN, "d3", "{\"pin\":1}").await, 500);
        assert_eq!(put_values(&base, TOKEN, "d3", "[1,2]").await, 500);
        assert_eq!(put_values(&base, TOKEN, "d3", "").await, 500);

        // No partial mutation on any of the failures.
        let (_, values) = get_values(&base, TOKEN, "d3").await;
        assert_eq!(values.unwrap(), vec!["87"]);
    }

    #[tokio::test]
    async fn test_put_content_type_with_charset() {
        let base = spawn_app().await;
        let status = reqwest::Client::new()
            .put(format!("{base}/{TOKEN}/widget/d8"))
            .header("Content-Type", "application/json; charset=utf-8")
            .body("[\"5\"]")
            .send()
            .await
            .unwrap()
            .status()
            .as_u16();
        assert_eq!(status, 204);
    }

    #[tokio::test]
    async fn test_post_is_method_not_allowed() {
        let base = spawn_app().await;
        let status = reqwest::Client::new()
            .post(format!("{base}/{TOKEN}/widget/d8"))
            .header("Content-Type", "application/json")
            .body("[\"1\"]")
            .send()
            .await
            .unwrap()
            .status()
            .as_u16();
        assert_eq!(status, 405);
    }

    #[tokio::test]
    async fn test_concurrent_puts_commit_exactly_one_payload() {
        let base = spawn_app().await;

        let payloads: Vec<String> = (0..8).map(|i| format!("[\"{i}\"]")).collect();
        let handles: Vec<_> = payloads
            .iter()
            .cloned()
            .map(|payload| {
                let base = base.clone();
                tokio::spawn(async move {
                    assert_eq!(put_values(&base, TOKEN, "a14", &payload).await, 204);
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let (_, values) = get_values(&base, TOKEN, "a14").await;
        let finished = values.unwrap();
        assert!((0..8).any(|i| finished == vec![format!("{i}")]));
    }

    #[test]
    fn test_resolution_order_token_before_pin() {
        let directory = seeded_directory();
        // Unknown token wins over a malformed pin segment.
        let err = resolve_widget(&directory, "nope", "x8").unwrap_err();
        assert!(matches!(err, PinionError::UnknownToken));

        let err = resolve_widget(&directory, TOKEN, "x8").unwrap_err();
        assert!(matches!(err, PinionError::InvalidAddress(_)));

        let err = resolve_widget(&directory, TOKEN, "v10").unwrap_err();
        assert!(matches!(err, PinionError::UnboundAddress(_)));
    }
}
