//! Request body extractor accepting JSON or HTML form bodies.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, StatusCode};
use axum::Form;
use serde::de::DeserializeOwned;

/// Body kinds the catalog decodes. Anything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(content_type: Option<&str>) -> BodyKind {
    let Some(content_type) = content_type else {
        return BodyKind::Other;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

/// Typed request body.
///
/// Decodes `application/json` and `application/x-www-form-urlencoded`
/// bodies into `T`. Empty bodies and bodies of any other content type
/// yield `T::default()`, i.e. every field absent.
#[derive(Debug, Clone, Default)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(
            req.headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        );

        match kind {
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;
                Ok(Payload(value))
            }
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| (e.status(), e.body_text()))?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Payload(T::default()));
                }
                serde_json::from_slice(&bytes)
                    .map(Payload)
                    .map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid JSON body: {e}")))
            }
            BodyKind::Other => Ok(Payload(T::default())),
        }
    }
}
