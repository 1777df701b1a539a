//! Request binding for the gauge name.
//!
//! `UpdateGauge` takes `?name=` from the query; `AddGauge`/`RemoveGauge`
//! take it from the body as JSON, urlencoded form or multipart form. A
//! missing `name` binds as the empty string and is judged by name
//! validation, not here. A request without a content type binds the empty
//! name and its body is ignored.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct GaugeName {
    #[serde(default)]
    pub name: String,
}

/// Body-bound gauge name (binding chosen by content type).
#[derive(Debug)]
pub struct NameBody(pub GaugeName);

enum BodyKind {
    Absent,
    Json,
    Multipart,
    Form,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(ct) = req.headers().get(CONTENT_TYPE) else {
        return BodyKind::Absent;
    };
    let ct = ct.to_str().unwrap_or_default().trim_start();
    if ct.starts_with("application/json") {
        BodyKind::Json
    } else if ct.starts_with("multipart/form-data") {
        BodyKind::Multipart
    } else {
        BodyKind::Form
    }
}

async fn from_multipart<S>(req: Request, state: &S) -> Result<GaugeName, String>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| e.body_text())?;

    let mut out = GaugeName::default();
    while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
        if field.name() == Some("name") {
            out.name = field.text().await.map_err(|e| e.body_text())?;
        }
    }
    Ok(out)
}

#[async_trait]
impl<S> FromRequest<S> for NameBody
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let res = match body_kind(&req) {
            BodyKind::Absent => Ok(GaugeName::default()),
            BodyKind::Json => Json::<GaugeName>::from_request(req, state)
                .await
                .map(|Json(b)| b)
                .map_err(|e| e.body_text()),
            BodyKind::Multipart => from_multipart(req, state).await,
            BodyKind::Form => Form::<GaugeName>::from_request(req, state)
                .await
                .map(|Form(b)| b)
                .map_err(|e| e.body_text()),
        };

        res.map(NameBody).map_err(|msg| {
            tracing::debug!(error = %msg, "gauge name body rejected");
            (StatusCode::BAD_REQUEST, msg)
        })
    }
}
