use axum::{
    body::Bytes,
    extract::{Form, FromRequest, Json, Request},
    http::header::CONTENT_TYPE,
};

use crate::data::models::{EntryEnvelope, EntryError, EntryForm, EntryParams};

/// Body of a create/update request, from either JSON or an HTML form.
#[derive(Debug, Default)]
pub struct EntryPayload {
    /// `_method` override carried by HTML forms
    pub method: Option<String>,
    pub params: Option<EntryParams>,
}

impl EntryPayload {
    pub fn require(self) -> Result<EntryParams, EntryError> {
        self.params.ok_or(EntryError::MissingPayload)
    }
}

impl<S> FromRequest<S> for EntryPayload
where
    S: Send + Sync,
{
    type Rejection = EntryError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = match req.headers().get(CONTENT_TYPE) {
            Some(value) => value.to_str().unwrap_or_default().to_ascii_lowercase(),
            None => return Ok(Self::default()),
        };

        if content_type.starts_with("application/json") {
            let body = Bytes::from_request(req, state).await?;
            if body.iter().all(u8::is_ascii_whitespace) {
                return Ok(Self::default());
            }
            let Json(envelope) = Json::<EntryEnvelope>::from_bytes(&body)?;
            Ok(Self {
                method: None,
                params: envelope.entry.filter(|params| !params.is_empty()),
            })
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<EntryForm>::from_request(req, state).await?;
            Ok(Self {
                method: form.method.clone(),
                params: form.params(),
            })
        } else {
            log::warn!("Rejected entry payload with content type {}", content_type);
            Err(EntryError::UnsupportedMediaType)
        }
    }
}
