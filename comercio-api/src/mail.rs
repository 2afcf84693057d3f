use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/send-email/", post(send_email))
}

/// Accepts a multipart form with an `email` text field and a `pdf` file
/// field, and mails the file as an attachment to the given address.
async fn send_email(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut email: Option<String> = None;
    let mut pdf: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("email") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                email = Some(value);
            }
            Some("pdf") => {
                let filename = field
                    .file_name()
                    .unwrap_or("attachment.pdf")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                pdf = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let email = email.ok_or_else(|| AppError::BadRequest("missing `email` field".to_string()))?;
    let (filename, bytes) =
        pdf.ok_or_else(|| AppError::BadRequest("missing `pdf` field".to_string()))?;

    state
        .mailer
        .send_pdf(&email, &filename, bytes)
        .await
        .map_err(AppError::Mail)?;

    info!(recipient = %email, "Sent PDF mail");
    Ok(Json(json!({ "message": "Correo enviado correctamente." })))
}
