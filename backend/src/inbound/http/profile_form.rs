//! Request body parsing for profile updates.
//!
//! The endpoint accepts `application/json` and `multipart/form-data`. In a
//! multipart body the `name`, `email` and `picture` text parts mirror the JSON
//! fields; a `picture` part that carries a file name is the uploaded file.

use actix_multipart::{Field, Multipart};
use actix_web::{HttpRequest, http::header, web};
use futures_util::{StreamExt, TryStreamExt};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Error, PictureContentType, PictureUpload, ProfileUpdateRequest, UserId};

use super::validation::{BODY, FieldName, PICTURE, ValidationCode, field_error};

/// Largest JSON body accepted for a profile update.
pub const JSON_BODY_MAX_BYTES: usize = 64 * 1024;
/// Largest multipart text part accepted.
pub const TEXT_PART_MAX_BYTES: usize = 8 * 1024;

/// JSON body of a profile update.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

/// Parsed profile submission, independent of its wire format.
#[derive(Debug, Default)]
pub struct ProfileForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
    pub upload: Option<PictureUpload>,
}

impl ProfileForm {
    /// Attach the target user to build the driving-port request.
    pub fn into_request(self, user_id: UserId) -> ProfileUpdateRequest {
        ProfileUpdateRequest {
            user_id,
            name: self.name,
            email: self.email,
            picture: self.picture,
            upload: self.upload,
        }
    }
}

impl From<ProfileUpdateBody> for ProfileForm {
    fn from(body: ProfileUpdateBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            picture: body.picture,
            upload: None,
        }
    }
}

fn malformed(message: impl Into<String>) -> Error {
    field_error(BODY, ValidationCode::MalformedBody, message)
}

fn too_large(field: FieldName, limit: usize) -> Error {
    field_error(
        field,
        ValidationCode::PayloadTooLarge,
        format!("payload exceeds {limit} bytes"),
    )
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
}

fn is_json_or_absent(req: &HttpRequest) -> bool {
    match req.headers().get(header::CONTENT_TYPE) {
        None => true,
        Some(value) => value.to_str().is_ok_and(|value| {
            let essence = value.split(';').next().unwrap_or_default().trim();
            essence.eq_ignore_ascii_case("application/json")
                || essence.to_ascii_lowercase().ends_with("+json")
        }),
    }
}

/// Read a profile submission from the request body.
///
/// `upload_max_bytes` caps the uploaded picture. Violations, malformed bodies
/// and unsupported content types are `invalid_request` errors.
pub async fn read_profile_form(
    req: &HttpRequest,
    payload: web::Payload,
    upload_max_bytes: usize,
) -> Result<ProfileForm, Error> {
    if is_multipart(req) {
        let multipart = Multipart::new(req.headers(), payload);
        return read_multipart(multipart, upload_max_bytes).await;
    }
    if is_json_or_absent(req) {
        return read_json(payload).await;
    }
    Err(field_error(
        BODY,
        ValidationCode::UnsupportedContentType,
        "content type must be application/json or multipart/form-data",
    ))
}

async fn read_json(mut payload: web::Payload) -> Result<ProfileForm, Error> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| malformed(format!("failed to read body: {err}")))?;
        if body.len() + chunk.len() > JSON_BODY_MAX_BYTES {
            return Err(too_large(BODY, JSON_BODY_MAX_BYTES));
        }
        body.extend_from_slice(&chunk);
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ProfileForm::default());
    }
    let parsed: ProfileUpdateBody = serde_json::from_slice(&body).map_err(|err| {
        debug!(error = %err, "rejected profile JSON body");
        malformed("body must be a JSON object with string fields")
    })?;
    Ok(parsed.into())
}

async fn read_field_bytes(
    field: &mut Field,
    limit: usize,
    name: FieldName,
) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|err| malformed(format!("malformed multipart body: {err}")))?
    {
        if bytes.len() + chunk.len() > limit {
            return Err(too_large(name, limit));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

async fn read_text(field: &mut Field) -> Result<String, Error> {
    let bytes = read_field_bytes(field, TEXT_PART_MAX_BYTES, BODY).await?;
    String::from_utf8(bytes).map_err(|_| malformed("text parts must be UTF-8"))
}

async fn read_upload(field: &mut Field, limit: usize) -> Result<PictureUpload, Error> {
    let content_type = field
        .content_type()
        .and_then(|mime| PictureContentType::from_mime(mime.essence_str()))
        .ok_or_else(|| {
            field_error(
                PICTURE,
                ValidationCode::UnsupportedMediaType,
                "picture must be a PNG, JPEG, GIF or WebP image",
            )
        })?;
    let bytes = read_field_bytes(field, limit, PICTURE).await?;
    Ok(PictureUpload::new(content_type, bytes))
}

fn uploaded_file_name(field: &Field) -> Option<String> {
    field
        .content_disposition()
        .and_then(|disposition| disposition.get_filename())
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

async fn read_multipart(
    mut multipart: Multipart,
    upload_max_bytes: usize,
) -> Result<ProfileForm, Error> {
    let mut form = ProfileForm::default();
    while let Some(mut field) = multipart
        .try_next()
        .await
        .map_err(|err| malformed(format!("malformed multipart body: {err}")))?
    {
        let name = field.name().unwrap_or_default().to_owned();
        match name.as_str() {
            "picture" if uploaded_file_name(&field).is_some() => {
                form.upload = Some(read_upload(&mut field, upload_max_bytes).await?);
            }
            "picture" => form.picture = Some(read_text(&mut field).await?),
            "name" => form.name = Some(read_text(&mut field).await?),
            "email" => form.email = Some(read_text(&mut field).await?),
            other => {
                debug!(part = other, "ignoring unknown multipart part");
                read_field_bytes(&mut field, TEXT_PART_MAX_BYTES, BODY).await?;
            }
        }
    }
    Ok(form)
}
