//! HTTP handlers for the upload catalog: listing, multipart ingest, the
//! per-item operations, and the form-vocabulary endpoint. Request parsing
//! lives here; validation and storage concerns belong to `CatalogService`.

use crate::{
    constants::{ACCEPTED_FILE_TYPES, CATEGORIES, LANGUAGES, MAX_FILE_SIZE, PROVIDERS, ROLES},
    errors::AppError,
    format::format_file_size,
    models::upload::Upload,
    services::catalog_service::{CatalogService, IngestFile, IngestForm},
};
use axum::{
    Json,
    body::Body,
    extract::{Multipart, Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio_util::io::ReaderStream;

/// Query params accepted by the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListUploadsQuery {
    /// Only the literal string `true` selects archived records.
    pub archived: Option<String>,
    /// Coarse MIME filter: `videos`, `documents`, `lessons`, or `all`.
    pub filter: Option<String>,
}

/// GET `/uploads` — list records matching the archived flag, newest first.
pub async fn list_uploads(
    State(service): State<CatalogService>,
    Query(query): Query<ListUploadsQuery>,
) -> Result<Json<Vec<Upload>>, AppError> {
    let archived = query.archived.as_deref() == Some("true");
    let uploads = service.list(archived, query.filter.as_deref()).await?;
    Ok(Json(uploads))
}

/// POST `/uploads` — ingest a multipart submission.
///
/// Unknown form fields are ignored; field-level validation happens in the
/// service after the whole form has been read.
pub async fn create_upload(
    State(service): State<CatalogService>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut form = IngestForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        AppError::bad_request(format!("Malformed multipart request: {}", err))
    })? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("title") => form.title = Some(field_text(field).await?),
            Some("description") => form.description = Some(field_text(field).await?),
            Some("category") => form.category = Some(field_text(field).await?),
            Some("language") => form.language = Some(field_text(field).await?),
            Some("provider") => form.provider = Some(field_text(field).await?),
            Some("roles") => form.roles = Some(field_text(field).await?),
            Some("file") => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(|err| {
                    AppError::bad_request(format!("Failed to read file field: {}", err))
                })?;
                form.file = Some(IngestFile {
                    original_name,
                    content_type,
                    data,
                });
            }
            _ => {}
        }
    }

    let upload = service.ingest(form).await?;
    Ok((StatusCode::CREATED, Json(upload)))
}

/// POST `/uploads/{id}/archive` — set the archived flag from `{"archived": bool}`.
pub async fn archive_upload(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id)?;
    let archived = body
        .get("archived")
        .and_then(Value::as_bool)
        .ok_or_else(|| AppError::bad_request("Invalid archived value"))?;

    let upload = service.set_archived(id, archived).await?;
    Ok(Json(json!({
        "success": true,
        "archived": upload.archived,
        "message": if archived {
            "Item archived successfully"
        } else {
            "Item unarchived successfully"
        },
    })))
}

/// POST `/uploads/{id}/view` — bump the view counter.
pub async fn view_upload(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id)?;
    let upload = service.increment_view(id).await?;
    Ok(Json(json!({
        "success": true,
        "viewCount": upload.view_count,
    })))
}

/// GET `/uploads/{id}/download` — stream the stored file back.
pub async fn download_upload(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let (upload, file) = service.open_download(id).await?;

    let stream = ReaderStream::new(file);
    let mut response = Response::new(Body::from_stream(stream));
    let headers = response.headers_mut();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&upload.mime_type)
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
    );

    // RFC 5987 encoding keeps non-ASCII original names intact.
    let encoded_name = utf8_percent_encode(&upload.original_name, NON_ALPHANUMERIC);
    let disposition = format!("attachment; filename*=UTF-8''{}", encoded_name);
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );

    headers.insert(
        header::CONTENT_LENGTH,
        HeaderValue::from_str(&upload.file_size.to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("0")),
    );

    Ok(response)
}

/// GET `/uploads/meta` — fixed vocabulary and policy the upload form needs.
pub async fn catalog_meta() -> Json<Value> {
    let languages: Vec<Value> = LANGUAGES
        .iter()
        .map(|(code, name)| json!({ "code": code, "name": name }))
        .collect();

    Json(json!({
        "categories": CATEGORIES,
        "languages": languages,
        "providers": PROVIDERS,
        "roles": ROLES,
        "acceptedFileTypes": ACCEPTED_FILE_TYPES,
        "maxFileSize": MAX_FILE_SIZE,
        "maxFileSizeLabel": format_file_size(MAX_FILE_SIZE),
    }))
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|err| AppError::bad_request(format!("Failed to read form field: {}", err)))
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request("Invalid upload ID"))
}
