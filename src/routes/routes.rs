//! Defines routes for the upload catalog.
//!
//! ## Structure
//! - **Catalog endpoints**
//!   - `GET  /uploads` — list records (supports archived, filter)
//!   - `POST /uploads` — ingest a multipart submission
//!   - `GET  /uploads/meta` — form vocabulary and upload policy
//!
//! - **Item endpoints**
//!   - `POST /uploads/{id}/archive` — toggle the archived flag
//!   - `POST /uploads/{id}/view` — increment the view counter
//!   - `GET  /uploads/{id}/download` — fetch the stored file bytes

use crate::{
    constants::MAX_FILE_SIZE,
    handlers::{
        health_handlers::{healthz, readyz},
        upload_handlers::{
            archive_upload, catalog_meta, create_upload, download_upload, list_uploads,
            view_upload,
        },
    },
    services::catalog_service::CatalogService,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// Build and return the router for all catalog routes.
///
/// The router carries shared state (`CatalogService`) to all handlers.
pub fn routes() -> Router<CatalogService> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // catalog routes
        .route("/uploads", get(list_uploads).post(create_upload))
        .route("/uploads/meta", get(catalog_meta))
        // item routes
        .route("/uploads/{id}/archive", post(archive_upload))
        .route("/uploads/{id}/view", post(view_upload))
        .route("/uploads/{id}/download", get(download_upload))
        // Oversized files must reach validation so the client gets the
        // 10MB message instead of a bare 413; the extra headroom covers
        // multipart framing and the metadata fields.
        .layer(DefaultBodyLimit::max(2 * MAX_FILE_SIZE as usize))
}
