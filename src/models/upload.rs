//! Represents one cataloged asset: a stored file plus its metadata row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

/// A single row of the `uploads` table.
///
/// Maps 1:1 to the database schema via `sqlx::FromRow` and serializes with
/// camelCase keys on the wire (`fileName`, `viewCount`, ...).
#[derive(Serialize, Deserialize, Clone, FromRow, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Upload {
    /// Auto-assigned primary key.
    pub id: i64,

    pub title: String,

    pub description: String,

    /// Catalog category label (e.g. "Leadership").
    pub category: String,

    /// Language code of the content (e.g. "en").
    pub language: String,

    /// Content provider label (e.g. "Internal").
    pub provider: String,

    /// Ordered list of audience roles, stored as a JSON text column.
    pub roles: Json<Vec<String>>,

    /// Server-generated unique filename, the on-disk key.
    pub file_name: String,

    /// Original filename as submitted, preserved for download.
    pub original_name: String,

    /// Resolved MIME type; `application/octet-stream` when nothing better
    /// could be determined.
    pub mime_type: String,

    /// Exact payload size in bytes.
    pub file_size: i64,

    /// Path of the stored file inside the storage directory.
    pub file_path: String,

    /// Number of times the item was viewed. Only ever incremented.
    pub view_count: i64,

    /// Soft-hide flag; archived items are excluded from the default listing.
    pub archived: bool,

    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation (archive toggle, view increment).
    pub updated_at: DateTime<Utc>,
}
