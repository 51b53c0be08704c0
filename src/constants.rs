//! Fixed catalog vocabulary and upload policy.
//!
//! These lists drive the upload form; they are advertised through
//! `GET /uploads/meta` but not enforced at the storage layer.

pub const CATEGORIES: [&str; 8] = [
    "Leadership",
    "Managing Complexity",
    "Communication",
    "Problem Solving",
    "Team Building",
    "Innovation",
    "Decision Making",
    "Strategic Thinking",
];

/// (code, display name) pairs for the supported content languages.
pub const LANGUAGES: [(&str, &str); 6] = [
    ("en", "English"),
    ("it", "Italian"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("pt", "Portuguese"),
];

pub const PROVIDERS: [&str; 6] = [
    "Skilla",
    "LinkedIn",
    "Pack",
    "Mentor",
    "Internal",
    "External Partner",
];

pub const ROLES: [&str; 6] = [
    "Mentor/Coach",
    "Mentee/Coachee",
    "Manager",
    "Individual Contributor",
    "Team Lead",
    "Executive",
];

/// MIME types accepted by ingest. Entries beginning with `.` are matched
/// against the filename suffix instead of the resolved MIME type.
pub const ACCEPTED_FILE_TYPES: [&str; 11] = [
    "application/pdf",
    "text/plain",
    "video/mp4",
    "video/webm",
    "video/ogg",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Maximum accepted upload size in bytes (10 MiB).
pub const MAX_FILE_SIZE: i64 = 10 * 1024 * 1024;
