//! Mood - A selectable mood with its palette color

use serde::{Deserialize, Serialize};

/// Mood - One entry of the seeded mood palette
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mood {
    pub id: uuid::Uuid,
    /// Lower-case lookup key ("calm", "focus", ...)
    pub key: String,
    /// Display label
    pub label: String,
    /// Palette color (hex)
    pub color: String,
    /// Optional playlist association for the focus music player
    pub playlist_id: Option<String>,
    /// Display ordering in the mood picker
    pub sort_order: i32,
}
