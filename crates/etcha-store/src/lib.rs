//! etcha-store: drawing persistence contract and reference store.
//!
//! Defines the [`DrawingStore`] trait the UI saves through, the record
//! shapes that cross it, and an in-memory implementation with
//! forward-only cursor pagination. Backends enforce a hard cap on
//! stored points; callers are expected to pre-simplify longer strokes
//! (see [`etcha_pipeline::simplify`]) rather than rely on the backend
//! truncating.

pub mod memory;

use etcha_pipeline::StrokePoint;
use serde::{Deserialize, Serialize};

pub use memory::MemoryStore;

/// Hard maximum number of points a stored drawing may carry.
///
/// The backing document store limits array fields to 8192 entries;
/// 8000 leaves a safety margin.
pub const MAX_STORED_POINTS: usize = 8000;

/// Opaque identifier of a stored drawing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawingId(String);

impl DrawingId {
    /// Wrap an identifier string. Only store implementations mint new
    /// identifiers; callers treat them as opaque tokens.
    #[must_use]
    pub const fn new(raw: String) -> Self {
        Self(raw)
    }

    /// The identifier as a string slice (e.g. for share URLs).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DrawingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A drawing submitted for storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDrawing {
    /// Display name chosen by the author.
    pub name: String,
    /// Optional social handle for attribution.
    pub twitter_handle: Option<String>,
    /// The full point sequence (live-captured and generated points
    /// concatenated by the caller).
    pub points: Vec<StrokePoint>,
    /// Canvas width the points were drawn against.
    pub canvas_width: u32,
    /// Canvas height the points were drawn against.
    pub canvas_height: u32,
}

/// A drawing as returned from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDrawing {
    /// Identifier assigned at save time.
    pub id: DrawingId,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at_ms: u64,
    /// Display name chosen by the author.
    pub name: String,
    /// Optional social handle for attribution.
    pub twitter_handle: Option<String>,
    /// The stored point sequence.
    pub points: Vec<StrokePoint>,
    /// Canvas width the points were drawn against.
    pub canvas_width: u32,
    /// Canvas height the points were drawn against.
    pub canvas_height: u32,
}

/// Options for a single page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationOptions {
    /// Maximum number of drawings to return.
    pub num_items: usize,
    /// Cursor from the previous page's `continue_cursor`, or `None`
    /// for the first page. Forward-only.
    pub cursor: Option<String>,
}

/// One page of a newest-first listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// The drawings on this page, newest first.
    pub items: Vec<StoredDrawing>,
    /// `true` when no older drawings remain.
    pub is_done: bool,
    /// Cursor to pass as [`PaginationOptions::cursor`] for the next
    /// page.
    pub continue_cursor: String,
}

/// Errors surfaced by a drawing store.
///
/// Store failures are non-fatal to the caller: the in-memory stroke is
/// retained and the save may be retried.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The submission exceeds the stored-point cap. Callers must
    /// pre-simplify instead of expecting truncation.
    #[error("drawing has {count} points, exceeding the maximum of {max}")]
    TooManyPoints {
        /// Points in the rejected submission.
        count: usize,
        /// The configured cap.
        max: usize,
    },

    /// The submission contains no points.
    #[error("drawing has no points")]
    EmptyDrawing,

    /// The pagination cursor was not minted by this store.
    #[error("invalid pagination cursor: {0}")]
    InvalidCursor(String),
}

/// Persistence contract for drawings.
///
/// `get` returns `None` for unknown identifiers (a not-found signal,
/// not an error). Listing is ordered newest-first and paginates with a
/// forward-only cursor that remains stable while new drawings are
/// saved.
pub trait DrawingStore {
    /// Persist a drawing and return its new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyDrawing`] for an empty point set and
    /// [`StoreError::TooManyPoints`] when the submission exceeds
    /// [`MAX_STORED_POINTS`].
    fn save(&mut self, drawing: NewDrawing) -> Result<DrawingId, StoreError>;

    /// Fetch a drawing by identifier, or `None` if it does not exist.
    fn get(&self, id: &DrawingId) -> Option<StoredDrawing>;

    /// List drawings newest-first, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCursor`] if the cursor was not
    /// produced by a previous page of this store.
    fn list(&self, options: &PaginationOptions) -> Result<Page, StoreError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn drawing_id_displays_raw_value() {
        let id = DrawingId::new("d42".to_string());
        assert_eq!(id.to_string(), "d42");
        assert_eq!(id.as_str(), "d42");
    }

    #[test]
    fn too_many_points_display() {
        let err = StoreError::TooManyPoints {
            count: 10_000,
            max: MAX_STORED_POINTS,
        };
        assert_eq!(
            err.to_string(),
            "drawing has 10000 points, exceeding the maximum of 8000",
        );
    }

    #[test]
    fn new_drawing_serde_round_trip() {
        let drawing = NewDrawing {
            name: "spiral".to_string(),
            twitter_handle: Some("@artist".to_string()),
            points: vec![StrokePoint::new(1.0, 2.0, 100)],
            canvas_width: 600,
            canvas_height: 400,
        };
        let json = serde_json::to_string(&drawing).unwrap();
        let back: NewDrawing = serde_json::from_str(&json).unwrap();
        assert_eq!(drawing, back);
    }

    #[test]
    fn pagination_options_serde_round_trip() {
        let options = PaginationOptions {
            num_items: 12,
            cursor: Some("8".to_string()),
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: PaginationOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }
}
