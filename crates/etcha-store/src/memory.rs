//! In-memory reference implementation of the drawing store.
//!
//! Backs the native CLI and tests. Identifiers are minted from a
//! monotonically increasing sequence, which doubles as the pagination
//! cursor: a page's cursor is the sequence number of its last item,
//! and the next page continues strictly below it. That keeps cursors
//! stable when new drawings are saved between page fetches.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    DrawingId, DrawingStore, MAX_STORED_POINTS, NewDrawing, Page, PaginationOptions, StoreError,
    StoredDrawing,
};

/// Milliseconds since the Unix epoch.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// In-memory drawing store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored drawings in save order (oldest first). The paired `u64`
    /// is the mint sequence number backing ids and cursors.
    entries: Vec<(u64, StoredDrawing)>,
    next_seq: u64,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of drawings currently stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DrawingStore for MemoryStore {
    fn save(&mut self, drawing: NewDrawing) -> Result<DrawingId, StoreError> {
        if drawing.points.is_empty() {
            return Err(StoreError::EmptyDrawing);
        }
        if drawing.points.len() > MAX_STORED_POINTS {
            return Err(StoreError::TooManyPoints {
                count: drawing.points.len(),
                max: MAX_STORED_POINTS,
            });
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        let id = DrawingId::new(format!("d{seq}"));

        self.entries.push((
            seq,
            StoredDrawing {
                id: id.clone(),
                created_at_ms: now_ms(),
                name: drawing.name,
                twitter_handle: drawing.twitter_handle,
                points: drawing.points,
                canvas_width: drawing.canvas_width,
                canvas_height: drawing.canvas_height,
            },
        ));

        Ok(id)
    }

    fn get(&self, id: &DrawingId) -> Option<StoredDrawing> {
        self.entries
            .iter()
            .find(|(_, d)| d.id == *id)
            .map(|(_, d)| d.clone())
    }

    fn list(&self, options: &PaginationOptions) -> Result<Page, StoreError> {
        // The cursor is the sequence number of the last item already
        // returned; the next page continues strictly below it.
        let below = match &options.cursor {
            None => u64::MAX,
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| StoreError::InvalidCursor(raw.clone()))?,
        };

        let mut items = Vec::with_capacity(options.num_items);
        let mut last_seq = below;
        for (seq, drawing) in self.entries.iter().rev() {
            if *seq >= below {
                continue;
            }
            if items.len() == options.num_items {
                break;
            }
            items.push(drawing.clone());
            last_seq = *seq;
        }

        let is_done = self
            .entries
            .iter()
            .all(|(seq, _)| *seq >= last_seq.min(below));

        Ok(Page {
            items,
            is_done,
            continue_cursor: last_seq.min(below).to_string(),
        })
    }
}
