//! LIMIT and OFFSET editing

use crate::model::QueryModel;

impl QueryModel {
    /// Set or clear the row limit
    pub fn set_limit(&mut self, limit: Option<u64>) {
        self.limit = limit;
    }

    /// Set or clear the row offset
    ///
    /// Stored verbatim; the renderer only emits OFFSET when a limit is also
    /// set.
    pub fn set_offset(&mut self, offset: Option<u64>) {
        self.offset = offset;
    }

    /// Page-based pagination (LIMIT + OFFSET), pages starting at 1
    pub fn set_page(&mut self, per_page: u64, page: u64) {
        self.limit = Some(per_page);
        self.offset = Some(page.saturating_sub(1) * per_page);
    }
}
