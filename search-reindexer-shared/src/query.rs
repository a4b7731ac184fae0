//! Pagination state for a re-index run.

/// The query being paged through and the current cursor.
///
/// Owned by the driver; `start` moves forward by `rows` after every page,
/// or jumps to the reported total when an end boundary is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Query string sent as `q`.
    pub query: String,
    /// Offset of the first document of the next page.
    pub start: u64,
    /// Page size sent as `rows`.
    pub rows: u64,
}

impl QueryState {
    /// Create a query state starting at `start`.
    pub fn new(query: impl Into<String>, start: u64, rows: u64) -> Self {
        Self {
            query: query.into(),
            start,
            rows,
        }
    }

    /// Move the cursor to the next page.
    pub fn advance(&mut self) {
        self.start = self.start.saturating_add(self.rows);
    }

    /// Move the cursor to `offset`, typically past the end of the result set.
    pub fn jump_to(&mut self, offset: u64) {
        self.start = offset;
    }

    /// Query parameters for a select request, without the output format.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.query.clone()),
            ("start", self.start.to_string()),
            ("rows", self.rows.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_by_rows() {
        let mut state = QueryState::new("*:*", 0, 20);
        state.advance();
        state.advance();
        assert_eq!(state.start, 40);
    }

    #[test]
    fn test_jump_to() {
        let mut state = QueryState::new("*:*", 20, 20);
        state.jump_to(133);
        assert_eq!(state.start, 133);
    }

    #[test]
    fn test_to_params() {
        let state = QueryState::new("title:rust", 40, 10);
        assert_eq!(
            state.to_params(),
            vec![
                ("q", "title:rust".to_string()),
                ("start", "40".to_string()),
                ("rows", "10".to_string()),
            ]
        );
    }
}
