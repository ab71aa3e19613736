/// Free-text search state for a listing page.
///
/// `raw_term` follows every keystroke; `debounced_term` only moves when a
/// debounce ticket is committed, or when the input is flushed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw_term: String,
    debounced_term: String,
    generation: u64,
}

/// Identifies the keystroke a scheduled commit was issued for.
/// Only the ticket from the latest keystroke can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTicket(u64);

impl SearchQuery {
    pub fn raw_term(&self) -> &str {
        &self.raw_term
    }

    pub fn debounced_term(&self) -> &str {
        &self.debounced_term
    }

    pub fn is_active(&self) -> bool {
        !self.debounced_term.trim().is_empty()
    }

    /// Record a keystroke. Any ticket handed out earlier becomes stale.
    pub fn set_raw(&mut self, text: String) -> InputTicket {
        self.raw_term = text;
        self.generation += 1;
        InputTicket(self.generation)
    }

    pub fn is_current(&self, ticket: InputTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Commit `raw_term` if `ticket` is still the latest keystroke.
    /// Returns true when `debounced_term` changed.
    pub fn commit(&mut self, ticket: InputTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.flush()
    }

    /// Commit `raw_term` right away and invalidate any outstanding ticket.
    /// Returns true when `debounced_term` changed.
    pub fn flush(&mut self) -> bool {
        self.generation += 1;
        if self.debounced_term == self.raw_term {
            return false;
        }
        self.debounced_term = self.raw_term.clone();
        true
    }

    pub fn clear(&mut self) {
        self.raw_term.clear();
        self.debounced_term.clear();
        self.generation += 1;
    }
}

/// Case-insensitive substring pattern for an `ilike` filter. LIKE
/// metacharacters in the term are escaped so they match literally.
pub fn ilike_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_commits() {
        let mut query = SearchQuery::default();
        let first = query.set_raw("l".into());
        let second = query.set_raw("lu".into());

        assert!(!query.commit(first));
        assert_eq!(query.debounced_term(), "");

        assert!(query.commit(second));
        assert_eq!(query.debounced_term(), "lu");
        assert!(query.is_active());
    }

    #[test]
    fn test_ticket_is_spent_after_commit() {
        let mut query = SearchQuery::default();
        let ticket = query.set_raw("luna".into());
        assert!(query.commit(ticket));
        assert!(!query.is_current(ticket));
        assert!(!query.commit(ticket));
    }

    #[test]
    fn test_whitespace_term_is_not_active() {
        let mut query = SearchQuery::default();
        let ticket = query.set_raw("   ".into());
        assert!(query.commit(ticket));
        assert_eq!(query.debounced_term(), "   ");
        assert!(!query.is_active());
    }

    #[test]
    fn test_flush_invalidates_pending_ticket() {
        let mut query = SearchQuery::default();
        let ticket = query.set_raw("echo".into());
        assert!(query.flush());
        assert!(!query.is_current(ticket));
        assert!(!query.flush());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut query = SearchQuery::default();
        let ticket = query.set_raw("velvet".into());
        query.commit(ticket);
        let pending = query.set_raw("velvet s".into());

        query.clear();
        assert_eq!(query.raw_term(), "");
        assert_eq!(query.debounced_term(), "");
        assert!(!query.is_active());
        assert!(!query.commit(pending));
    }

    #[test]
    fn test_ilike_pattern_escapes_wildcards() {
        assert_eq!(ilike_pattern("luna"), "%luna%");
        assert_eq!(ilike_pattern("100%"), "%100\\%%");
        assert_eq!(ilike_pattern("a_b"), "%a\\_b%");
        assert_eq!(ilike_pattern("back\\slash"), "%back\\\\slash%");
    }
}
