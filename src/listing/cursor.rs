use serde::Serialize;

/// Which way the current page was reached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Position in an ordered result set.
///
/// `value` is an opaque token handed out by the backend. `None` with
/// `Forward` means "start of the set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursor {
    pub value: Option<String>,
    pub direction: Direction,
}

impl PageCursor {
    pub fn start() -> Self {
        Self::default()
    }

    pub fn forward(value: Option<String>) -> Self {
        Self {
            value,
            direction: Direction::Forward,
        }
    }

    pub fn backward(value: Option<String>) -> Self {
        Self {
            value,
            direction: Direction::Backward,
        }
    }

    pub fn is_start(&self) -> bool {
        self.value.is_none() && self.direction == Direction::Forward
    }

    /// The page request this cursor stands for
    pub fn request(&self, size: u32) -> PageRequest {
        match self.direction {
            Direction::Forward => PageRequest::Forward {
                after: self.value.clone(),
                size,
            },
            Direction::Backward => PageRequest::Backward {
                before: self.value.clone(),
                size,
            },
        }
    }
}

/// One page worth of traversal, in exactly one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    Forward { after: Option<String>, size: u32 },
    Backward { before: Option<String>, size: u32 },
}

impl PageRequest {
    pub fn is_forward(&self) -> bool {
        matches!(self, PageRequest::Forward { .. })
    }

    /// Connection arguments. Forward and backward arguments are mutually
    /// exclusive; the unused pair is always sent as null.
    pub fn variables(&self) -> PageVariables {
        match self {
            PageRequest::Forward { after, size } => PageVariables {
                first: Some(*size),
                after: after.clone(),
                last: None,
                before: None,
            },
            PageRequest::Backward { before, size } => PageVariables {
                first: None,
                after: None,
                last: Some(*size),
                before: before.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PageVariables {
    pub first: Option<u32>,
    pub after: Option<String>,
    pub last: Option<u32>,
    pub before: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_variables_leave_backward_unset() {
        let vars = PageCursor::forward(Some("abc123".into()))
            .request(12)
            .variables();
        assert_eq!(vars.first, Some(12));
        assert_eq!(vars.after.as_deref(), Some("abc123"));
        assert_eq!(vars.last, None);
        assert_eq!(vars.before, None);
    }

    #[test]
    fn test_backward_variables_leave_forward_unset() {
        let vars = PageCursor::backward(Some("abc123".into()))
            .request(12)
            .variables();
        assert_eq!(vars.first, None);
        assert_eq!(vars.after, None);
        assert_eq!(vars.last, Some(12));
        assert_eq!(vars.before.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_variables_serialize_unused_pair_as_null() {
        let json = serde_json::to_value(PageCursor::start().request(12).variables()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "first": 12, "after": null, "last": null, "before": null })
        );
    }

    #[test]
    fn test_start_cursor() {
        assert!(PageCursor::start().is_start());
        assert!(!PageCursor::backward(None).is_start());
        assert!(!PageCursor::forward(Some("x".into())).is_start());
    }
}
