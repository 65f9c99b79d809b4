//! Banner notices shown after form actions

/// Kind of notice to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Action completed
    Success,
    /// Action failed or was rejected
    Error,
}

/// A single banner message; a new notice replaces the previous one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    /// Create a success notice
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    /// Create an error notice
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// Whether this is a success notice
    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}
