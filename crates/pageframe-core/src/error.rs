//! # Error Module
//!
//! Every failure the core can signal. All of them are local and
//! deterministic: the same input always fails the same way.

use thiserror::Error;

/// Errors from page registration and resolution.
#[derive(Debug, Error)]
pub enum PageError {
    /// The requested page has no view module in the registry.
    #[error("page not found in registry: {name}")]
    Lookup { name: String },

    /// A page's layout declaration is not absent, a single reference, or a
    /// sequence of references.
    #[error("malformed layout declaration for page {page}: {reason}")]
    MalformedLayout { page: String, reason: String },

    /// Two view modules claimed the same page name.
    #[error("page registered twice: {name}")]
    DuplicatePage { name: String },

    /// The manifest lists the same non-page module path twice.
    #[error("module listed twice in manifest: {path}")]
    DuplicateModule { path: String },

    /// The page name is not a well-formed slash-delimited path.
    #[error("invalid page name {name:?}: {reason}")]
    InvalidPageName { name: String, reason: String },

    /// The root layout reference is blank.
    #[error("root layout reference is blank")]
    InvalidRootLayout,

    /// A manifest or page object is not valid JSON or has the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PageError {
    /// Create a lookup error for a missing page.
    #[must_use]
    pub fn lookup(name: impl Into<String>) -> Self {
        Self::Lookup { name: name.into() }
    }

    /// Create a malformed-layout error.
    #[must_use]
    pub fn malformed_layout(page: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLayout {
            page: page.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the page simply does not exist.
    ///
    /// Hosts typically render a not-found view for these and treat the
    /// rest as build defects.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Lookup { .. })
    }
}

/// Result type alias for Pageframe core operations.
pub type Result<T> = std::result::Result<T, PageError>;
