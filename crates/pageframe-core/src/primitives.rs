//! # Primitives
//!
//! Opaque handles shared by every Pageframe module.
//!
//! A page name is the logical identifier the server sends on navigation.
//! Component and layout references are handles owned by the build; the
//! core never looks inside them, it only hands them to the mount target.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between segments of a page name (`Admin/Users`).
pub const PAGE_SEGMENT_SEPARATOR: char = '/';

// =============================================================================
// COMPONENT REFERENCE
// =============================================================================

/// Opaque reference to a page's renderable component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    /// Create a component reference from a build handle.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The underlying build handle.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// LAYOUT REFERENCE
// =============================================================================

/// Opaque reference to a layout component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutRef(String);

impl LayoutRef {
    /// Create a layout reference from a build handle.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The underlying build handle.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A layout handle must name something.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for LayoutRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayoutRef {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

// =============================================================================
// PAGE NAME VALIDATION
// =============================================================================

/// Check that a page name is a well-formed slash-delimited path.
///
/// Returns the reason the name is rejected, or `None` if it is valid.
/// Matching is exact and case-sensitive, so no normalisation happens here.
#[must_use]
pub fn page_name_defect(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("page name is empty");
    }
    if name.split(PAGE_SEGMENT_SEPARATOR).any(str::is_empty) {
        return Some("page name has an empty path segment");
    }
    None
}

// =============================================================================
// TESTS
// =============================================================================
