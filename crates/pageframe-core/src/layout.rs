//! # Layout Module
//!
//! Layout declarations made by view modules, and the chain of layouts a
//! resolved page is wrapped in.

use crate::LayoutRef;
use serde::ser::{Serialize, SerializeSeq, Serializer};

// =============================================================================
// LAYOUT DECLARATION
// =============================================================================

/// What a view module says about its own layouts.
///
/// The root layout is never part of a declaration; it is prepended by the
/// compositor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LayoutDecl {
    /// The page declares no layout of its own.
    #[default]
    NoLayout,
    /// A single layout, nested directly inside the root layout.
    Single(LayoutRef),
    /// An ordered list of layouts, outermost first.
    Sequence(Vec<LayoutRef>),
}

impl LayoutDecl {
    /// Declare a single layout.
    #[must_use]
    pub fn single(layout: impl Into<LayoutRef>) -> Self {
        Self::Single(layout.into())
    }

    /// Declare an ordered sequence of layouts.
    #[must_use]
    pub fn sequence<I, L>(layouts: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<LayoutRef>,
    {
        Self::Sequence(layouts.into_iter().map(Into::into).collect())
    }

    /// Declared layouts in order, excluding the root.
    #[must_use]
    pub fn layouts(&self) -> &[LayoutRef] {
        match self {
            Self::NoLayout => &[],
            Self::Single(layout) => std::slice::from_ref(layout),
            Self::Sequence(layouts) => layouts,
        }
    }

    /// First blank reference in the declaration, by position.
    pub(crate) fn first_blank(&self) -> Option<usize> {
        self.layouts().iter().position(LayoutRef::is_blank)
    }
}

// =============================================================================
// LAYOUT CHAIN
// =============================================================================

/// The layouts wrapping a resolved page, outermost first.
///
/// Never empty: the root layout is stored separately from the nested
/// layouts so that a chain without it cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutChain {
    root: LayoutRef,
    nested: Vec<LayoutRef>,
}

impl LayoutChain {
    /// A chain holding only the root layout.
    #[must_use]
    pub fn root_only(root: LayoutRef) -> Self {
        Self {
            root,
            nested: Vec::new(),
        }
    }

    /// A chain with the root layout followed by `nested`, in order.
    #[must_use]
    pub fn new(root: LayoutRef, nested: Vec<LayoutRef>) -> Self {
        Self { root, nested }
    }

    /// The outermost layout.
    #[must_use]
    pub fn root(&self) -> &LayoutRef {
        &self.root
    }

    /// Layouts inside the root, outermost first.
    #[must_use]
    pub fn nested(&self) -> &[LayoutRef] {
        &self.nested
    }

    /// The innermost layout, which wraps the page component directly.
    #[must_use]
    pub fn innermost(&self) -> &LayoutRef {
        self.nested.last().unwrap_or(&self.root)
    }

    /// All layouts, outermost first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LayoutRef> {
        std::iter::once(&self.root).chain(self.nested.iter())
    }

    /// Number of layouts in the chain. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nested.len().saturating_add(1)
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Copy the chain into a flat vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<LayoutRef> {
        self.iter().cloned().collect()
    }
}

impl Serialize for LayoutChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for layout in self.iter() {
            seq.serialize_element(layout)?;
        }
        seq.end()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_layouts_exclude_root() {
        assert!(LayoutDecl::NoLayout.layouts().is_empty());
        assert_eq!(LayoutDecl::single("Admin").layouts(), &[LayoutRef::new("Admin")]);
        assert_eq!(
            LayoutDecl::sequence(["Admin", "Billing"]).layouts(),
            &[LayoutRef::new("Admin"), LayoutRef::new("Billing")]
        );
    }

    #[test]
    fn first_blank_reports_position() {
        let decl = LayoutDecl::sequence(["Admin", "", "Billing"]);
        assert_eq!(decl.first_blank(), Some(1));
        assert_eq!(LayoutDecl::single("Admin").first_blank(), None);
    }

    #[test]
    fn chain_starts_with_root() {
        let chain = LayoutChain::new(
            LayoutRef::new("Root"),
            vec![LayoutRef::new("Admin"), LayoutRef::new("Billing")],
        );

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.root(), &LayoutRef::new("Root"));
        assert_eq!(chain.innermost(), &LayoutRef::new("Billing"));
        assert_eq!(
            chain.to_vec(),
            vec![
                LayoutRef::new("Root"),
                LayoutRef::new("Admin"),
                LayoutRef::new("Billing"),
            ]
        );
    }

    #[test]
    fn root_only_chain_is_its_own_innermost() {
        let chain = LayoutChain::root_only(LayoutRef::new("Root"));
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        assert_eq!(chain.innermost(), chain.root());
    }

    #[test]
    fn chain_serializes_flat() {
        let chain = LayoutChain::new(LayoutRef::new("Root"), vec![LayoutRef::new("Admin")]);
        let json = serde_json::to_string(&chain).ok();
        assert_eq!(json.as_deref(), Some(r#"["Root","Admin"]"#));
    }
}
