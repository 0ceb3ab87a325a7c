//! # Compositor Module
//!
//! Layout chain assembly for Pageframe.
//!
//! - The root layout is always outermost
//! - Declared layouts follow in declaration order
//! - No reordering, no deduplication
//! - No rendering: wrapping is the host's job, `nest` only folds the order

use crate::layout::{LayoutChain, LayoutDecl};
use crate::LayoutRef;

/// Separator used by [`Compositor::render_path`].
pub const RENDER_PATH_SEPARATOR: &str = " > ";

/// The Compositor turns a page's layout declaration into its layout chain.
///
/// The Compositor:
/// - Prepends the root layout
/// - Extends, never replaces, with the page's own layouts
/// - Does NOT touch the page component
pub struct Compositor;

impl Compositor {
    /// Compose the layout chain for a declaration.
    pub fn compose(root: &LayoutRef, decl: &LayoutDecl) -> LayoutChain {
        match decl {
            LayoutDecl::NoLayout => LayoutChain::root_only(root.clone()),
            LayoutDecl::Single(layout) => LayoutChain::new(root.clone(), vec![layout.clone()]),
            LayoutDecl::Sequence(layouts) => LayoutChain::new(root.clone(), layouts.clone()),
        }
    }

    /// Fold a chain around a page, innermost layout first.
    ///
    /// `wrap` receives each layout with the tree built so far, so
    /// `chain[0]` ends up wrapping `chain[1]` wrapping ... the page.
    pub fn nest<T, F>(chain: &LayoutChain, page: T, mut wrap: F) -> T
    where
        F: FnMut(&LayoutRef, T) -> T,
    {
        chain.iter().rev().fold(page, |inner, layout| wrap(layout, inner))
    }

    /// Human-readable nesting path, e.g. `Root > Admin > pages/Settings`.
    pub fn render_path(chain: &LayoutChain, component: &str) -> String {
        chain
            .iter()
            .map(LayoutRef::as_str)
            .chain(std::iter::once(component))
            .collect::<Vec<_>>()
            .join(RENDER_PATH_SEPARATOR)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> LayoutRef {
        LayoutRef::new("Root")
    }

    #[test]
    fn compose_without_layout_is_root_only() {
        let chain = Compositor::compose(&root(), &LayoutDecl::NoLayout);
        assert_eq!(chain.to_vec(), vec![root()]);
    }

    #[test]
    fn compose_single_layout_nests_inside_root() {
        let chain = Compositor::compose(&root(), &LayoutDecl::single("Admin"));
        assert_eq!(chain.to_vec(), vec![root(), LayoutRef::new("Admin")]);
    }

    #[test]
    fn compose_sequence_preserves_order() {
        let chain = Compositor::compose(&root(), &LayoutDecl::sequence(["Admin", "Billing"]));
        assert_eq!(
            chain.to_vec(),
            vec![root(), LayoutRef::new("Admin"), LayoutRef::new("Billing")]
        );
    }

    #[test]
    fn compose_keeps_repeated_layouts() {
        let chain = Compositor::compose(&root(), &LayoutDecl::sequence(["Card", "Card"]));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn compose_empty_sequence_is_root_only() {
        let chain = Compositor::compose(&root(), &LayoutDecl::Sequence(Vec::new()));
        assert_eq!(chain.to_vec(), vec![root()]);
    }

    #[test]
    fn nest_wraps_outer_to_inner() {
        let chain = Compositor::compose(&root(), &LayoutDecl::sequence(["Admin", "Billing"]));
        let tree = Compositor::nest(&chain, String::from("Page"), |layout, inner| {
            format!("{}({})", layout, inner)
        });
        assert_eq!(tree, "Root(Admin(Billing(Page)))");
    }

    #[test]
    fn render_path_ends_with_component() {
        let chain = Compositor::compose(&root(), &LayoutDecl::single("Admin"));
        assert_eq!(
            Compositor::render_path(&chain, "pages/Settings"),
            "Root > Admin > pages/Settings"
        );
    }
}
