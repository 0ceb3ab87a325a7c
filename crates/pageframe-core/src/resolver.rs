//! # Resolver Module
//!
//! Page name in, component plus layout chain out.
//!
//! The resolver holds the frozen registry and the root layout. It has no
//! mutable state, so `resolve` is a pure function of its input.

use crate::compositor::Compositor;
use crate::error::{PageError, Result};
use crate::layout::LayoutChain;
use crate::registry::Registry;
use crate::{ComponentRef, LayoutRef};
use serde::Serialize;

// =============================================================================
// RESOLUTION
// =============================================================================

/// The result of resolving a page: what to mount and how to wrap it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The page's component, exactly as registered.
    pub component: ComponentRef,

    /// Layouts wrapping the component, outermost first.
    pub layout_chain: LayoutChain,
}

impl Resolution {
    /// Fold the layout chain around a rendered page.
    ///
    /// See [`Compositor::nest`].
    pub fn nest<T, F>(&self, page: T, wrap: F) -> T
    where
        F: FnMut(&LayoutRef, T) -> T,
    {
        Compositor::nest(&self.layout_chain, page, wrap)
    }

    /// `Root > ... > component` path for display.
    #[must_use]
    pub fn render_path(&self) -> String {
        Compositor::render_path(&self.layout_chain, self.component.as_str())
    }
}

// =============================================================================
// PAGE RESOLVER
// =============================================================================

/// Resolves page names against a frozen registry.
#[derive(Debug, Clone)]
pub struct PageResolver {
    registry: Registry,
    root_layout: LayoutRef,
}

impl PageResolver {
    /// Create a resolver over a built registry.
    ///
    /// Fails if the root layout reference is blank.
    pub fn new(registry: Registry, root_layout: LayoutRef) -> Result<Self> {
        if root_layout.is_blank() {
            return Err(PageError::InvalidRootLayout);
        }
        Ok(Self {
            registry,
            root_layout,
        })
    }

    /// Resolve a page name to its component and layout chain.
    ///
    /// Returns `PageError::Lookup` if the registry has no such page.
    pub fn resolve(&self, name: &str) -> Result<Resolution> {
        let module = self
            .registry
            .get(name)
            .ok_or_else(|| PageError::lookup(name))?;

        Ok(Resolution {
            component: module.component.clone(),
            layout_chain: Compositor::compose(&self.root_layout, &module.layout),
        })
    }

    /// Whether `name` would resolve.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Names from `expected` that this registry cannot resolve.
    ///
    /// Used to check the build's registry against the server's routing
    /// table. Order follows `expected`; repeats are reported once.
    pub fn missing<'a, I>(&self, expected: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut missing: Vec<String> = Vec::new();
        for name in expected {
            if !self.registry.contains(name) && !missing.iter().any(|m| m == name) {
                missing.push(name.to_string());
            }
        }
        missing
    }

    /// All resolvable page names in deterministic order.
    pub fn page_names(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    /// The fixed outermost layout.
    #[must_use]
    pub fn root_layout(&self) -> &LayoutRef {
        &self.root_layout
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

// =============================================================================
// TESTS
// =============================================================================
