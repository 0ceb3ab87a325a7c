//! # Registry Module
//!
//! The frozen table of every view module known to the build.
//!
//! Registration happens once, through [`RegistryBuilder`], before the first
//! resolution. After `build()` the registry is read-only for the life of the
//! process. Storage is a `BTreeMap` so iteration order is deterministic.

use crate::error::{PageError, Result};
use crate::layout::LayoutDecl;
use crate::primitives::page_name_defect;
use crate::ComponentRef;
use std::collections::BTreeMap;

// =============================================================================
// VIEW MODULE
// =============================================================================

/// One discovered page: its name, component and layout declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModule {
    /// Slash-delimited logical path, unique across the registry.
    pub name: String,

    /// The page's renderable component.
    pub component: ComponentRef,

    /// Layouts the page declares for itself.
    pub layout: LayoutDecl,
}

impl ViewModule {
    /// Create a view module with no declared layout.
    #[must_use]
    pub fn new(name: impl Into<String>, component: ComponentRef) -> Self {
        Self {
            name: name.into(),
            component,
            layout: LayoutDecl::NoLayout,
        }
    }

    /// Attach a layout declaration.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutDecl) -> Self {
        self.layout = layout;
        self
    }

    /// Check name and layout references.
    fn validate(&self) -> Result<()> {
        if let Some(reason) = page_name_defect(&self.name) {
            return Err(PageError::InvalidPageName {
                name: self.name.clone(),
                reason: reason.to_string(),
            });
        }

        if let Some(position) = self.layout.first_blank() {
            return Err(PageError::malformed_layout(
                &self.name,
                format!("layout reference at position {} is blank", position),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Immutable mapping from page name to view module.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    modules: BTreeMap<String, ViewModule>,
}

impl Registry {
    /// Start a new registration step.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ViewModule> {
        self.modules.get(name)
    }

    /// Whether a page with this exact name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// All page names in deterministic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// All view modules in deterministic order.
    pub fn modules(&self) -> impl Iterator<Item = &ViewModule> {
        self.modules.values()
    }

    /// Number of registered pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no pages are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

// =============================================================================
// REGISTRY BUILDER
// =============================================================================

/// Explicit registration step producing a frozen [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    modules: BTreeMap<String, ViewModule>,
}

impl RegistryBuilder {
    /// Register a view module.
    ///
    /// Fails on a malformed name, a blank layout reference, or a name that
    /// is already registered. A failed registration leaves the builder
    /// unchanged.
    pub fn register(&mut self, module: ViewModule) -> Result<&mut Self> {
        module.validate()?;

        if self.modules.contains_key(&module.name) {
            return Err(PageError::DuplicatePage { name: module.name });
        }

        self.modules.insert(module.name.clone(), module);
        Ok(self)
    }

    /// Register every module, stopping at the first failure.
    pub fn register_all<I>(&mut self, modules: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = ViewModule>,
    {
        for module in modules {
            self.register(module)?;
        }
        Ok(self)
    }

    /// Freeze the registry.
    #[must_use]
    pub fn build(self) -> Registry {
        Registry {
            modules: self.modules,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
