//! # Discovery Module
//!
//! Maps build module paths to page names.
//!
//! The build lists every view module it found (`./pages/Index.svelte`,
//! `./layouts/Layout.svelte`, ...). Only modules under the pages prefix with
//! the view extension are pages; the page name is the path between the two,
//! so `./pages/Admin/Users.svelte` becomes `Admin/Users`.

use serde::{Deserialize, Serialize};

/// Default directory prefix for page modules.
pub const DEFAULT_PAGES_PREFIX: &str = "./pages/";

/// Default file extension for view modules.
pub const DEFAULT_VIEW_EXTENSION: &str = ".svelte";

/// Default root layout module.
pub const DEFAULT_ROOT_LAYOUT: &str = "./layouts/Layout.svelte";

/// Rules for turning a module path into a page name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryRules {
    /// Prefix every page module path starts with.
    pub pages_prefix: String,

    /// Extension every view module path ends with.
    pub extension: String,
}

impl Default for DiscoveryRules {
    fn default() -> Self {
        Self {
            pages_prefix: DEFAULT_PAGES_PREFIX.to_string(),
            extension: DEFAULT_VIEW_EXTENSION.to_string(),
        }
    }
}

impl DiscoveryRules {
    /// Rules with a custom prefix and extension.
    #[must_use]
    pub fn new(pages_prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            pages_prefix: pages_prefix.into(),
            extension: extension.into(),
        }
    }

    /// Page name for a module path, or `None` if the module is not a page.
    ///
    /// The returned name is not validated; registration does that.
    #[must_use]
    pub fn page_name<'a>(&self, module_path: &'a str) -> Option<&'a str> {
        module_path
            .strip_prefix(self.pages_prefix.as_str())?
            .strip_suffix(self.extension.as_str())
    }

    /// Module path a page name would be discovered at.
    #[must_use]
    pub fn module_path(&self, page_name: &str) -> String {
        format!("{}{}{}", self.pages_prefix, page_name, self.extension)
    }
}

// =============================================================================
// TESTS
// =============================================================================
