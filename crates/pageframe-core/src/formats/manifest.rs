//! Discovery manifest: the build's list of view modules.
//!
//! ```json
//! {
//!   "root_layout": "./layouts/Layout.svelte",
//!   "modules": {
//!     "./pages/Index.svelte":   { "component": "pages/Index" },
//!     "./pages/Billing.svelte": { "layout": ["Admin", "Billing"] }
//!   }
//! }
//! ```
//!
//! `layout` is kept as raw JSON until registration so that a bad shape is
//! reported as a malformed layout for the page that declared it, not as a
//! generic parse failure. `modules` keeps repeated keys in document order so
//! that a module listed twice is rejected instead of overwritten.

use crate::discovery::{DiscoveryRules, DEFAULT_ROOT_LAYOUT};
use crate::error::{PageError, Result};
use crate::layout::LayoutDecl;
use crate::registry::{Registry, ViewModule};
use crate::resolver::PageResolver;
use crate::{ComponentRef, LayoutRef};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// MANIFEST TYPES
// =============================================================================

/// One entry of the manifest, keyed by module path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestModule {
    /// Component handle. Defaults to the module path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRef>,

    /// Raw layout declaration: absent, null, a string or a list of strings.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub layout: Value,
}

/// Manifest entries in document order, repeats included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleEntries(Vec<(String, ManifestModule)>);

impl ModuleEntries {
    /// Append an entry.
    pub fn push(&mut self, path: impl Into<String>, module: ManifestModule) {
        self.0.push((path.into(), module));
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ManifestModule)> {
        self.0.iter().map(|(path, module)| (path.as_str(), module))
    }

    /// Number of entries, repeats included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ModuleEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (path, module) in &self.0 {
            map.serialize_entry(path, module)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ModuleEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = ModuleEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from module path to module entry")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, ManifestModule>()? {
                    entries.push(entry);
                }
                Ok(ModuleEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// The discovery manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Layout wrapping every page.
    #[serde(default = "default_root_layout")]
    pub root_layout: LayoutRef,

    /// Every module the build discovered, keyed by module path.
    #[serde(default)]
    pub modules: ModuleEntries,
}

fn default_root_layout() -> LayoutRef {
    LayoutRef::new(DEFAULT_ROOT_LAYOUT)
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            root_layout: default_root_layout(),
            modules: ModuleEntries::default(),
        }
    }
}

impl Manifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a manifest from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Replace the root layout.
    #[must_use]
    pub fn with_root_layout(mut self, root_layout: LayoutRef) -> Self {
        self.root_layout = root_layout;
        self
    }

    /// View modules for every page entry, in document order.
    ///
    /// Entries outside the pages prefix are skipped. Fails on the first
    /// repeated module path or malformed layout declaration.
    pub fn view_modules(&self, rules: &DiscoveryRules) -> Result<Vec<ViewModule>> {
        let mut modules = Vec::new();
        let mut seen = BTreeSet::new();

        for (path, entry) in self.modules.iter() {
            let page = rules.page_name(path);

            if !seen.insert(path) {
                return Err(match page {
                    Some(name) => PageError::DuplicatePage {
                        name: name.to_string(),
                    },
                    None => PageError::DuplicateModule {
                        path: path.to_string(),
                    },
                });
            }

            let Some(name) = page else {
                continue;
            };

            let component = entry
                .component
                .clone()
                .unwrap_or_else(|| ComponentRef::new(path));
            let layout = parse_layout_decl(name, &entry.layout)?;

            modules.push(ViewModule::new(name, component).with_layout(layout));
        }

        Ok(modules)
    }

    /// Register every page entry into a frozen registry.
    pub fn to_registry(&self, rules: &DiscoveryRules) -> Result<Registry> {
        let mut builder = Registry::builder();
        builder.register_all(self.view_modules(rules)?)?;
        Ok(builder.build())
    }

    /// Build a resolver from this manifest.
    pub fn into_resolver(self, rules: &DiscoveryRules) -> Result<PageResolver> {
        let registry = self.to_registry(rules)?;
        PageResolver::new(registry, self.root_layout)
    }
}

// =============================================================================
// LAYOUT DECLARATION PARSING
// =============================================================================

/// Interpret a raw JSON layout declaration for `page`.
///
/// `null` means no layout, a string is a single layout, an array of
/// strings is a sequence. Anything else is rejected rather than coerced.
pub fn parse_layout_decl(page: &str, raw: &Value) -> Result<LayoutDecl> {
    match raw {
        Value::Null => Ok(LayoutDecl::NoLayout),
        Value::String(handle) => {
            let layout = LayoutRef::new(handle.as_str());
            if layout.is_blank() {
                return Err(PageError::malformed_layout(page, "layout reference is blank"));
            }
            Ok(LayoutDecl::Single(layout))
        }
        Value::Array(items) => {
            let mut layouts = Vec::with_capacity(items.len());
            for (position, item) in items.iter().enumerate() {
                let Value::String(handle) = item else {
                    return Err(PageError::malformed_layout(
                        page,
                        format!(
                            "layout entry at position {} is {}, expected a string",
                            position,
                            json_kind(item)
                        ),
                    ));
                };
                let layout = LayoutRef::new(handle.as_str());
                if layout.is_blank() {
                    return Err(PageError::malformed_layout(
                        page,
                        format!("layout entry at position {} is blank", position),
                    ));
                }
                layouts.push(layout);
            }
            Ok(LayoutDecl::Sequence(layouts))
        }
        other => Err(PageError::malformed_layout(
            page,
            format!(
                "expected a layout reference or a list of references, found {}",
                json_kind(other)
            ),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: &str = r#"{
        "root_layout": "./layouts/Layout.svelte",
        "modules": {
            "./pages/Index.svelte": { "component": "pages/Index" },
            "./pages/TaskPage.svelte": { "layout": "./layouts/Task.svelte" },
            "./pages/Admin/Billing.svelte": { "layout": ["Admin", "Billing"] },
            "./layouts/Layout.svelte": {}
        }
    }"#;

    #[test]
    fn parse_layout_shapes() {
        assert_eq!(parse_layout_decl("P", &Value::Null).ok(), Some(LayoutDecl::NoLayout));
        assert_eq!(
            parse_layout_decl("P", &json!("Admin")).ok(),
            Some(LayoutDecl::single("Admin"))
        );
        assert_eq!(
            parse_layout_decl("P", &json!(["Admin", "Billing"])).ok(),
            Some(LayoutDecl::sequence(["Admin", "Billing"]))
        );
        assert_eq!(
            parse_layout_decl("P", &json!([])).ok(),
            Some(LayoutDecl::Sequence(Vec::new()))
        );
    }

    #[test]
    fn parse_layout_rejects_other_shapes() {
        for raw in [
            json!(42),
            json!(false),
            json!({"layout": "Admin"}),
            json!(""),
            json!(["Admin", 7]),
            json!(["Admin", ""]),
            json!([["Admin"]]),
        ] {
            let result = parse_layout_decl("Billing", &raw);
            assert!(
                matches!(result, Err(PageError::MalformedLayout { ref page, .. }) if page == "Billing"),
                "accepted {raw}"
            );
        }
    }

    #[test]
    fn manifest_builds_registry_of_pages_only() {
        let manifest = Manifest::from_json(SAMPLE);
        assert!(manifest.is_ok());

        let registry = manifest.ok().and_then(|m| m.to_registry(&DiscoveryRules::default()).ok());
        let names: Option<Vec<String>> =
            registry.map(|r| r.names().map(str::to_string).collect());
        assert_eq!(
            names,
            Some(vec![
                "Admin/Billing".to_string(),
                "Index".to_string(),
                "TaskPage".to_string(),
            ])
        );
    }

    #[test]
    fn component_defaults_to_module_path() {
        let modules = Manifest::from_json(SAMPLE)
            .ok()
            .and_then(|m| m.view_modules(&DiscoveryRules::default()).ok())
            .unwrap_or_default();

        let task = modules.iter().find(|m| m.name == "TaskPage");
        assert_eq!(
            task.map(|m| m.component.as_str()),
            Some("./pages/TaskPage.svelte")
        );
    }

    #[test]
    fn root_layout_defaults_when_absent() {
        let manifest = Manifest::from_json(r#"{ "modules": {} }"#).ok();
        assert_eq!(
            manifest.map(|m| m.root_layout),
            Some(LayoutRef::new(DEFAULT_ROOT_LAYOUT))
        );
    }

    #[test]
    fn malformed_layout_fails_the_load() {
        let json = r#"{ "modules": { "./pages/Index.svelte": { "layout": 3 } } }"#;
        let result = Manifest::from_json(json).and_then(|m| m.into_resolver(&DiscoveryRules::default()));
        assert!(matches!(result, Err(PageError::MalformedLayout { ref page, .. }) if page == "Index"));
    }

    #[test]
    fn invalid_json_is_json_error() {
        assert!(matches!(Manifest::from_json("not json"), Err(PageError::Json(_))));
        assert!(matches!(
            Manifest::from_json(r#"{ "modules": [] }"#),
            Err(PageError::Json(_))
        ));
    }

    #[test]
    fn repeated_page_path_is_duplicate_page() {
        let json = r#"{ "modules": {
            "./pages/Index.svelte": { "component": "first", "layout": "Admin" },
            "./pages/Index.svelte": { "component": "second" }
        } }"#;

        let manifest = Manifest::from_json(json);
        assert_eq!(manifest.as_ref().map(|m| m.modules.len()).ok(), Some(2));

        let result = manifest.and_then(|m| m.into_resolver(&DiscoveryRules::default()));
        assert!(matches!(result, Err(PageError::DuplicatePage { ref name }) if name == "Index"));
    }

    #[test]
    fn repeated_layout_path_is_duplicate_module() {
        let json = r#"{ "modules": {
            "./pages/Index.svelte": {},
            "./layouts/Layout.svelte": {},
            "./layouts/Layout.svelte": {}
        } }"#;

        let result = Manifest::from_json(json).and_then(|m| m.to_registry(&DiscoveryRules::default()));
        assert!(matches!(
            result,
            Err(PageError::DuplicateModule { ref path }) if path == "./layouts/Layout.svelte"
        ));
    }

    #[test]
    fn page_names_with_spaces_resolve() {
        let json = r#"{ "modules": {
            "./pages/Index.svelte": {},
            "./pages/Task Page.svelte": { "layout": "Task" }
        } }"#;

        let resolver = Manifest::from_json(json).and_then(|m| m.into_resolver(&DiscoveryRules::default()));
        let path = resolver
            .and_then(|r| r.resolve("Task Page"))
            .map(|r| r.render_path())
            .ok();
        assert_eq!(
            path.as_deref(),
            Some("./layouts/Layout.svelte > Task > ./pages/Task Page.svelte")
        );
    }

    #[test]
    fn entries_serialize_as_map_in_document_order() {
        let mut manifest = Manifest::default();
        manifest.modules.push("./pages/Zeta.svelte", ManifestModule::default());
        manifest.modules.push("./pages/Alpha.svelte", ManifestModule::default());

        let json = serde_json::to_string(&manifest.modules).ok();
        assert_eq!(
            json.as_deref(),
            Some(r#"{"./pages/Zeta.svelte":{},"./pages/Alpha.svelte":{}}"#)
        );
    }

    #[test]
    fn root_layout_override() {
        let resolver = Manifest::from_json(SAMPLE)
            .map(|m| m.with_root_layout(LayoutRef::new("Shell")))
            .and_then(|m| m.into_resolver(&DiscoveryRules::default()));

        let chain = resolver
            .and_then(|r| r.resolve("Admin/Billing"))
            .map(|r| r.layout_chain.to_vec())
            .ok();
        assert_eq!(
            chain,
            Some(vec![
                LayoutRef::new("Shell"),
                LayoutRef::new("Admin"),
                LayoutRef::new("Billing"),
            ])
        );
    }
}
