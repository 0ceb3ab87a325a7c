//! # Navigation Module
//!
//! The seam between the server's page objects and the host's mount routine.
//!
//! On every navigation the server supplies a page object naming the page
//! and carrying its props. The core resolves the name and hands the result,
//! with the props untouched, to a [`MountTarget`]. Nothing is mounted when
//! resolution fails.

use crate::error::PageError;
use crate::resolver::{PageResolver, Resolution};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// PAGE VISIT
// =============================================================================

/// A page object as sent by the server on navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageVisit {
    /// Name of the page to render.
    pub component: String,

    /// Props for the page component. Passed through untouched.
    #[serde(default)]
    pub props: Value,

    /// URL the visit was made to.
    #[serde(default)]
    pub url: String,

    /// Asset version the server rendered against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PageVisit {
    /// Create a visit with no URL or version.
    #[must_use]
    pub fn new(component: impl Into<String>, props: Value) -> Self {
        Self {
            component: component.into(),
            props,
            url: String::new(),
            version: None,
        }
    }

    /// Parse a page object from JSON.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }
}

// =============================================================================
// MOUNT
// =============================================================================

/// Everything the mount target needs for one navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MountPlan<'a> {
    /// Component and layout chain to mount.
    pub resolution: Resolution,

    /// Props for the page component.
    pub props: &'a Value,

    /// URL of the visit.
    pub url: &'a str,
}

/// The host's mount routine.
pub trait MountTarget {
    /// Error the host raises when mounting fails.
    type Error: std::error::Error + 'static;

    /// Instantiate or update the DOM for a resolved page.
    fn mount(&mut self, plan: MountPlan<'_>) -> Result<(), Self::Error>;
}

/// Failure of a navigation.
#[derive(Debug, Error)]
pub enum NavigationError<E: std::error::Error + 'static> {
    /// The page could not be resolved; nothing was mounted.
    #[error("navigation to {page} failed: {source}")]
    Resolve {
        page: String,
        #[source]
        source: PageError,
    },

    /// The host failed to mount a resolved page.
    #[error("mount failed: {0}")]
    Mount(#[source] E),
}

// =============================================================================
// NAVIGATE
// =============================================================================

/// Build the mount plan for a visit without mounting it.
pub fn plan<'a>(resolver: &PageResolver, visit: &'a PageVisit) -> Result<MountPlan<'a>, PageError> {
    let resolution = resolver.resolve(&visit.component)?;
    Ok(MountPlan {
        resolution,
        props: &visit.props,
        url: &visit.url,
    })
}

/// Resolve a visit and hand it to the mount target.
pub fn navigate<M: MountTarget>(
    resolver: &PageResolver,
    visit: &PageVisit,
    target: &mut M,
) -> Result<Resolution, NavigationError<M::Error>> {
    let mount_plan = plan(resolver, visit).map_err(|source| NavigationError::Resolve {
        page: visit.component.clone(),
        source,
    })?;

    let resolution = mount_plan.resolution.clone();
    target.mount(mount_plan).map_err(NavigationError::Mount)?;
    Ok(resolution)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutDecl;
    use crate::registry::{Registry, ViewModule};
    use crate::{ComponentRef, LayoutRef};
    use serde_json::json;

    #[derive(Debug, Error)]
    #[error("target detached")]
    struct Detached;

    /// Records every mounted plan as `(render path, props)`.
    #[derive(Default)]
    struct RecordingTarget {
        mounted: Vec<(String, Value)>,
        detached: bool,
    }

    impl MountTarget for RecordingTarget {
        type Error = Detached;

        fn mount(&mut self, plan: MountPlan<'_>) -> Result<(), Self::Error> {
            if self.detached {
                return Err(Detached);
            }
            self.mounted
                .push((plan.resolution.render_path(), plan.props.clone()));
            Ok(())
        }
    }

    fn resolver() -> Option<PageResolver> {
        let mut builder = Registry::builder();
        builder
            .register(
                ViewModule::new("TaskPage", ComponentRef::new("pages/TaskPage"))
                    .with_layout(LayoutDecl::single("Task")),
            )
            .ok()?;
        PageResolver::new(builder.build(), LayoutRef::new("Layout")).ok()
    }

    #[test]
    fn navigate_mounts_resolved_page_with_props() {
        let Some(resolver) = resolver() else {
            unreachable!("fixture resolver failed to build");
        };
        let mut target = RecordingTarget::default();
        let visit = PageVisit::new("TaskPage", json!({"task": {"slug": "abc"}}));

        let result = navigate(&resolver, &visit, &mut target);
        assert!(result.is_ok());
        assert_eq!(
            target.mounted,
            vec![(
                "Layout > Task > pages/TaskPage".to_string(),
                json!({"task": {"slug": "abc"}})
            )]
        );
    }

    #[test]
    fn navigate_to_missing_page_mounts_nothing() {
        let Some(resolver) = resolver() else {
            unreachable!("fixture resolver failed to build");
        };
        let mut target = RecordingTarget::default();
        let visit = PageVisit::new("Missing", Value::Null);

        let result = navigate(&resolver, &visit, &mut target);
        assert!(matches!(
            result,
            Err(NavigationError::Resolve { ref page, source: PageError::Lookup { .. } }) if page == "Missing"
        ));
        assert!(target.mounted.is_empty());
    }

    #[test]
    fn mount_failure_is_reported() {
        let Some(resolver) = resolver() else {
            unreachable!("fixture resolver failed to build");
        };
        let mut target = RecordingTarget {
            detached: true,
            ..RecordingTarget::default()
        };

        let result = navigate(&resolver, &PageVisit::new("TaskPage", Value::Null), &mut target);
        assert!(matches!(result, Err(NavigationError::Mount(Detached))));
    }

    #[test]
    fn page_object_parses_with_defaults() {
        let visit = PageVisit::from_json(r#"{"component": "Index"}"#).ok();
        assert_eq!(visit.as_ref().map(|v| v.component.as_str()), Some("Index"));
        assert_eq!(visit.as_ref().map(|v| v.props.is_null()), Some(true));
        assert_eq!(visit.and_then(|v| v.version), None);
    }

    #[test]
    fn bad_page_object_is_json_error() {
        assert!(matches!(PageVisit::from_json("not json"), Err(PageError::Json(_))));
        assert!(matches!(
            PageVisit::from_json(r#"{ "props": {} }"#),
            Err(PageError::Json(_))
        ));
    }
}
