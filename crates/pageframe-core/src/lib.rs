//! # Pageframe Core - The Logic
//!
//! Page resolution and layout composition for server-driven single-page
//! applications.
//!
//! The server names a page on every navigation. This crate finds that page
//! among the view modules known to the build and works out which layouts
//! wrap it. Mounting is left to the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use pageframe_core::{ComponentRef, LayoutDecl, LayoutRef, PageResolver, Registry, ViewModule};
//!
//! let mut builder = Registry::builder();
//! builder.register(
//!     ViewModule::new("Billing", ComponentRef::new("pages/Billing"))
//!         .with_layout(LayoutDecl::sequence(["Admin", "Billing"])),
//! )?;
//!
//! let resolver = PageResolver::new(builder.build(), LayoutRef::new("Root"))?;
//! let resolution = resolver.resolve("Billing")?;
//!
//! assert_eq!(resolution.render_path(), "Root > Admin > Billing > pages/Billing");
//! # Ok::<(), pageframe_core::PageError>(())
//! ```
//!
//! ## Layout
//!
//! ```text
//! manifest ──► Manifest ──► RegistryBuilder ──► Registry (frozen)
//!                                                  │
//! PageVisit ──► navigate ──► PageResolver::resolve ┘
//!                   │              │
//!                   │              └─► Compositor::compose ──► LayoutChain
//!                   ▼
//!              MountTarget::mount(MountPlan)
//! ```

pub mod compositor;
pub mod discovery;
pub mod error;
pub mod formats;
pub mod layout;
pub mod navigation;
pub mod primitives;
pub mod registry;
pub mod resolver;

pub use compositor::Compositor;
pub use discovery::{DiscoveryRules, DEFAULT_PAGES_PREFIX, DEFAULT_ROOT_LAYOUT, DEFAULT_VIEW_EXTENSION};
pub use error::{PageError, Result};
pub use formats::{parse_layout_decl, Manifest, ManifestModule, ModuleEntries};
pub use layout::{LayoutChain, LayoutDecl};
pub use navigation::{navigate, plan, MountPlan, MountTarget, NavigationError, PageVisit};
pub use primitives::{ComponentRef, LayoutRef};
pub use registry::{Registry, RegistryBuilder, ViewModule};
pub use resolver::{PageResolver, Resolution};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
