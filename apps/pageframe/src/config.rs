//! Command-line configuration.
//!
//! `Cli` is the clap surface; `Config` is what the commands consume once
//! global flags are folded together.

use clap::{Parser, Subcommand};
use pageframe_core::{DiscoveryRules, LayoutRef, DEFAULT_PAGES_PREFIX, DEFAULT_VIEW_EXTENSION};
use std::path::PathBuf;

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "pages.json";

/// Resolve pages and layout chains from a discovery manifest.
#[derive(Debug, Parser)]
#[command(name = "pageframe", version, about)]
pub struct Cli {
    /// Discovery manifest produced by the build.
    #[arg(short, long, global = true, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Override the manifest's root layout.
    #[arg(long, global = true)]
    pub root_layout: Option<String>,

    /// Module path prefix that marks a page.
    #[arg(long, global = true, default_value = DEFAULT_PAGES_PREFIX)]
    pub pages_prefix: String,

    /// View module file extension.
    #[arg(long, global = true, default_value = DEFAULT_VIEW_EXTENSION)]
    pub extension: String,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve one page to its component and layout chain.
    Resolve {
        /// Page name as sent by the server.
        page: String,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List every page with its layout chain.
    List {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Fail if any expected page is missing from the registry.
    Check {
        /// Page names the server may request.
        #[arg(long = "expect", required = true, num_args = 1..)]
        expect: Vec<String>,
    },

    /// Print the mount plan for a page object.
    Visit {
        /// JSON page object as sent by the server.
        #[arg(long)]
        page: PathBuf,
    },
}

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the discovery manifest.
    pub manifest: PathBuf,

    /// Root layout override.
    pub root_layout: Option<LayoutRef>,

    /// How module paths map to page names.
    pub rules: DiscoveryRules,
}

impl Config {
    /// Config with default discovery rules and no override.
    #[must_use]
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            root_layout: None,
            rules: DiscoveryRules::default(),
        }
    }

    /// Set the root layout override.
    #[must_use]
    pub fn with_root_layout(mut self, root_layout: impl Into<String>) -> Self {
        self.root_layout = Some(LayoutRef::new(root_layout));
        self
    }

    /// Set the discovery rules.
    #[must_use]
    pub fn with_rules(mut self, rules: DiscoveryRules) -> Self {
        self.rules = rules;
        self
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            manifest: cli.manifest.clone(),
            root_layout: cli.root_layout.as_deref().map(LayoutRef::new),
            rules: DiscoveryRules::new(cli.pages_prefix.as_str(), cli.extension.as_str()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
