//! # CLI Commands
//!
//! Each `cmd_*` function loads the manifest named by the config, runs
//! against a fresh resolver and writes its report to `out`.

use crate::config::{Cli, Commands, Config};
use crate::error::CliError;
use pageframe_core::{
    navigate, Manifest, MountPlan, MountTarget, NavigationError, PageResolver, PageVisit,
    Resolution,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

// =============================================================================
// ENTRY
// =============================================================================

/// Dispatch a parsed command line, writing to stdout.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let config = Config::from(cli);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Resolve { page, json } => cmd_resolve(&config, page, *json, &mut out),
        Commands::List { json } => cmd_list(&config, *json, &mut out),
        Commands::Check { expect } => cmd_check(&config, expect, &mut out),
        Commands::Visit { page } => cmd_visit(&config, page, &mut out),
    }
}

// =============================================================================
// LOADING
// =============================================================================

fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the manifest and build a resolver from it.
pub fn load_resolver(config: &Config) -> Result<PageResolver, CliError> {
    let bytes = read_file(&config.manifest)?;
    let mut manifest = Manifest::from_slice(&bytes)?;

    if let Some(root_layout) = &config.root_layout {
        debug!(root_layout = %root_layout, "overriding manifest root layout");
        manifest = manifest.with_root_layout(root_layout.clone());
    }

    let resolver = manifest.into_resolver(&config.rules)?;
    info!(
        manifest = %config.manifest.display(),
        pages = resolver.registry().len(),
        root_layout = %resolver.root_layout(),
        "registry loaded"
    );
    Ok(resolver)
}

/// Resolve a page, logging failures with a hint for case-only mismatches.
fn resolve_logged(resolver: &PageResolver, page: &str) -> Result<Resolution, CliError> {
    match resolver.resolve(page) {
        Ok(resolution) => {
            debug!(page, chain = resolution.layout_chain.len(), "resolved");
            Ok(resolution)
        }
        Err(err) => {
            match resolver
                .page_names()
                .find(|name| name.eq_ignore_ascii_case(page))
            {
                Some(candidate) => warn!(page, candidate, "page not found; names are case-sensitive"),
                None => warn!(page, "page not found"),
            }
            Err(err.into())
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// A resolution labelled with the page it belongs to.
#[derive(Debug, Serialize)]
struct ResolvedPage<'a> {
    page: &'a str,
    #[serde(flatten)]
    resolution: &'a Resolution,
}

fn write_text(out: &mut impl Write, page: &str, resolution: &Resolution) -> io::Result<()> {
    writeln!(out, "page:      {}", page)?;
    writeln!(out, "component: {}", resolution.component)?;
    writeln!(
        out,
        "layouts:   {}",
        resolution
            .layout_chain
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    )?;
    writeln!(out, "render:    {}", resolution.render_path())
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Resolve one page.
pub fn cmd_resolve(
    config: &Config,
    page: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let resolver = load_resolver(config)?;
    let resolution = resolve_logged(&resolver, page)?;

    if json {
        serde_json::to_writer_pretty(
            &mut *out,
            &ResolvedPage {
                page,
                resolution: &resolution,
            },
        )?;
        writeln!(out)?;
    } else {
        write_text(out, page, &resolution)?;
    }
    Ok(())
}

/// List every page with its layout chain.
pub fn cmd_list(config: &Config, json: bool, out: &mut impl Write) -> Result<(), CliError> {
    let resolver = load_resolver(config)?;

    let mut resolved = Vec::with_capacity(resolver.registry().len());
    for page in resolver.page_names() {
        resolved.push((page, resolver.resolve(page)?));
    }

    if json {
        let pages: Vec<_> = resolved
            .iter()
            .map(|(page, resolution)| ResolvedPage {
                page: *page,
                resolution,
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &pages)?;
        writeln!(out)?;
    } else {
        for (page, resolution) in &resolved {
            writeln!(out, "{}\t{}", page, resolution.render_path())?;
        }
    }
    Ok(())
}

/// Fail if any expected page is missing.
pub fn cmd_check(config: &Config, expect: &[String], out: &mut impl Write) -> Result<(), CliError> {
    let resolver = load_resolver(config)?;
    let missing = resolver.missing(expect.iter().map(String::as_str));

    if missing.is_empty() {
        writeln!(
            out,
            "ok: {} expected page(s) resolve ({} registered)",
            expect.len(),
            resolver.registry().len()
        )?;
        return Ok(());
    }

    for page in &missing {
        warn!(page = page.as_str(), "expected page is not registered");
        writeln!(out, "missing: {}", page)?;
    }
    Err(CliError::MissingPages(missing))
}

/// Mount target that prints the plan as JSON.
struct JsonMount<'w, W: Write> {
    out: &'w mut W,
}

impl<W: Write> MountTarget for JsonMount<'_, W> {
    type Error = serde_json::Error;

    fn mount(&mut self, plan: MountPlan<'_>) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut *self.out, &plan)?;
        writeln!(self.out).map_err(serde_json::Error::io)
    }
}

/// Resolve a page object and print its mount plan.
pub fn cmd_visit(config: &Config, page_file: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let resolver = load_resolver(config)?;
    let bytes = read_file(page_file)?;
    let visit: PageVisit = serde_json::from_slice(&bytes)?;
    debug!(page = visit.component.as_str(), url = visit.url.as_str(), "visit");

    let mut target = JsonMount { out };
    match navigate(&resolver, &visit, &mut target) {
        Ok(_) => Ok(()),
        Err(NavigationError::Resolve { page, source }) => {
            warn!(page = page.as_str(), "navigation failed");
            Err(source.into())
        }
        Err(NavigationError::Mount(err)) => Err(err.into()),
    }
}
