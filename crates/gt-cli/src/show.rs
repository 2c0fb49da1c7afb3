//! # Show Subcommand
//!
//! `gt show <kind> <slug> [--format json|yaml]` prints one catalog entry.
//! Jobs also accept their numeric id; lanes are addressed as `state/lane`.

use anyhow::{bail, Context, Result};
use clap::Args;
use gt_content::Catalog;
use gt_core::canonical_slug;

use crate::{render, ContentKind, OutputFormat};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Collection the entry belongs to.
    #[arg(value_enum)]
    pub kind: ContentKind,

    /// Entry slug (`state/lane` for lanes).
    pub slug: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Execute the show subcommand.
pub fn run_show(args: &ShowArgs, catalog: &Catalog) -> Result<u8> {
    println!("{}", render_entry(args.kind, &args.slug, catalog, args.format)?);
    Ok(0)
}

/// Render one entry, or fail naming what was not found.
pub fn render_entry(
    kind: ContentKind,
    slug: &str,
    catalog: &Catalog,
    format: OutputFormat,
) -> Result<String> {
    let key = canonical_slug(slug);
    let missing = || anyhow::anyhow!("no {kind} with slug '{slug}'");

    match kind {
        ContentKind::Partners => {
            render(catalog.partners().get_by_slug(&key).ok_or_else(missing)?, format)
        }
        ContentKind::TruckTypes => {
            render(catalog.truck_types().get_by_slug(&key).ok_or_else(missing)?, format)
        }
        ContentKind::States => {
            render(catalog.states().get_by_slug(&key).ok_or_else(missing)?, format)
        }
        ContentKind::Jobs => {
            let job = catalog
                .jobs()
                .get_by_slug(&key)
                .or_else(|| catalog.jobs().get_by_id(slug.trim()))
                .ok_or_else(missing)?;
            render(job, format)
        }
        ContentKind::Services => {
            render(catalog.services().get_by_slug(&key).ok_or_else(missing)?, format)
        }
        ContentKind::CaseStudies => {
            render(catalog.case_studies().get_by_slug(&key).ok_or_else(missing)?, format)
        }
        ContentKind::Lanes => {
            let (state, lane) = slug
                .split_once('/')
                .context("lanes are addressed as <state>/<lane>")?;
            if lane.is_empty() {
                bail!("lanes are addressed as <state>/<lane>");
            }
            let lane = catalog
                .lanes()
                .get(&canonical_slug(state), lane)
                .ok_or_else(missing)?;
            render(lane, format)
        }
    }
}
