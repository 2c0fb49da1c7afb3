//! `gt resolve-area <path>`: where an areas-we-serve link redirects.

use anyhow::Result;
use clap::Args;
use gt_content::{resolve_area_path, Catalog};

#[derive(Args, Debug)]
pub struct ResolveAreaArgs {
    /// Path such as `/areas-we-serve/western-us/new-mexico` or `midwest/ohio`.
    pub path: String,
}

pub fn run_resolve_area(args: &ResolveAreaArgs, catalog: &Catalog) -> Result<u8> {
    let target = resolve_area_path(&args.path, catalog.states());
    println!("{}", target.location());
    Ok(0)
}
