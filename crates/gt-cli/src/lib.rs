//! # gt-cli: Command-Line Tool for the Grow Trucking Site
//!
//! Provides the `gt` command-line interface over the content catalog and
//! the dispatch backend.
//!
//! ## Subcommands
//!
//! - `gt list`: List partners, truck types, states, jobs, services, case
//!   studies or lanes.
//! - `gt show`: Print one catalog entry as JSON or YAML.
//! - `gt audit`: Check state and lane pages against their section outline.
//! - `gt generate-states`: Write one JSON document per generated state.
//! - `gt resolve-area`: Show where an `/areas-we-serve/...` path redirects.
//! - `gt ping`: Call the dispatch backend's connectivity endpoint.
//!
//! ```bash
//! gt list lanes --state illinois
//! gt show truck-types reefer --format yaml
//! gt audit --lanes --strict
//! gt generate-states --out dist/states
//! ```

pub mod areas;
pub mod audit;
pub mod generate;
pub mod list;
pub mod ping;
pub mod show;

use std::fmt;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use gt_content::Catalog;
use serde::Serialize;

/// Catalog collections addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentKind {
    Partners,
    TruckTypes,
    States,
    Jobs,
    Services,
    CaseStudies,
    Lanes,
}

impl ContentKind {
    /// Singular noun for messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Partners => "partner",
            Self::TruckTypes => "truck type",
            Self::States => "state",
            Self::Jobs => "job",
            Self::Services => "service",
            Self::CaseStudies => "case study",
            Self::Lanes => "lane",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Serialize `value` in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("failed to serialize as JSON")
        }
        OutputFormat::Yaml => serde_yaml::to_string(value).context("failed to serialize as YAML"),
    }
}

/// Load the catalog from `content_dir`, or the embedded content when absent.
pub fn load_catalog(content_dir: Option<&Path>) -> anyhow::Result<Catalog> {
    match content_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "loading content from directory");
            Catalog::from_dir(dir)
                .with_context(|| format!("failed to load content from {}", dir.display()))
        }
        None => Catalog::embedded().context("embedded content failed to load"),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;

    use gt_content::ContentSources;

    /// Write the embedded content files into `dir`.
    pub fn write_embedded_content(dir: &Path) {
        let sources = ContentSources::embedded();
        for (file, body) in [
            ("partners.yaml", &sources.partners),
            ("truck_types.yaml", &sources.truck_types),
            ("jobs.yaml", &sources.jobs),
            ("services.yaml", &sources.services),
            ("case_studies.yaml", &sources.case_studies),
            ("state_lanes.yaml", &sources.state_lanes),
            ("navigation.yaml", &sources.navigation),
        ] {
            std::fs::write(dir.join(file), body).unwrap();
        }
    }
}
