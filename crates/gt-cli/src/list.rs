//! # List Subcommand
//!
//! `gt list <kind> [--state S]` prints one line per catalog entry: slug
//! first, then its display name. Lanes are printed as `state/lane`.

use anyhow::{bail, Result};
use clap::Args;
use gt_content::Catalog;

use crate::ContentKind;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Collection to list.
    #[arg(value_enum)]
    pub kind: ContentKind,

    /// Restrict lanes to one state (slug).
    #[arg(long)]
    pub state: Option<String>,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, catalog: &Catalog) -> Result<u8> {
    let lines = list_lines(args.kind, args.state.as_deref(), catalog)?;
    for line in &lines {
        println!("{line}");
    }
    println!();
    println!("Total: {} {}", lines.len(), args.kind);
    Ok(0)
}

fn row(slug: &str, name: &str) -> String {
    format!("  {slug:<48} {name}")
}

/// Build the listing without printing it.
pub fn list_lines(kind: ContentKind, state: Option<&str>, catalog: &Catalog) -> Result<Vec<String>> {
    if state.is_some() && kind != ContentKind::Lanes {
        bail!("--state only applies to lanes");
    }

    let lines = match kind {
        ContentKind::Partners => catalog
            .partners()
            .iter()
            .map(|p| row(&p.slug, &p.display_name))
            .collect(),
        ContentKind::TruckTypes => catalog
            .truck_types()
            .iter()
            .map(|t| row(&t.slug, &t.name))
            .collect(),
        ContentKind::States => catalog
            .states()
            .iter()
            .map(|s| row(&s.slug, &format!("{} ({})", s.name, s.abbreviation)))
            .collect(),
        ContentKind::Jobs => catalog
            .jobs()
            .iter()
            .map(|j| row(&j.slug, &format!("{} [{}]", j.title, j.job_id)))
            .collect(),
        ContentKind::Services => catalog
            .services()
            .iter()
            .map(|s| row(&s.id, &s.title))
            .collect(),
        ContentKind::CaseStudies => catalog
            .case_studies()
            .iter()
            .map(|c| {
                let star = if c.featured { " *" } else { "" };
                row(&c.slug, &format!("{} ({}){star}", c.driver_name, c.lane))
            })
            .collect(),
        ContentKind::Lanes => {
            let lanes = match state {
                Some(slug) => {
                    if !catalog.states().exists(slug) {
                        bail!("no state with slug '{slug}'");
                    }
                    catalog.lanes().all_in(slug)
                }
                None => catalog.lanes().all(),
            };
            lanes
                .iter()
                .map(|l| row(&format!("{}/{}", l.state_slug, l.slug), &l.display_name))
                .collect()
        }
    };
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn lists_every_partner() {
        let lines = list_lines(ContentKind::Partners, None, &catalog()).unwrap();
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().any(|l| l.contains("c-h-robinson-worldwide-inc")));
    }

    #[test]
    fn lists_truck_types_in_catalog_order() {
        let lines = list_lines(ContentKind::TruckTypes, None, &catalog()).unwrap();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].trim_start().starts_with("dry-van"));
    }

    #[test]
    fn lists_states_with_abbreviation() {
        let lines = list_lines(ContentKind::States, None, &catalog()).unwrap();
        assert_eq!(lines.len(), 49);
        assert!(lines.iter().any(|l| l.contains("Texas (TX)")));
    }

    #[test]
    fn lists_jobs_with_requisition_code() {
        let lines = list_lines(ContentKind::Jobs, None, &catalog()).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().any(|l| l.contains("[GT001]")));
    }

    #[test]
    fn lists_case_studies_marking_featured() {
        let lines = list_lines(ContentKind::CaseStudies, None, &catalog()).unwrap();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines.iter().filter(|l| l.ends_with(" *")).count(), 4);
        assert!(lines[0].trim_start().starts_with("marcus-t-dallas-to-atlanta"));
    }

    #[test]
    fn lists_lanes_of_one_state() {
        let lines = list_lines(ContentKind::Lanes, Some("illinois"), &catalog()).unwrap();
        assert_eq!(lines.len(), 15);
        assert!(lines
            .iter()
            .any(|l| l.contains("illinois/chicago-to-st-louis") && l.contains("Chicago to St. Louis")));
    }

    #[test]
    fn lists_all_lanes() {
        let lines = list_lines(ContentKind::Lanes, None, &catalog()).unwrap();
        assert_eq!(lines.len(), 49 * 15);
    }

    #[test]
    fn unknown_state_is_an_error() {
        let err = list_lines(ContentKind::Lanes, Some("atlantis"), &catalog()).unwrap_err();
        assert!(err.to_string().contains("atlantis"));
    }

    #[test]
    fn state_filter_rejected_for_other_kinds() {
        assert!(list_lines(ContentKind::Partners, Some("texas"), &catalog()).is_err());
    }
}
