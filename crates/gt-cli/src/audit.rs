//! # Audit Subcommand
//!
//! Assembles state pages (and, with `--lanes`, every lane page) and checks
//! them against the section outline.
//!
//! ## Exit status
//!
//! - `0` when no page has an error finding (or, with `--strict`, any finding).
//! - `1` otherwise.

use anyhow::{bail, Result};
use clap::Args;
use gt_content::{
    audit_lane_page, audit_state_page, Catalog, LanePage, Severity, StatePage, StructureReport,
};

#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Audit a single state (slug). Defaults to every state.
    #[arg(long)]
    pub state: Option<String>,

    /// Also audit the lane pages of the selected states.
    #[arg(long)]
    pub lanes: bool,

    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,
}

/// One audited page.
#[derive(Debug)]
pub struct PageAudit {
    /// URL path of the page, e.g. `/states/texas`.
    pub page: String,
    pub report: StructureReport,
}

/// Execute the audit subcommand.
pub fn run_audit(args: &AuditArgs, catalog: &Catalog) -> Result<u8> {
    let audits = audit_catalog(catalog, args.state.as_deref(), args.lanes)?;

    for audit in audits.iter().filter(|a| !a.report.findings.is_empty()) {
        println!("{}", audit.page);
        for finding in &audit.report.findings {
            let level = match finding.severity {
                Severity::Error => "ERROR",
                Severity::Warning => "WARN ",
            };
            println!("  {level} [{}] {}", finding.section, finding.message);
        }
    }

    let errors: usize = audits.iter().map(|a| a.report.count(Severity::Error)).sum();
    let warnings: usize = audits.iter().map(|a| a.report.count(Severity::Warning)).sum();
    println!();
    println!(
        "Audited {} pages: {errors} errors, {warnings} warnings",
        audits.len()
    );

    let code = exit_code(&audits, args.strict);
    if code != 0 {
        tracing::warn!(errors, warnings, strict = args.strict, "page audit failed");
    }
    Ok(code)
}

/// Audit the selected state pages, and their lane pages when `lanes` is set.
pub fn audit_catalog(catalog: &Catalog, state: Option<&str>, lanes: bool) -> Result<Vec<PageAudit>> {
    let states: Vec<_> = match state {
        Some(slug) => match catalog.states().get_by_slug(slug) {
            Some(s) => vec![s],
            None => bail!("no state with slug '{slug}'"),
        },
        None => catalog.states().iter().collect(),
    };

    let mut audits = Vec::new();
    for state in states {
        audits.push(PageAudit {
            page: format!("/states/{}", state.slug),
            report: audit_state_page(&StatePage::from_state(state)),
        });
        if lanes {
            for lane in &state.lanes {
                audits.push(PageAudit {
                    page: format!("/states/{}/lanes/{}", state.slug, lane.slug),
                    report: audit_lane_page(&LanePage::from_lane(lane)),
                });
            }
        }
    }
    Ok(audits)
}

/// `1` when any page has an error, or any finding at all under `strict`.
pub fn exit_code(audits: &[PageAudit], strict: bool) -> u8 {
    let failed = audits.iter().any(|a| {
        if strict {
            !a.report.findings.is_empty()
        } else {
            !a.report.is_valid()
        }
    });
    u8::from(failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_content::Finding;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn audit_with(severity: Severity) -> PageAudit {
        PageAudit {
            page: "/states/test".to_string(),
            report: StructureReport {
                findings: vec![Finding {
                    severity,
                    section: "Intro Section".to_string(),
                    message: "too short".to_string(),
                }],
            },
        }
    }

    #[test]
    fn one_state_without_lanes() {
        let audits = audit_catalog(&catalog(), Some("texas"), false).unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].page, "/states/texas");
    }

    #[test]
    fn one_state_with_lanes() {
        let audits = audit_catalog(&catalog(), Some("illinois"), true).unwrap();
        assert_eq!(audits.len(), 16);
        assert!(audits
            .iter()
            .any(|a| a.page == "/states/illinois/lanes/chicago-to-st-louis"));
    }

    #[test]
    fn every_state() {
        let audits = audit_catalog(&catalog(), None, false).unwrap();
        assert_eq!(audits.len(), 49);
    }

    #[test]
    fn generated_pages_have_no_errors() {
        let audits = audit_catalog(&catalog(), None, true).unwrap();
        assert_eq!(exit_code(&audits, false), 0);
    }

    #[test]
    fn unknown_state_is_an_error() {
        assert!(audit_catalog(&catalog(), Some("atlantis"), false).is_err());
    }

    #[test]
    fn warnings_fail_only_when_strict() {
        let audits = vec![audit_with(Severity::Warning)];
        assert_eq!(exit_code(&audits, false), 0);
        assert_eq!(exit_code(&audits, true), 1);
    }

    #[test]
    fn errors_always_fail() {
        let audits = vec![audit_with(Severity::Error)];
        assert_eq!(exit_code(&audits, false), 1);
        assert_eq!(exit_code(&audits, true), 1);
    }
}
