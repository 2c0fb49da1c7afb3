//! Driver success stories (`/case-studies/{slug}`).
//!
//! The listing page shows every study in order and a carousel of the
//! featured ones; the detail page adds the challenge, solution and a
//! before/after metrics table.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::registry::{CatalogEntry, Registry};

/// One row of the before/after table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CaseStudyMetric {
    pub label: String,
    pub before: String,
    pub after: String,
}

/// A driver case study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CaseStudy {
    /// Display number, shown as "Case Study #id".
    pub id: String,
    pub slug: String,
    pub driver_name: String,
    /// Short lane label, e.g. `Dallas, TX → Atlanta, GA`.
    pub lane: String,
    pub region: String,
    pub equipment_type: String,
    pub equipment_badge: String,
    /// Headline lift, e.g. `+38%`.
    pub revenue_increase: String,
    pub rpm_before: String,
    pub rpm_after: String,
    pub summary: String,
    pub challenge: String,
    pub solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_optimization: Option<String>,
    pub outcome: String,
    pub metrics: Vec<CaseStudyMetric>,
    #[serde(default)]
    pub featured: bool,
}

/// Card shown on the listing page and in the featured carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CaseStudySummary {
    pub id: String,
    pub slug: String,
    pub driver_name: String,
    pub lane: String,
    pub equipment_badge: String,
    pub outcome: String,
    pub revenue_increase: String,
    pub rpm_before: String,
    pub rpm_after: String,
    pub summary: String,
    pub featured: bool,
}

impl CaseStudy {
    pub fn summary(&self) -> CaseStudySummary {
        CaseStudySummary {
            id: self.id.clone(),
            slug: self.slug.clone(),
            driver_name: self.driver_name.clone(),
            lane: self.lane.clone(),
            equipment_badge: self.equipment_badge.clone(),
            outcome: self.outcome.clone(),
            revenue_increase: self.revenue_increase.clone(),
            rpm_before: self.rpm_before.clone(),
            rpm_after: self.rpm_after.clone(),
            summary: self.summary.clone(),
            featured: self.featured,
        }
    }
}

impl CatalogEntry for CaseStudy {
    const KIND: &'static str = "case study";

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Registry of case studies.
pub type CaseStudyRegistry = Registry<CaseStudy>;

impl Registry<CaseStudy> {
    /// Studies flagged for the carousel, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &CaseStudy> {
        self.iter().filter(|study| study.featured)
    }
}
