//! Careers page openings (`/careers/{slug}`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::registry::{CatalogEntry, Registry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Qualifications {
    pub required: Vec<String>,
    #[serde(default)]
    pub preferred: Vec<String>,
}

/// An open position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobOpening {
    /// Stable numeric-string id used by the legacy careers links.
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Public requisition code, e.g. `GT001`.
    pub job_id: String,
    pub posted_date: String,
    pub work_arrangement: String,
    pub location: String,
    pub department: String,
    pub employment_type: String,
    pub introduction: String,
    pub description: String,
    pub duties: Vec<String>,
    pub qualifications: Qualifications,
    pub what_we_offer: Vec<String>,
    pub encouragement_text: String,
    pub apply_link: String,
}

/// Listing row for the careers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub job_id: String,
    pub location: String,
    pub work_arrangement: String,
    pub employment_type: String,
}

impl JobOpening {
    pub fn summary(&self) -> JobSummary {
        JobSummary {
            id: self.id.clone(),
            slug: self.slug.clone(),
            title: self.title.clone(),
            job_id: self.job_id.clone(),
            location: self.location.clone(),
            work_arrangement: self.work_arrangement.clone(),
            employment_type: self.employment_type.clone(),
        }
    }
}

impl CatalogEntry for JobOpening {
    const KIND: &'static str = "job";

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Registry of job openings.
pub type JobRegistry = Registry<JobOpening>;

impl Registry<JobOpening> {
    /// Look up an opening by its `id` rather than its slug.
    pub fn get_by_id(&self, id: &str) -> Option<&JobOpening> {
        self.iter().find(|job| job.id == id)
    }
}
