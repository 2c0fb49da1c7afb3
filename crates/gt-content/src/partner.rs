//! Freight brokerage partners (`/partners/{slug}`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::registry::{CatalogEntry, Registry};

/// A brokerage the dispatch desk books freight with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Partner {
    pub name: String,
    pub display_name: String,
    pub slug: String,
    pub tagline: String,
    pub overview: String,
    pub long_description: String,
    pub core_services: Vec<String>,
    /// Why carriers pick this broker. Not every partner page has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_choose: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    pub relationship: String,
    pub cta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
}

/// Listing-card view of a partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PartnerSummary {
    pub slug: String,
    pub name: String,
    pub display_name: String,
    pub tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Partner {
    pub fn summary(&self) -> PartnerSummary {
        PartnerSummary {
            slug: self.slug.clone(),
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            tagline: self.tagline.clone(),
            logo: self.logo.clone(),
        }
    }
}

impl CatalogEntry for Partner {
    const KIND: &'static str = "partner";

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Registry of brokerage partners.
pub type PartnerRegistry = Registry<Partner>;
