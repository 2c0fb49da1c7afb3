//! Equipment classes served by the dispatch desk (`/truck-type/{slug}`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::registry::{CatalogEntry, Registry};

/// A titled bullet with supporting copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TitledItem {
    pub title: String,
    pub description: String,
}

/// A truck type page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TruckType {
    pub name: String,
    pub display_name: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub long_description: String,
    pub key_features_description: String,
    /// Equipment size line under the hero, e.g. `Any type of 48'-53' trucks`.
    pub subtitle: String,
    pub hero_image: String,
    pub content_image: String,
    pub features: Vec<TitledItem>,
    pub benefits: Vec<TitledItem>,
    pub key_points: Vec<String>,
    pub cta_headline: String,
    pub cta_description: String,
    pub service_type: String,
    pub area_served: String,
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
}

/// Listing-card view of a truck type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TruckTypeSummary {
    pub slug: String,
    pub name: String,
    pub display_name: String,
    pub tagline: String,
    pub subtitle: String,
}

impl TruckType {
    pub fn summary(&self) -> TruckTypeSummary {
        TruckTypeSummary {
            slug: self.slug.clone(),
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            tagline: self.tagline.clone(),
            subtitle: self.subtitle.clone(),
        }
    }
}

impl CatalogEntry for TruckType {
    const KIND: &'static str = "truck type";

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Registry of truck types.
pub type TruckTypeRegistry = Registry<TruckType>;
