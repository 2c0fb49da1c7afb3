//! Dispatch service catalog (`/services/{id}`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::registry::{CatalogEntry, Registry};

/// A service card. The `id` doubles as the URL slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    /// Icon name from the site's icon set.
    pub icon: String,
    pub button_text: String,
    pub button_link: String,
}

impl CatalogEntry for Service {
    const KIND: &'static str = "service";

    fn slug(&self) -> &str {
        &self.id
    }
}

/// Registry of services, keyed by `id`.
pub type ServiceRegistry = Registry<Service>;
