//! Site navigation menus.
//!
//! `navigation.yaml` lists the menu titles; hrefs are derived here so they
//! always agree with the slug rules the page routes use.

use gt_core::{state_to_slug, title_to_slug};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::areas::{resolve_area, AreaRedirect};
use crate::error::ContentError;
use crate::state::StateRegistry;
use crate::truck_type::TruckTypeRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavLink {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSource {
    pub title: String,
    pub slug: String,
    pub states: Vec<String>,
}

/// The raw `navigation.yaml` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSource {
    pub services_menu: Vec<String>,
    pub about_menu: Vec<NavLink>,
    pub regions: Vec<RegionSource>,
}

impl NavigationSource {
    pub const FILE: &'static str = "navigation.yaml";

    pub fn from_yaml(source: &str) -> Result<Self, ContentError> {
        serde_yaml::from_str(source).map_err(|source| ContentError::Yaml {
            file: Self::FILE,
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionStateLink {
    pub title: String,
    pub slug: String,
    pub href: String,
    /// Whether the title resolves to a state page.
    pub has_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionMenu {
    pub title: String,
    pub slug: String,
    pub href: String,
    pub states: Vec<RegionStateLink>,
}

/// The resolved menu tree served to the site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Navigation {
    pub services: Vec<NavLink>,
    pub about: Vec<NavLink>,
    pub truck_types: Vec<NavLink>,
    pub areas_we_serve: Vec<RegionMenu>,
}

impl Navigation {
    pub fn build(
        source: &NavigationSource,
        truck_types: &TruckTypeRegistry,
        states: &StateRegistry,
    ) -> Self {
        let services = source
            .services_menu
            .iter()
            .map(|title| NavLink {
                title: title.clone(),
                href: format!("/services#{}", title_to_slug(title)),
            })
            .collect();

        let truck_types = truck_types
            .iter()
            .map(|truck| NavLink {
                title: truck.name.clone(),
                href: format!("/truck-type/{}", truck.slug),
            })
            .collect();

        let areas_we_serve = source
            .regions
            .iter()
            .map(|region| RegionMenu {
                title: region.title.clone(),
                slug: region.slug.clone(),
                href: format!("/areas-we-serve/{}", region.slug),
                states: region
                    .states
                    .iter()
                    .map(|title| {
                        let slug = state_to_slug(title);
                        RegionStateLink {
                            title: title.clone(),
                            href: format!("/areas-we-serve/{}/{slug}", region.slug),
                            has_page: matches!(
                                resolve_area([title.as_str()], states),
                                AreaRedirect::State(_)
                            ),
                            slug,
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            services,
            about: source.about_menu.clone(),
            truck_types,
            areas_we_serve,
        }
    }

    /// Region state titles with no state page behind them.
    pub fn unmatched_states(&self) -> Vec<&str> {
        self.areas_we_serve
            .iter()
            .flat_map(|region| region.states.iter())
            .filter(|link| !link.has_page)
            .map(|link| link.title.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_state, StateSeed};
    use crate::registry::Registry;

    const SOURCE: &str = r#"
services_menu:
  - Free Business Audit Report
  - Rate Maximization & Negotiation
about_menu:
  - title: About Us
    href: /about
regions:
  - title: Northeast
    slug: northeast
    states: [New Jersey, New York]
"#;

    fn states() -> StateRegistry {
        let nj = generate_state(&StateSeed {
            name: "NEW JERSEY".into(),
            abbreviation: "NJ".into(),
            lanes: vec![],
        })
        .unwrap();
        Registry::from_entries(vec![nj]).unwrap()
    }

    #[test]
    fn builds_menus() {
        let source = NavigationSource::from_yaml(SOURCE).unwrap();
        let trucks = TruckTypeRegistry::from_entries(Vec::new()).unwrap();
        let nav = Navigation::build(&source, &trucks, &states());

        assert_eq!(nav.services[0].href, "/services#free-business-audit-report");
        assert_eq!(
            nav.services[1].href,
            "/services#rate-maximization-and-negotiation"
        );
        assert_eq!(nav.about[0].href, "/about");
        assert!(nav.truck_types.is_empty());

        let region = &nav.areas_we_serve[0];
        assert_eq!(region.href, "/areas-we-serve/northeast");
        assert_eq!(region.states[0].href, "/areas-we-serve/northeast/new-jersey");
        assert!(region.states[0].has_page);
        assert_eq!(region.states[1].slug, "new-york");
        assert!(!region.states[1].has_page);
        assert_eq!(nav.unmatched_states(), vec!["New York"]);
    }

    #[test]
    fn malformed_yaml_names_the_file() {
        let err = NavigationSource::from_yaml("services_menu: 3").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse navigation.yaml"));
    }
}
