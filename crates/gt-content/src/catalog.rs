//! # Content Catalog
//!
//! Loads the seven content files, builds every registry, and generates the
//! state catalog. The default build embeds the files with `include_str!`,
//! so the binary carries its own content; `from_dir` reads the same file
//! names from disk for editing content without a rebuild.

use std::path::Path;

use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::areas::{resolve_area, AreaRedirect};
use crate::case_study::{CaseStudy, CaseStudyRegistry};
use crate::error::ContentError;
use crate::generator::StateLaneTable;
use crate::job::{JobOpening, JobRegistry};
use crate::lanes::LaneRegistry;
use crate::navigation::{Navigation, NavigationSource};
use crate::partner::{Partner, PartnerRegistry};
use crate::registry::Registry;
use crate::service::{Service, ServiceRegistry};
use crate::state::StateRegistry;
use crate::truck_type::{TruckType, TruckTypeRegistry};

pub const PARTNERS_FILE: &str = "partners.yaml";
pub const TRUCK_TYPES_FILE: &str = "truck_types.yaml";
pub const JOBS_FILE: &str = "jobs.yaml";
pub const SERVICES_FILE: &str = "services.yaml";
pub const CASE_STUDIES_FILE: &str = "case_studies.yaml";
pub const STATE_LANES_FILE: &str = StateLaneTable::FILE;
pub const NAVIGATION_FILE: &str = NavigationSource::FILE;

/// Every content file, in load order.
pub const CONTENT_FILES: [&str; 7] = [
    PARTNERS_FILE,
    TRUCK_TYPES_FILE,
    JOBS_FILE,
    SERVICES_FILE,
    CASE_STUDIES_FILE,
    STATE_LANES_FILE,
    NAVIGATION_FILE,
];

/// Raw text of each content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSources {
    pub partners: String,
    pub truck_types: String,
    pub jobs: String,
    pub services: String,
    pub case_studies: String,
    pub state_lanes: String,
    pub navigation: String,
}

impl ContentSources {
    /// The content compiled into this build.
    pub fn embedded() -> Self {
        Self {
            partners: include_str!("../content/partners.yaml").to_string(),
            truck_types: include_str!("../content/truck_types.yaml").to_string(),
            jobs: include_str!("../content/jobs.yaml").to_string(),
            services: include_str!("../content/services.yaml").to_string(),
            case_studies: include_str!("../content/case_studies.yaml").to_string(),
            state_lanes: include_str!("../content/state_lanes.yaml").to_string(),
            navigation: include_str!("../content/navigation.yaml").to_string(),
        }
    }

    /// Read the content files from `dir`. All seven must be present.
    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        let read = |file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path).map_err(|source| ContentError::Io { path, source })
        };
        Ok(Self {
            partners: read(PARTNERS_FILE)?,
            truck_types: read(TRUCK_TYPES_FILE)?,
            jobs: read(JOBS_FILE)?,
            services: read(SERVICES_FILE)?,
            case_studies: read(CASE_STUDIES_FILE)?,
            state_lanes: read(STATE_LANES_FILE)?,
            navigation: read(NAVIGATION_FILE)?,
        })
    }

    fn files(&self) -> [(&'static str, &str); 7] {
        [
            (PARTNERS_FILE, self.partners.as_str()),
            (TRUCK_TYPES_FILE, self.truck_types.as_str()),
            (JOBS_FILE, self.jobs.as_str()),
            (SERVICES_FILE, self.services.as_str()),
            (CASE_STUDIES_FILE, self.case_studies.as_str()),
            (STATE_LANES_FILE, self.state_lanes.as_str()),
            (NAVIGATION_FILE, self.navigation.as_str()),
        ]
    }

    /// SHA-256 over every file name and body, hex encoded.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (file, body) in self.files() {
            hasher.update(file.as_bytes());
            hasher.update([0u8]);
            hasher.update(body.as_bytes());
            hasher.update([0u8]);
        }
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }
}

#[derive(Deserialize)]
struct PartnersFile {
    partners: Vec<Partner>,
}

#[derive(Deserialize)]
struct TruckTypesFile {
    truck_types: Vec<TruckType>,
}

#[derive(Deserialize)]
struct JobsFile {
    jobs: Vec<JobOpening>,
}

#[derive(Deserialize)]
struct ServicesFile {
    services: Vec<Service>,
}

#[derive(Deserialize)]
struct CaseStudiesFile {
    case_studies: Vec<CaseStudy>,
}

fn parse<T: serde::de::DeserializeOwned>(file: &'static str, source: &str) -> Result<T, ContentError> {
    serde_yaml::from_str(source).map_err(|source| ContentError::Yaml { file, source })
}

/// All site content, loaded and indexed.
#[derive(Debug, Clone)]
pub struct Catalog {
    partners: PartnerRegistry,
    truck_types: TruckTypeRegistry,
    jobs: JobRegistry,
    services: ServiceRegistry,
    case_studies: CaseStudyRegistry,
    states: StateRegistry,
    lanes: LaneRegistry,
    navigation: Navigation,
    fingerprint: String,
}

impl Catalog {
    pub fn from_sources(sources: &ContentSources) -> Result<Self, ContentError> {
        let partners = Registry::from_entries(
            parse::<PartnersFile>(PARTNERS_FILE, &sources.partners)?.partners,
        )?;
        let truck_types = Registry::from_entries(
            parse::<TruckTypesFile>(TRUCK_TYPES_FILE, &sources.truck_types)?.truck_types,
        )?;
        let jobs = Registry::from_entries(parse::<JobsFile>(JOBS_FILE, &sources.jobs)?.jobs)?;
        let services =
            Registry::from_entries(parse::<ServicesFile>(SERVICES_FILE, &sources.services)?.services)?;
        let case_studies = Registry::from_entries(
            parse::<CaseStudiesFile>(CASE_STUDIES_FILE, &sources.case_studies)?.case_studies,
        )?;

        let generated = StateLaneTable::from_yaml(&sources.state_lanes)?.generate()?;
        let lanes = LaneRegistry::from_states(&generated)?;
        let states = Registry::from_entries(generated)?;

        let navigation = Navigation::build(
            &NavigationSource::from_yaml(&sources.navigation)?,
            &truck_types,
            &states,
        );
        for title in navigation.unmatched_states() {
            tracing::debug!(state = title, "areas menu entry has no state page");
        }

        let catalog = Self {
            partners,
            truck_types,
            jobs,
            services,
            case_studies,
            states,
            lanes,
            navigation,
            fingerprint: sources.fingerprint(),
        };
        tracing::info!(
            partners = catalog.partners.len(),
            truck_types = catalog.truck_types.len(),
            jobs = catalog.jobs.len(),
            services = catalog.services.len(),
            case_studies = catalog.case_studies.len(),
            states = catalog.states.len(),
            lanes = catalog.lanes.len(),
            fingerprint = %catalog.fingerprint,
            "content catalog loaded"
        );
        Ok(catalog)
    }

    /// The content compiled into this build.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_sources(&ContentSources::embedded())
    }

    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        Self::from_sources(&ContentSources::from_dir(dir)?)
    }

    pub fn partners(&self) -> &PartnerRegistry {
        &self.partners
    }

    pub fn truck_types(&self) -> &TruckTypeRegistry {
        &self.truck_types
    }

    pub fn jobs(&self) -> &JobRegistry {
        &self.jobs
    }

    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    pub fn case_studies(&self) -> &CaseStudyRegistry {
        &self.case_studies
    }

    pub fn states(&self) -> &StateRegistry {
        &self.states
    }

    pub fn lanes(&self) -> &LaneRegistry {
        &self.lanes
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Hex SHA-256 of the sources this catalog was built from.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Resolve the path segments after `/areas-we-serve/`.
    pub fn resolve_area<'a, I>(&self, segments: I) -> AreaRedirect
    where
        I: IntoIterator<Item = &'a str>,
    {
        resolve_area(segments, &self.states)
    }
}
