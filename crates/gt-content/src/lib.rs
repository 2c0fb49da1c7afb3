//! # gt-content: Site Content Catalog
//!
//! Everything the site renders from data rather than code: brokerage
//! partners, truck types, careers, services, driver case studies, the
//! 49-state lane catalog and the navigation menus. Content lives in YAML
//! under `content/` and is embedded at compile time.
//!
//! ## Key Design Principles
//!
//! 1. **Registries are immutable.** A [`Registry`] is built once, validated
//!    (every slug parses, no duplicates), and then only read. The HTTP layer
//!    shares one [`Catalog`] behind an `Arc` without locks.
//!
//! 2. **States are generated, not hand-written.** The lane table lists each
//!    state's 15 lanes; [`generator`] expands it into full state and lane
//!    pages. Estimated lane figures come from a digest of the lane key, so
//!    the output is reproducible.
//!
//! 3. **Page outlines are data.** [`structure`] holds the section outline of
//!    state and lane pages and audits assembled pages against it.
//!
//! ## Crate Policy
//!
//! - Depends on `gt-core` only within the workspace.
//! - No I/O outside [`Catalog::from_dir`].
//! - No `.unwrap()` outside tests.

pub mod areas;
pub mod case_study;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod job;
pub mod lanes;
pub mod navigation;
pub mod partner;
pub mod registry;
pub mod service;
pub mod state;
pub mod structure;
pub mod truck_type;

pub use areas::{resolve_area, resolve_area_path, AreaRedirect};
pub use case_study::{CaseStudy, CaseStudyMetric, CaseStudyRegistry, CaseStudySummary};
pub use catalog::{Catalog, ContentSources, CONTENT_FILES};
pub use error::ContentError;
pub use generator::{generate_state, LaneEstimate, StateLaneTable, StateSeed};
pub use job::{JobOpening, JobRegistry, JobSummary, Qualifications};
pub use lanes::LaneRegistry;
pub use navigation::{NavLink, Navigation, RegionMenu, RegionStateLink};
pub use partner::{Partner, PartnerRegistry, PartnerSummary};
pub use registry::{CatalogEntry, Registry};
pub use service::{Service, ServiceRegistry};
pub use state::{Lane, State, StateRegistry, StateSummary};
pub use structure::{
    audit_lane_page, audit_state_page, Finding, LanePage, Severity, StatePage, StructureReport,
};
pub use truck_type::{TitledItem, TruckType, TruckTypeRegistry, TruckTypeSummary};
