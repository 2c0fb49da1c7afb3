//! # States and Lanes
//!
//! A [`State`] page (`/states/{slug}`) carries its top freight lanes; each
//! [`Lane`] has its own page under `/states/{state}/lanes/{lane}`. Both are
//! produced by [`crate::generator`] from the compact lane table.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::registry::{CatalogEntry, Registry};

/// A named facility with a one-line description (ports, terminals, crossings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NamedNote {
    pub name: String,
    pub description: String,
}

/// A dated note in the rate history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PeriodNote {
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuarterTrend {
    pub rate_movement: String,
    pub weather_impact: String,
    pub strategy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeasonalTrends {
    pub q1: QuarterTrend,
    pub q2: QuarterTrend,
    pub q3: QuarterTrend,
    pub q4: QuarterTrend,
}

impl SeasonalTrends {
    pub fn quarters(&self) -> [(&'static str, &QuarterTrend); 4] {
        [
            ("Q1", &self.q1),
            ("Q2", &self.q2),
            ("Q3", &self.q3),
            ("Q4", &self.q4),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TruckStop {
    pub name: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeightLimits {
    pub single_axle: String,
    pub tandem_axle: String,
    pub gross_vehicle_weight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SizeLimits {
    pub width: String,
    pub height: String,
    pub length: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Permit {
    #[serde(rename = "type")]
    pub permit_type: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RateTrends {
    pub historical_rates: Vec<PeriodNote>,
    pub market_corrections: Vec<PeriodNote>,
    pub projection_2025: String,
    pub rate_drivers: Vec<String>,
}

/// A return lane recommended to cut empty miles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BackhaulLane {
    pub name: String,
    pub description: String,
    pub rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeadheadStrategy {
    pub outbound_percentage: String,
    pub inbound_percentage: String,
    pub best_backhaul_lanes: Vec<BackhaulLane>,
    pub positioning_strategies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A state page and its lanes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct State {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub slug: String,
    pub abbreviation: String,
    pub tagline: String,
    pub description: String,
    pub long_description: String,
    pub overview: String,
    pub market_overview: String,
    pub average_rates: String,
    pub market_trends: Vec<String>,
    pub key_industries: Vec<String>,
    pub major_cities: Vec<String>,
    pub common_freight_types: Vec<String>,
    pub benefits: Vec<String>,
    pub challenges: Vec<String>,
    pub regulations: Vec<String>,
    pub seasonal_considerations: Vec<String>,
    pub seasonal_trends: SeasonalTrends,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<NamedNote>,
    pub intermodal_centers: Vec<NamedNote>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub border_crossings: Vec<NamedNote>,
    pub truck_stops: Vec<TruckStop>,
    pub parking_difficulty: String,
    pub strategic_positioning: Vec<String>,
    pub weight_limits: WeightLimits,
    pub size_limits: SizeLimits,
    pub permits: Vec<Permit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emission_laws: Option<String>,
    pub rate_trends: RateTrends,
    pub deadhead_strategy: DeadheadStrategy,
    pub dispatcher_insights: Vec<String>,
    pub faq: Vec<FaqEntry>,
    pub hero_image: String,
    pub content_image: String,
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub cta_headline: String,
    pub cta_description: String,
    pub service_type: String,
    pub area_served: String,
    pub lanes: Vec<Lane>,
}

/// Listing row for `/states`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StateSummary {
    pub slug: String,
    pub name: String,
    pub abbreviation: String,
    pub tagline: String,
    pub lane_count: usize,
}

impl State {
    pub fn summary(&self) -> StateSummary {
        StateSummary {
            slug: self.slug.clone(),
            name: self.name.clone(),
            abbreviation: self.abbreviation.clone(),
            tagline: self.tagline.clone(),
            lane_count: self.lanes.len(),
        }
    }
}

impl CatalogEntry for State {
    const KIND: &'static str = "state";

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Registry of states.
pub type StateRegistry = Registry<State>;

impl Registry<State> {
    /// Lanes of a state, or an empty slice when the state is unknown.
    pub fn lanes_by_state(&self, state_slug: &str) -> &[Lane] {
        self.get_by_slug(state_slug)
            .map(|state| state.lanes.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeasonalBehavior {
    pub q1_slow: String,
    pub q4_peak: String,
    pub produce_season: String,
    pub hurricane_risk: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RateNegotiation {
    pub when_to_book: Vec<String>,
    pub what_brokers_pay_more: Vec<String>,
    pub when_to_avoid: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BackhaulStrategy {
    pub best_return_cities: Vec<String>,
    pub deadhead_risk_percentage: String,
    pub alternative_routes: Vec<String>,
}

/// A freight lane out of a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Lane {
    /// `{state_slug}-{lane slug without dashes}`.
    pub id: String,
    /// `Origin → Destination`.
    pub name: String,
    /// `Origin to Destination`.
    pub display_name: String,
    pub slug: String,
    pub state_slug: String,
    pub description: String,
    /// `Origin, ST`.
    pub origin: String,
    pub destination: String,
    pub distance: String,
    pub average_transit_time: String,
    pub average_rate: String,
    pub rate_per_mile: String,
    pub load_frequency: String,
    pub peak_seasons: Vec<String>,
    pub freight_types: Vec<String>,
    pub key_features: Vec<String>,
    pub benefits: Vec<String>,
    pub challenges: Vec<String>,
    pub tips: Vec<String>,
    pub primary_commodities: Vec<String>,
    pub secondary_commodities: Vec<String>,
    pub seasonal_cargo: Vec<String>,
    pub seasonal_behavior: SeasonalBehavior,
    pub rate_negotiation: RateNegotiation,
    pub backhaul_strategy: BackhaulStrategy,
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
}

impl Lane {
    /// Origin city without the state suffix.
    pub fn origin_city(&self) -> &str {
        self.origin
            .split_once(", ")
            .map_or(self.origin.as_str(), |(city, _)| city)
    }
}
