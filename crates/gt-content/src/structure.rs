//! # Page Structure
//!
//! Every state page renders the same 14 sections in a fixed order and every
//! lane page the same 9. This module holds that outline, assembles the page
//! models from catalog entities, and audits them against the outline.
//!
//! Audit findings come in two severities. Missing sections and list counts
//! outside their bounds are errors: the page would render broken or off
//! template. Word counts outside their target band are warnings, since copy
//! length is an editorial target rather than a rendering constraint.

use std::ops::RangeInclusive;

use gt_core::word_count;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::{
    BackhaulStrategy, DeadheadStrategy, FaqEntry, Lane, NamedNote, Permit, RateNegotiation,
    RateTrends, SeasonalBehavior, SeasonalTrends, SizeLimits, State, TruckStop, WeightLimits,
};

/// One section of a page outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSpec {
    pub order: u8,
    pub name: &'static str,
    pub description: &'static str,
}

const fn section(order: u8, name: &'static str, description: &'static str) -> SectionSpec {
    SectionSpec {
        order,
        name,
        description,
    }
}

pub const STATE_PAGE_SECTIONS: [SectionSpec; 14] = [
    section(1, "State H1", "Main page heading with state name and abbreviation"),
    section(2, "Intro Section", "State freight importance, major industries and the owner-operator angle"),
    section(3, "State Market Overview", "Market data: rates, trends and major cities"),
    section(4, "Top 15 Freight Lanes", "The state's top lanes with per-lane metrics"),
    section(5, "Top Commodities", "Major commodity categories"),
    section(6, "Seasonal Trends", "Quarterly rate movement, weather impact and strategy"),
    section(7, "Major Freight Hubs", "Distribution cities, ports, intermodal centers and border crossings"),
    section(8, "Truck Parking & Fuel", "Truck stops, parking difficulty and positioning advice"),
    section(9, "Weigh Stations & Regulations", "Weight and size limits, state rules, permits and emission laws"),
    section(10, "Rate Trends", "Historical rates, market corrections, projection and rate drivers"),
    section(11, "Deadhead Strategy", "Outbound and inbound balance, backhaul lanes and positioning"),
    section(12, "Professional Dispatcher Insights", "Experience-based tactical lessons"),
    section(13, "FAQ", "Frequently asked questions"),
    section(14, "CTA", "Call to action with service benefits"),
];

pub const LANE_PAGE_SECTIONS: [SectionSpec; 9] = [
    section(1, "Lane H1", "Main page heading with origin and destination cities"),
    section(2, "Quick Overview", "Why the lane matters, volume, equipment and consistency"),
    section(3, "Lane Statistics Block", "Distance, rates, transit time, deadhead risk and booking days"),
    section(4, "What Moves on This Lane?", "Primary, secondary and seasonal cargo"),
    section(5, "Seasonal Behavior", "Q1 slowdown, Q4 peak, produce season and hurricane risk"),
    section(6, "Rate Negotiation Strategy", "When to book, what pays more and when to walk away"),
    section(7, "Backhaul Strategy", "Return cities, deadhead risk and alternative routes"),
    section(8, "Dispatcher Insider Tips", "Tactical advice for the lane"),
    section(9, "CTA", "Call to action for the lane"),
];

pub const INTRO_WORDS: RangeInclusive<usize> = 150..=200;
pub const QUICK_OVERVIEW_WORDS: RangeInclusive<usize> = 135..=165;
pub const STATE_LANE_COUNT: usize = 15;
pub const COMMODITY_CATEGORIES: RangeInclusive<usize> = 5..=7;
pub const DISPATCHER_INSIGHTS: RangeInclusive<usize> = 5..=8;
pub const FAQ_ENTRIES: RangeInclusive<usize> = 6..=8;
pub const DISPATCHER_TIPS: RangeInclusive<usize> = 2..=5;

pub const STATE_CTA_BENEFITS: [&str; 4] = [
    "24/7 Load Finding",
    "Rate Negotiation",
    "Backhaul Optimization",
    "Compliance Support",
];

const LANE_CTA_DESCRIPTION: &str = "Our dispatch team secures premium loads on this lane.";
const BEST_BOOKING_DAYS: &str = "Monday-Wednesday";

pub fn state_h1(name: &str, abbreviation: &str) -> String {
    format!("{name} Truck Dispatcher | {abbreviation} Freight Loads & Dispatch Services")
}

pub fn lane_h1(origin: &str, destination: &str) -> String {
    format!("{origin} to {destination} Freight Loads | Truck Dispatch Services")
}

pub fn state_cta_headline(name: &str) -> String {
    format!("Get Professional {name} Truck Dispatching Services")
}

pub fn lane_cta_headline(origin: &str, destination: &str) -> String {
    format!("Need help running {origin} to {destination} consistently?")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CtaSection {
    pub headline: String,
    pub description: String,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MarketOverviewSection {
    pub overview: String,
    pub average_rates: String,
    pub market_trends: Vec<String>,
    pub major_cities: Vec<String>,
}

/// A row of the "Top 15 Freight Lanes" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LaneListing {
    pub name: String,
    pub href: String,
    pub distance: String,
    pub average_rate: String,
    pub daily_load_volume: String,
    pub commodities: Vec<String>,
    pub peak_days: String,
    pub deadhead_return: String,
    pub dispatcher_tip: Option<String>,
}

impl LaneListing {
    fn from_lane(lane: &Lane) -> Self {
        Self {
            name: lane.name.clone(),
            href: format!("/states/{}/lanes/{}", lane.state_slug, lane.slug),
            distance: lane.distance.clone(),
            average_rate: lane.average_rate.clone(),
            daily_load_volume: lane.load_frequency.clone(),
            commodities: lane.primary_commodities.clone(),
            peak_days: BEST_BOOKING_DAYS.to_string(),
            deadhead_return: lane.backhaul_strategy.deadhead_risk_percentage.clone(),
            dispatcher_tip: lane.tips.first().cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FreightHubsSection {
    pub distribution_cities: Vec<String>,
    pub ports: Vec<NamedNote>,
    pub intermodal_centers: Vec<NamedNote>,
    pub border_crossings: Vec<NamedNote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParkingFuelSection {
    pub truck_stops: Vec<TruckStop>,
    pub parking_difficulty: String,
    pub strategic_positioning: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegulationsSection {
    pub weight_limits: WeightLimits,
    pub size_limits: SizeLimits,
    pub state_rules: Vec<String>,
    pub permits: Vec<Permit>,
    pub emission_laws: Option<String>,
}

/// A state page in section order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatePage {
    pub h1: String,
    pub intro: String,
    pub market_overview: MarketOverviewSection,
    pub top_lanes: Vec<LaneListing>,
    pub top_commodities: Vec<String>,
    pub seasonal_trends: SeasonalTrends,
    pub freight_hubs: FreightHubsSection,
    pub parking_fuel: ParkingFuelSection,
    pub regulations: RegulationsSection,
    pub rate_trends: RateTrends,
    pub deadhead_strategy: DeadheadStrategy,
    pub dispatcher_insights: Vec<String>,
    pub faq: Vec<FaqEntry>,
    pub cta: CtaSection,
}

impl StatePage {
    pub fn from_state(state: &State) -> Self {
        let intro = [
            state.description.as_str(),
            state.long_description.as_str(),
            state.overview.as_str(),
            state.market_overview.as_str(),
        ]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

        Self {
            h1: state_h1(&state.name, &state.abbreviation),
            intro,
            market_overview: MarketOverviewSection {
                overview: state.market_overview.clone(),
                average_rates: state.average_rates.clone(),
                market_trends: state.market_trends.clone(),
                major_cities: state.major_cities.clone(),
            },
            top_lanes: state.lanes.iter().map(LaneListing::from_lane).collect(),
            top_commodities: state.key_industries.clone(),
            seasonal_trends: state.seasonal_trends.clone(),
            freight_hubs: FreightHubsSection {
                distribution_cities: state.major_cities.clone(),
                ports: state.ports.clone(),
                intermodal_centers: state.intermodal_centers.clone(),
                border_crossings: state.border_crossings.clone(),
            },
            parking_fuel: ParkingFuelSection {
                truck_stops: state.truck_stops.clone(),
                parking_difficulty: state.parking_difficulty.clone(),
                strategic_positioning: state.strategic_positioning.clone(),
            },
            regulations: RegulationsSection {
                weight_limits: state.weight_limits.clone(),
                size_limits: state.size_limits.clone(),
                state_rules: state.regulations.clone(),
                permits: state.permits.clone(),
                emission_laws: state.emission_laws.clone(),
            },
            rate_trends: state.rate_trends.clone(),
            deadhead_strategy: state.deadhead_strategy.clone(),
            dispatcher_insights: state.dispatcher_insights.clone(),
            faq: state.faq.clone(),
            cta: CtaSection {
                headline: state_cta_headline(&state.name),
                description: state.cta_description.clone(),
                benefits: STATE_CTA_BENEFITS.iter().map(|b| (*b).to_string()).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LaneStatistics {
    pub distance: String,
    pub average_rate: String,
    pub rate_per_mile: String,
    pub average_transit_time: String,
    pub deadhead_risk: String,
    pub load_frequency: String,
    pub best_booking_days: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LaneCommodities {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub seasonal: Vec<String>,
}

/// A lane page in section order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LanePage {
    pub h1: String,
    pub quick_overview: String,
    pub statistics: LaneStatistics,
    pub commodities: LaneCommodities,
    pub seasonal_behavior: SeasonalBehavior,
    pub rate_negotiation: RateNegotiation,
    pub backhaul_strategy: BackhaulStrategy,
    pub tips: Vec<String>,
    pub cta: CtaSection,
}

impl LanePage {
    pub fn from_lane(lane: &Lane) -> Self {
        let origin = lane.origin_city();
        Self {
            h1: lane_h1(origin, &lane.destination),
            quick_overview: lane.description.clone(),
            statistics: LaneStatistics {
                distance: lane.distance.clone(),
                average_rate: lane.average_rate.clone(),
                rate_per_mile: lane.rate_per_mile.clone(),
                average_transit_time: lane.average_transit_time.clone(),
                deadhead_risk: lane.backhaul_strategy.deadhead_risk_percentage.clone(),
                load_frequency: lane.load_frequency.clone(),
                best_booking_days: BEST_BOOKING_DAYS.to_string(),
            },
            commodities: LaneCommodities {
                primary: lane.primary_commodities.clone(),
                secondary: lane.secondary_commodities.clone(),
                seasonal: lane.seasonal_cargo.clone(),
            },
            seasonal_behavior: lane.seasonal_behavior.clone(),
            rate_negotiation: lane.rate_negotiation.clone(),
            backhaul_strategy: lane.backhaul_strategy.clone(),
            tips: lane.tips.clone(),
            cta: CtaSection {
                headline: lane_cta_headline(origin, &lane.destination),
                description: LANE_CTA_DESCRIPTION.to_string(),
                benefits: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Finding {
    pub severity: Severity,
    pub section: String,
    pub message: String,
}

/// Outcome of a page audit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StructureReport {
    pub findings: Vec<Finding>,
}

impl StructureReport {
    /// No error findings. Warnings do not invalidate a page.
    pub fn is_valid(&self) -> bool {
        !self.has(Severity::Error)
    }

    pub fn has(&self, severity: Severity) -> bool {
        self.findings.iter().any(|f| f.severity == severity)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    fn push(&mut self, severity: Severity, section: &SectionSpec, message: String) {
        self.findings.push(Finding {
            severity,
            section: section.name.to_string(),
            message,
        });
    }

    fn require(&mut self, section: &SectionSpec, present: bool) -> bool {
        if !present {
            self.push(
                Severity::Error,
                section,
                format!("Missing required section: {}", section.name),
            );
        }
        present
    }

    fn count_in_range(
        &mut self,
        severity: Severity,
        section: &SectionSpec,
        label: &str,
        count: usize,
        range: &RangeInclusive<usize>,
    ) {
        if !range.contains(&count) {
            self.push(
                severity,
                section,
                format!(
                    "{label} ({count}) must be between {} and {}",
                    range.start(),
                    range.end()
                ),
            );
        }
    }
}

fn non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

pub fn audit_state_page(page: &StatePage) -> StructureReport {
    let s = &STATE_PAGE_SECTIONS;
    let mut report = StructureReport::default();

    report.require(&s[0], non_blank(&page.h1));

    if report.require(&s[1], non_blank(&page.intro)) {
        let words = word_count(&page.intro);
        report.count_in_range(
            Severity::Warning,
            &s[1],
            "Intro section word count",
            words,
            &INTRO_WORDS,
        );
    }

    report.require(
        &s[2],
        non_blank(&page.market_overview.overview) || non_blank(&page.market_overview.average_rates),
    );

    if report.require(&s[3], !page.top_lanes.is_empty()) && page.top_lanes.len() != STATE_LANE_COUNT
    {
        report.push(
            Severity::Error,
            &s[3],
            format!(
                "Top freight lanes count ({}) must be exactly {STATE_LANE_COUNT}",
                page.top_lanes.len()
            ),
        );
    }

    if report.require(&s[4], !page.top_commodities.is_empty()) {
        report.count_in_range(
            Severity::Warning,
            &s[4],
            "Commodity category count",
            page.top_commodities.len(),
            &COMMODITY_CATEGORIES,
        );
    }

    report.require(
        &s[5],
        page.seasonal_trends
            .quarters()
            .iter()
            .all(|(_, q)| non_blank(&q.rate_movement)),
    );

    let hubs = &page.freight_hubs;
    report.require(
        &s[6],
        !(hubs.distribution_cities.is_empty()
            && hubs.ports.is_empty()
            && hubs.intermodal_centers.is_empty()
            && hubs.border_crossings.is_empty()),
    );

    report.require(
        &s[7],
        !page.parking_fuel.truck_stops.is_empty() || non_blank(&page.parking_fuel.parking_difficulty),
    );

    report.require(
        &s[8],
        non_blank(&page.regulations.weight_limits.gross_vehicle_weight)
            || !page.regulations.permits.is_empty(),
    );

    report.require(
        &s[9],
        !page.rate_trends.historical_rates.is_empty() || non_blank(&page.rate_trends.projection_2025),
    );

    report.require(
        &s[10],
        non_blank(&page.deadhead_strategy.outbound_percentage)
            || !page.deadhead_strategy.best_backhaul_lanes.is_empty(),
    );

    if report.require(&s[11], !page.dispatcher_insights.is_empty()) {
        report.count_in_range(
            Severity::Error,
            &s[11],
            "Dispatcher insights count",
            page.dispatcher_insights.len(),
            &DISPATCHER_INSIGHTS,
        );
    }

    if report.require(&s[12], !page.faq.is_empty()) {
        report.count_in_range(
            Severity::Error,
            &s[12],
            "FAQ count",
            page.faq.len(),
            &FAQ_ENTRIES,
        );
    }

    report.require(&s[13], non_blank(&page.cta.headline));

    report
}

pub fn audit_lane_page(page: &LanePage) -> StructureReport {
    let s = &LANE_PAGE_SECTIONS;
    let mut report = StructureReport::default();

    report.require(&s[0], non_blank(&page.h1));

    if report.require(&s[1], non_blank(&page.quick_overview)) {
        let words = word_count(&page.quick_overview);
        if !QUICK_OVERVIEW_WORDS.contains(&words) {
            report.push(
                Severity::Warning,
                &s[1],
                format!("Quick overview word count ({words}) should be approximately 150"),
            );
        }
    }

    report.require(
        &s[2],
        non_blank(&page.statistics.distance) && non_blank(&page.statistics.average_rate),
    );

    report.require(
        &s[3],
        !(page.commodities.primary.is_empty()
            && page.commodities.secondary.is_empty()
            && page.commodities.seasonal.is_empty()),
    );

    report.require(&s[4], non_blank(&page.seasonal_behavior.q4_peak));

    let negotiation = &page.rate_negotiation;
    report.require(
        &s[5],
        !(negotiation.when_to_book.is_empty()
            && negotiation.what_brokers_pay_more.is_empty()
            && negotiation.when_to_avoid.is_empty()),
    );

    report.require(&s[6], !page.backhaul_strategy.best_return_cities.is_empty());

    if report.require(&s[7], !page.tips.is_empty()) {
        report.count_in_range(
            Severity::Error,
            &s[7],
            "Dispatcher tips count",
            page.tips.len(),
            &DISPATCHER_TIPS,
        );
    }

    report.require(&s[8], non_blank(&page.cta.headline));

    report
}
