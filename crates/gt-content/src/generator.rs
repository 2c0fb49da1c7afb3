//! # State Catalog Generator
//!
//! Expands the compact lane table (`state_lanes.yaml`) into full [`State`]
//! and [`Lane`] entities.
//!
//! Most page copy is templated on the state name. Lane figures that have no
//! authoritative source (distance, transit time, rates, deadhead risk) are
//! estimates drawn from a SHA-256 digest of `"{state_slug}:{lane_slug}"`,
//! so regenerating the catalog always yields identical output and every
//! lane keeps the same numbers across deploys.

use gt_core::{lane_to_slug, state_to_slug, title_case};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::ContentError;
use crate::state::{
    BackhaulLane, BackhaulStrategy, DeadheadStrategy, FaqEntry, Lane, NamedNote, PeriodNote,
    Permit, QuarterTrend, RateNegotiation, RateTrends, SeasonalBehavior, SeasonalTrends,
    SizeLimits, State, TruckStop, WeightLimits,
};

/// Separator between origin and destination in the lane table.
pub const LANE_ARROW: char = '→';

/// Cities whose lanes carry hurricane-season risk.
pub const COASTAL_CITIES: [&str; 11] = [
    "Miami",
    "Houston",
    "New Orleans",
    "Charleston",
    "Jacksonville",
    "Tampa",
    "Orlando",
    "Savannah",
    "Corpus Christi",
    "Brownsville",
    "Gulfport",
];

const HERO_IMAGE: &str = "https://res.cloudinary.com/dj9r2zjpm/image/upload/v1771672055/pexels-alban-mehmeti-184979123-13682891_d93x7i.jpg";
const CONTENT_IMAGE: &str =
    "https://res.cloudinary.com/dj9r2zjpm/image/upload/v1770805461/dry-van_ptfjzs.jpg";

/// One row of the lane table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSeed {
    pub name: String,
    pub abbreviation: String,
    pub lanes: Vec<String>,
}

/// The whole lane table, in listing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateLaneTable {
    pub states: Vec<StateSeed>,
}

impl StateLaneTable {
    pub const FILE: &'static str = "state_lanes.yaml";

    pub fn from_yaml(source: &str) -> Result<Self, ContentError> {
        serde_yaml::from_str(source).map_err(|source| ContentError::Yaml {
            file: Self::FILE,
            source,
        })
    }

    /// Generate every state in table order.
    pub fn generate(&self) -> Result<Vec<State>, ContentError> {
        self.states.iter().map(generate_state).collect()
    }
}

/// A lane table entry split into its endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLane {
    pub origin: String,
    pub destination: String,
}

impl ParsedLane {
    /// `Origin → Destination`.
    pub fn name(&self) -> String {
        format!("{} {LANE_ARROW} {}", self.origin, self.destination)
    }

    /// `Origin to Destination`.
    pub fn display_name(&self) -> String {
        format!("{} to {}", self.origin, self.destination)
    }

    pub fn slug(&self) -> String {
        lane_to_slug(&self.origin, &self.destination)
    }

    /// Whether either endpoint names a hurricane-exposed city.
    pub fn is_coastal(&self) -> bool {
        COASTAL_CITIES
            .iter()
            .any(|city| self.origin.contains(city) || self.destination.contains(city))
    }
}

/// Split `"Origin→Destination"`. Both sides must be non-empty after trimming.
pub fn parse_lane(state: &str, raw: &str) -> Result<ParsedLane, ContentError> {
    let malformed = || ContentError::MalformedLane {
        state: state.to_string(),
        lane: raw.to_string(),
    };
    let (origin, destination) = raw.split_once(LANE_ARROW).ok_or_else(malformed)?;
    let (origin, destination) = (origin.trim(), destination.trim());
    if origin.is_empty() || destination.is_empty() || destination.contains(LANE_ARROW) {
        return Err(malformed());
    }
    Ok(ParsedLane {
        origin: origin.to_string(),
        destination: destination.to_string(),
    })
}

/// Deadhead risk bands, lowest first.
pub const DEADHEAD_BANDS: [&str; 3] = ["15-25%", "25-35%", "35-45%"];

/// Deterministic lane figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneEstimate {
    /// 500..=1999.
    pub distance_miles: u32,
    /// 1..=3.
    pub transit_min_days: u32,
    /// 2..=3, never below `transit_min_days`.
    pub transit_max_days: u32,
    /// 1500..=4499.
    pub rate_low: u32,
    /// 4000..=5999.
    pub rate_high: u32,
    /// 220..=309.
    pub per_mile_low_cents: u32,
    /// 300..=389.
    pub per_mile_high_cents: u32,
    pub deadhead_risk: &'static str,
}

impl LaneEstimate {
    pub fn derive(state_slug: &str, lane_slug: &str) -> Self {
        let digest = Sha256::digest(format!("{state_slug}:{lane_slug}").as_bytes());
        let word = |i: usize| {
            let o = i * 4;
            u32::from_be_bytes([digest[o], digest[o + 1], digest[o + 2], digest[o + 3]])
        };

        let transit_min_days = 1 + word(1) % 3;
        let deadhead_roll = word(7) % 100;
        let deadhead_risk = if deadhead_roll < 30 {
            DEADHEAD_BANDS[0]
        } else if deadhead_roll < 72 {
            DEADHEAD_BANDS[1]
        } else {
            DEADHEAD_BANDS[2]
        };

        Self {
            distance_miles: 500 + word(0) % 1500,
            transit_min_days,
            transit_max_days: (2 + word(2) % 2).max(transit_min_days),
            rate_low: 1500 + word(3) % 3000,
            rate_high: 4000 + word(4) % 2000,
            per_mile_low_cents: 220 + word(5) % 90,
            per_mile_high_cents: 300 + word(6) % 90,
            deadhead_risk,
        }
    }

    pub fn distance(&self) -> String {
        format!("{} miles", self.distance_miles)
    }

    pub fn transit_time(&self) -> String {
        format!("{}-{} days", self.transit_min_days, self.transit_max_days)
    }

    pub fn rate(&self) -> String {
        format!("${} - ${}", self.rate_low, self.rate_high)
    }

    pub fn rate_per_mile(&self) -> String {
        format!(
            "{} - {}",
            dollars(self.per_mile_low_cents),
            dollars(self.per_mile_high_cents)
        )
    }
}

fn dollars(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn strings<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn note(name: impl Into<String>, description: &str) -> NamedNote {
    NamedNote {
        name: name.into(),
        description: description.to_string(),
    }
}

fn period(period: &str, description: &str) -> PeriodNote {
    PeriodNote {
        period: period.to_string(),
        description: description.to_string(),
    }
}

fn quarter(rate_movement: impl Into<String>, weather_impact: &str, strategy: &str) -> QuarterTrend {
    QuarterTrend {
        rate_movement: rate_movement.into(),
        weather_impact: weather_impact.to_string(),
        strategy: strategy.to_string(),
    }
}

/// Build a lane of `state_name` from its parsed table entry.
pub fn generate_lane(
    parsed: &ParsedLane,
    state_slug: &str,
    state_name: &str,
    abbreviation: &str,
) -> Lane {
    let slug = parsed.slug();
    let display_name = parsed.display_name();
    let estimate = LaneEstimate::derive(state_slug, &slug);
    let ParsedLane {
        origin,
        destination,
    } = parsed;
    let destination_city = destination.split(',').next().unwrap_or(destination);

    Lane {
        id: format!("{state_slug}-{}", slug.replace('-', "")),
        name: parsed.name(),
        display_name: display_name.clone(),
        slug,
        state_slug: state_slug.to_string(),
        description: format!(
            "High-demand freight route connecting {origin} to {destination}. One of the busiest lanes with consistent freight volumes."
        ),
        origin: format!("{origin}, {abbreviation}"),
        destination: destination.clone(),
        distance: estimate.distance(),
        average_transit_time: estimate.transit_time(),
        average_rate: estimate.rate(),
        rate_per_mile: estimate.rate_per_mile(),
        load_frequency: "Daily".to_string(),
        peak_seasons: strings(["Spring", "Fall", "Holiday Season"]),
        freight_types: strings([
            "Consumer Goods",
            "Electronics",
            "Automotive Parts",
            "E-commerce",
        ]),
        key_features: strings([
            "Consistent freight volumes year-round",
            "Multiple load opportunities daily",
            "Premium rates for expedited service",
            "Well-established route with good infrastructure",
        ]),
        benefits: strings([
            "High earning potential",
            "Regular backhaul opportunities",
            "Multiple pickup and delivery points",
            "Strong shipper relationships",
        ]),
        challenges: strings([
            "Long distance requires careful planning",
            "Weather considerations",
            "Fuel costs for long-haul routes",
        ]),
        tips: vec![
            format!("On the {display_name} lane, book early in the week (Monday-Wednesday) when rates are typically 10-15% higher than weekend rates."),
            format!("Position yourself near {destination} distribution centers the night before delivery for quick access to backhaul loads."),
            "Weather patterns can create sudden rate spikes on this lane. Monitor forecasts and position ahead of storms for premium rates.".to_string(),
            "Many brokers prefer working with dispatchers who understand this specific lane. Build relationships with regional brokers for better rates.".to_string(),
            "Peak booking times are 6-9 AM. Have your truck positioned and ready to accept loads during these hours for best opportunities.".to_string(),
        ],
        primary_commodities: strings([
            "Consumer Goods",
            "Electronics",
            "Automotive Parts",
            "E-commerce Packages",
        ]),
        secondary_commodities: strings([
            "Specialized Equipment",
            "Partial Loads",
            "LTL Shipments",
            "Time-Sensitive Deliveries",
        ]),
        seasonal_cargo: strings([
            "Holiday Retail Goods (Q4)",
            "Produce (Spring/Summer)",
            "Back-to-School Items (Q3)",
        ]),
        seasonal_behavior: SeasonalBehavior {
            q1_slow: "Yes - Lower volume as businesses recover from holidays".to_string(),
            q4_peak: "Yes - Highest volume during holiday shipping season".to_string(),
            produce_season: "Spring and Summer for agricultural routes".to_string(),
            hurricane_risk: if parsed.is_coastal() {
                "June-November for coastal routes"
            } else {
                "Minimal risk"
            }
            .to_string(),
        },
        rate_negotiation: RateNegotiation {
            when_to_book: strings([
                "Early Morning (6-9 AM) - Peak booking times with best rate opportunities",
                "Monday-Wednesday - Strongest rates early in the week",
                "Pre-Weekend - Time-sensitive loads often pay premium",
            ]),
            what_brokers_pay_more: strings([
                "Time-Sensitive Freight - Hot loads with tight delivery windows",
                "Specialized Equipment - Reefer, flatbed, or specialized trailers",
                "Reliable Carriers - Established relationships command better rates",
            ]),
            when_to_avoid: strings([
                "Low-Ball Offers - Rates significantly below market average",
                "Unreliable Brokers - Check broker ratings and payment history",
                "Peak Competition Times - Friday afternoons often have rate pressure",
            ]),
        },
        backhaul_strategy: BackhaulStrategy {
            best_return_cities: vec![
                format!("{destination_city} area distribution hubs"),
                "Major metro areas with high freight volume".to_string(),
                "Industrial areas with consistent freight".to_string(),
            ],
            deadhead_risk_percentage: estimate.deadhead_risk.to_string(),
            alternative_routes: strings([
                "Slight detour to high-volume areas",
                "Positioning near distribution centers",
                "Multi-stop routes for better rates",
                "Connecting to adjacent high-demand lanes",
            ]),
        },
        meta_title: format!("{display_name} Truck Dispatch | {state_name} Routes"),
        meta_description: format!(
            "Professional dispatch services for {display_name} freight routes. High-paying loads, consistent volumes, expert support."
        ),
        keywords: vec![
            format!("{display_name} dispatch"),
            format!("{origin} {destination} trucking"),
            format!("{state_name} route"),
        ],
    }
}

fn port_city(name: &str) -> Option<&'static str> {
    match name {
        "California" => Some("Los Angeles"),
        "Texas" => Some("Houston"),
        "Florida" => Some("Miami"),
        "Washington" => Some("Seattle"),
        _ => None,
    }
}

fn border_crossing(name: &str) -> Option<&'static str> {
    match name {
        "Texas" => Some("Laredo"),
        "California" => Some("San Ysidro"),
        "Arizona" => Some("Nogales"),
        "New Mexico" => Some("Santa Teresa"),
        _ => None,
    }
}

fn is_valid_abbreviation(abbreviation: &str) -> bool {
    abbreviation.len() == 2 && abbreviation.bytes().all(|b| b.is_ascii_uppercase())
}

/// Build a full state page, lanes included, from one table row.
pub fn generate_state(seed: &StateSeed) -> Result<State, ContentError> {
    let name = title_case(seed.name.trim());
    let slug = state_to_slug(&name);
    let abbreviation = seed.abbreviation.trim().to_string();
    if !is_valid_abbreviation(&abbreviation) {
        return Err(ContentError::InvalidAbbreviation {
            state: name,
            abbreviation,
        });
    }

    let lanes = seed
        .lanes
        .iter()
        .map(|raw| {
            parse_lane(&name, raw).map(|parsed| generate_lane(&parsed, &slug, &name, &abbreviation))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let major_cities = strings(["Major City 1", "Major City 2", "Major City 3"]);
    let key_industries = strings([
        "Manufacturing",
        "Agriculture",
        "Retail and Distribution",
        "Technology",
        "Automotive",
        "E-commerce",
    ]);
    let hub_city = major_cities[0].clone();
    let second_city = major_cities[1].clone();
    let lead_industry = key_industries[0].clone();

    let best_backhaul_lanes = lanes
        .iter()
        .take(3)
        .map(|lane| BackhaulLane {
            name: lane.display_name.clone(),
            description: "Strong return lane with consistent freight".to_string(),
            rate: lane.rate_per_mile.clone(),
        })
        .collect();

    let faq = vec![
        FaqEntry {
            question: format!("Do I need state authority to operate in {name}?"),
            answer: format!("Yes, you need proper authority to operate in {name}. This typically includes USDOT number, MC number, and state-specific permits. Some states require additional registrations. Consult with a compliance expert to ensure you have all necessary authority before operating in {name}."),
        },
        FaqEntry {
            question: format!("What insurance is required for trucking in {name}?"),
            answer: format!("Minimum insurance requirements include primary liability coverage (typically $750,000-$1,000,000), cargo insurance, and physical damage coverage. {name} may have additional requirements depending on the type of freight you're hauling. Always verify current insurance requirements with your insurance provider and state authorities."),
        },
        FaqEntry {
            question: format!("What pays best in {name}?"),
            answer: format!("Premium rates in {name} typically come from specialized freight including refrigerated loads, flatbed freight, and time-sensitive deliveries. The {lead_industry} sector often offers competitive rates. Outbound loads from major distribution hubs also command premium rates."),
        },
        FaqEntry {
            question: format!("Is {name} good for new owner operators?"),
            answer: format!("{name} offers opportunities for new owner operators, especially with strong freight volume and diverse industries. However, competition can be high in major metro areas. New operators should focus on building relationships with reliable brokers, understanding local regulations, and starting with established lanes before expanding."),
        },
        FaqEntry {
            question: format!("What are the best lanes from {name}?"),
            answer: format!("Top lanes from {name} include routes to major distribution hubs in neighboring states, cross-country routes to high-demand markets, and lanes connecting to major ports. The {hub_city} area typically has the highest volume of outbound freight."),
        },
        FaqEntry {
            question: format!("How do I find loads in {name}?"),
            answer: format!("Load finding in {name} involves using load boards, building relationships with brokers, working with dispatchers, and understanding peak booking times. Major load boards like DAT, Truckstop.com, and 123Loadboard have strong coverage in {name}. Many successful operators also work with professional dispatchers who have established broker relationships."),
        },
        FaqEntry {
            question: format!("What are the seasonal trends in {name}?"),
            answer: format!("{name} experiences seasonal variations based on industry activity, weather patterns, and commodity movements. Generally, Q2 and Q3 see stronger rates due to increased freight volume. Q1 can be slower, while Q4 often sees peak activity. Understanding these patterns helps with strategic planning and rate negotiation."),
        },
        FaqEntry {
            question: format!("What permits do I need for {name}?"),
            answer: format!("Permit requirements in {name} depend on your operation type. Standard operations require USDOT and MC numbers. Oversized/overweight loads, hazardous materials, and special routes may require additional permits. Some states have specific fuel tax permits or temporary registration requirements. Always verify current requirements before operating."),
        },
    ];

    Ok(State {
        id: slug.clone(),
        display_name: name.clone(),
        slug,
        tagline: format!("Premium {name} Truck Dispatch Services"),
        description: format!("Connect with high-paying freight loads across {name} and nationwide. Our expert dispatch team specializes in {name}'s major freight corridors."),
        long_description: format!("{name} is a critical freight hub with diverse freight opportunities. Our dispatch services connect carriers with premium loads across {name}'s extensive highway network."),
        overview: format!("{name} offers diverse freight opportunities with strong demand for dry van, reefer, and flatbed services."),
        market_overview: format!("{name}'s freight market is competitive with high demand for various freight types. Rates are typically competitive with national averages."),
        average_rates: "Average rates range from $2.00-$2.40 per mile for dry van, $2.20-$2.60 for reefer, and $2.30-$2.70 for flatbed depending on route and season.".to_string(),
        market_trends: strings([
            "Strong demand for regional and cross-country routes",
            "Seasonal peaks during harvest and holiday seasons",
            "E-commerce freight growing rapidly",
            "Infrastructure improvements driving efficiency",
        ]),
        common_freight_types: strings([
            "Consumer Goods",
            "Electronics",
            "Automotive Parts",
            "Food Products",
            "Building Materials",
            "E-commerce Packages",
        ]),
        benefits: strings([
            "Access to major freight corridors",
            "High freight volumes",
            "Diverse freight types",
            "Strong infrastructure",
            "Competitive rates",
        ]),
        challenges: strings([
            "Weather considerations",
            "Traffic congestion in metro areas",
            "Regulatory compliance",
            "Fuel costs",
            "Seasonal variations",
        ]),
        regulations: strings([
            "Federal hours of service regulations",
            "Weight restrictions on certain routes",
            "State-specific requirements",
            "Environmental standards",
        ]),
        seasonal_considerations: strings([
            "Peak shipping season: Fall and Winter",
            "Holiday shipping surge: November-December",
            "Weather impacts during winter months",
            "Agricultural season variations",
        ]),
        seasonal_trends: SeasonalTrends {
            q1: quarter(
                format!("Rates typically decrease 5-10% in {name} as market recovers from holiday season"),
                "Winter weather can create rate spikes during storms",
                "Position near distribution hubs early in the week for best rates",
            ),
            q2: quarter(
                "Strong rate increases as freight volume picks up",
                "Spring weather generally favorable, minimal disruptions",
                "Focus on agricultural and retail freight during peak season",
            ),
            q3: quarter(
                "Peak rates during summer months",
                "Heat can impact certain freight types",
                "Maximize outbound loads, plan for backhaul opportunities",
            ),
            q4: quarter(
                "Highest rates during holiday shipping season",
                "Winter weather begins to impact northern routes",
                "Book early, rates peak in November-December",
            ),
        },
        ports: port_city(&name)
            .map(|city| {
                vec![note(
                    format!("Port of {city}"),
                    "Major port handling significant container traffic",
                )]
            })
            .unwrap_or_default(),
        intermodal_centers: vec![note(
            format!("{hub_city} Intermodal Terminal"),
            "Major rail-to-truck transfer facility",
        )],
        border_crossings: border_crossing(&name)
            .map(|city| {
                vec![note(
                    format!("{city} Border Crossing"),
                    "Important border crossing point for international freight",
                )]
            })
            .unwrap_or_default(),
        truck_stops: vec![
            TruckStop {
                name: format!("Pilot Travel Center - {hub_city}"),
                location: "I-35, Exit 420".to_string(),
                description: "Full-service facility with 200+ parking spaces".to_string(),
            },
            TruckStop {
                name: format!("Love's Travel Stop - {second_city}"),
                location: "I-20, Exit 150".to_string(),
                description: "24/7 fuel and amenities".to_string(),
            },
        ],
        parking_difficulty: "Moderate - Metro areas have high demand, especially evenings".to_string(),
        strategic_positioning: vec![
            format!("Position near major distribution centers in {hub_city} for quick access to outbound loads"),
            "Stay near high-traffic freight corridors for backhaul opportunities".to_string(),
            "Arrive at destination areas during peak booking times (typically early morning) for best rate opportunities".to_string(),
        ],
        weight_limits: WeightLimits {
            single_axle: "20,000 lbs".to_string(),
            tandem_axle: "34,000 lbs".to_string(),
            gross_vehicle_weight: "80,000 lbs (standard)".to_string(),
        },
        size_limits: SizeLimits {
            width: "8.5 feet (102 inches)".to_string(),
            height: "13.5 feet (varies by route)".to_string(),
            length: "53 feet (trailer)".to_string(),
        },
        permits: [
            ("Oversized/Overweight", "Required for loads exceeding standard weight or size limits"),
            ("Hazardous Materials", "Required for hazmat freight"),
            ("Special Route Requirements", "May be needed for certain routes"),
        ]
        .iter()
        .map(|(permit_type, description)| Permit {
            permit_type: (*permit_type).to_string(),
            description: (*description).to_string(),
        })
        .collect(),
        emission_laws: (name == "California")
            .then(|| "CARB compliance required for California routes".to_string()),
        rate_trends: RateTrends {
            historical_rates: vec![
                period("2018-2019", "Strong market with rates reaching peak levels due to capacity constraints"),
                period("2020", "Initial volatility followed by strong recovery"),
                period("2021-2022", "Record-high rates driven by demand surge"),
                period("2023-2024", "Normalization with seasonal variations"),
            ],
            market_corrections: vec![
                period("Q1 2023", "Significant correction as capacity increased"),
                period("Mid-2024", "Stabilization with improved balance"),
            ],
            projection_2025: format!("Based on current market indicators, {name} is expected to see moderate growth with steady rate increases as market continues to stabilize"),
            rate_drivers: vec![
                "Freight volume and demand".to_string(),
                "Available truck capacity".to_string(),
                "Fuel costs and operating expenses".to_string(),
                format!("Major industry activity ({lead_industry})"),
            ],
        },
        deadhead_strategy: DeadheadStrategy {
            outbound_percentage: "65%".to_string(),
            inbound_percentage: "35%".to_string(),
            best_backhaul_lanes,
            positioning_strategies: vec![
                format!("Position near distribution hubs in {hub_city} for quick access to outbound loads"),
                "Arrive at destination areas during peak booking times (typically early morning) to secure better rates and backhaul options".to_string(),
                "Leverage high-volume freight corridors to catch both outbound and inbound opportunities".to_string(),
                "Use load boards before arriving at destination to pre-book backhaul loads and minimize wait time".to_string(),
            ],
        },
        dispatcher_insights: vec![
            format!("In {name}, timing is everything. Book outbound loads early in the week when rates are typically 10-15% higher."),
            format!("The {hub_city} area sees the highest load volume, but don't ignore secondary markets - they often offer better rates with less competition."),
            format!("Weather patterns in {name} can create sudden rate spikes. Monitor forecasts and position yourself ahead of storms for premium rates."),
            format!("Backhaul opportunities are strongest on routes connecting {name} to neighboring states. Plan your positioning accordingly."),
            format!("Many brokers in {name} prefer working with dispatchers who understand local regulations. Build relationships with regional brokers."),
            format!("Peak booking times in {name} are typically 6-9 AM. Have your truck positioned and ready to accept loads during these hours."),
            format!("The {lead_industry} sector drives significant freight volume. Understanding their shipping patterns gives you a competitive edge."),
            format!("Don't overlook smaller lanes within {name}. While major routes get attention, secondary routes often have less competition and better rates."),
        ],
        faq,
        hero_image: HERO_IMAGE.to_string(),
        content_image: CONTENT_IMAGE.to_string(),
        meta_title: format!("{name} Truck Dispatch Services | Grow Trucking"),
        meta_description: format!("Professional truck dispatch services for {name} routes. Connect with high-paying loads across {name} and nationwide. Expert dispatch team, 24/7 support."),
        keywords: vec![
            format!("{name} truck dispatch"),
            format!("{abbreviation} freight dispatch"),
            format!("{name} trucking"),
            format!("{name} dispatch services"),
        ],
        cta_headline: format!("Start Dispatching in {name} Today"),
        cta_description: format!("Join hundreds of carriers maximizing their revenue with our {name} dispatch services. Get connected with premium loads and expert support."),
        service_type: "State-Specific Truck Dispatch".to_string(),
        area_served: format!("{name}, United States"),
        key_industries,
        major_cities,
        abbreviation,
        name,
        lanes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(name: &str, abbreviation: &str, lanes: &[&str]) -> StateSeed {
        StateSeed {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            lanes: lanes.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn parse_lane_trims_endpoints() {
        let lane = parse_lane("Illinois", " Chicago → St. Louis ").unwrap();
        assert_eq!(lane.origin, "Chicago");
        assert_eq!(lane.destination, "St. Louis");
        assert_eq!(lane.name(), "Chicago → St. Louis");
        assert_eq!(lane.display_name(), "Chicago to St. Louis");
        assert_eq!(lane.slug(), "chicago-to-st-louis");
    }

    #[test]
    fn parse_lane_rejects_missing_arrow_or_endpoint() {
        for raw in ["Chicago to Dallas", "→Dallas", "Chicago→", "A→B→C"] {
            let err = parse_lane("Illinois", raw).unwrap_err();
            assert!(
                matches!(err, ContentError::MalformedLane { .. }),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn coastal_detection() {
        assert!(parse_lane("TX", "Houston→Chicago").unwrap().is_coastal());
        assert!(parse_lane("TX", "Dallas→New Orleans").unwrap().is_coastal());
        assert!(!parse_lane("IL", "Chicago→Dallas").unwrap().is_coastal());
    }

    #[test]
    fn estimate_is_deterministic() {
        let a = LaneEstimate::derive("texas", "dallas-to-atlanta");
        let b = LaneEstimate::derive("texas", "dallas-to-atlanta");
        assert_eq!(a, b);
        assert_ne!(a, LaneEstimate::derive("georgia", "dallas-to-atlanta"));
    }

    #[test]
    fn estimate_formatting() {
        let estimate = LaneEstimate {
            distance_miles: 742,
            transit_min_days: 1,
            transit_max_days: 3,
            rate_low: 2100,
            rate_high: 4850,
            per_mile_low_cents: 225,
            per_mile_high_cents: 308,
            deadhead_risk: DEADHEAD_BANDS[1],
        };
        assert_eq!(estimate.distance(), "742 miles");
        assert_eq!(estimate.transit_time(), "1-3 days");
        assert_eq!(estimate.rate(), "$2100 - $4850");
        assert_eq!(estimate.rate_per_mile(), "$2.25 - $3.08");
    }

    #[test]
    fn generates_state_fields() {
        let state = generate_state(&seed(
            "NEW MEXICO",
            "NM",
            &["Albuquerque→Dallas", "Albuquerque→Los Angeles"],
        ))
        .unwrap();
        assert_eq!(state.name, "New Mexico");
        assert_eq!(state.display_name, "New Mexico");
        assert_eq!(state.slug, "new-mexico");
        assert_eq!(state.id, "new-mexico");
        assert_eq!(state.abbreviation, "NM");
        assert_eq!(state.meta_title, "New Mexico Truck Dispatch Services | Grow Trucking");
        assert_eq!(state.area_served, "New Mexico, United States");
        assert_eq!(state.service_type, "State-Specific Truck Dispatch");
        assert!(state.ports.is_empty());
        assert_eq!(state.border_crossings[0].name, "Santa Teresa Border Crossing");
        assert!(state.emission_laws.is_none());
        assert_eq!(state.dispatcher_insights.len(), 8);
        assert_eq!(state.faq.len(), 8);
        assert!(state.seasonal_trends.q1.rate_movement.contains("New Mexico"));
        assert_eq!(state.lanes.len(), 2);
    }

    #[test]
    fn california_gets_port_border_and_carb() {
        let state = generate_state(&seed("California", "CA", &["Los Angeles→Dallas"])).unwrap();
        assert_eq!(state.ports[0].name, "Port of Los Angeles");
        assert_eq!(state.border_crossings[0].name, "San Ysidro Border Crossing");
        assert_eq!(
            state.emission_laws.as_deref(),
            Some("CARB compliance required for California routes")
        );
    }

    #[test]
    fn generates_lane_fields() {
        let state = generate_state(&seed("Texas", "TX", &["Corpus Christi→New Orleans"])).unwrap();
        let lane = &state.lanes[0];
        assert_eq!(lane.id, "texas-corpuschristitoneworleans");
        assert_eq!(lane.slug, "corpus-christi-to-new-orleans");
        assert_eq!(lane.state_slug, "texas");
        assert_eq!(lane.origin, "Corpus Christi, TX");
        assert_eq!(lane.origin_city(), "Corpus Christi");
        assert_eq!(lane.destination, "New Orleans");
        assert_eq!(lane.load_frequency, "Daily");
        assert_eq!(lane.tips.len(), 5);
        assert_eq!(
            lane.seasonal_behavior.hurricane_risk,
            "June-November for coastal routes"
        );
        assert_eq!(
            lane.meta_title,
            "Corpus Christi to New Orleans Truck Dispatch | Texas Routes"
        );
        assert_eq!(
            lane.backhaul_strategy.best_return_cities[0],
            "New Orleans area distribution hubs"
        );
    }

    #[test]
    fn best_backhaul_lanes_are_first_three() {
        let state = generate_state(&seed(
            "Ohio",
            "OH",
            &[
                "Columbus→Chicago",
                "Cleveland→Detroit",
                "Cincinnati→Nashville",
                "Columbus→Atlanta",
            ],
        ))
        .unwrap();
        let backhaul = &state.deadhead_strategy.best_backhaul_lanes;
        assert_eq!(backhaul.len(), 3);
        assert_eq!(backhaul[0].name, "Columbus to Chicago");
        assert_eq!(backhaul[2].name, "Cincinnati to Nashville");
        assert_eq!(backhaul[1].rate, state.lanes[1].rate_per_mile);
    }

    #[test]
    fn rejects_bad_abbreviation() {
        let err = generate_state(&seed("Ohio", "Ohio", &[])).unwrap_err();
        assert!(matches!(err, ContentError::InvalidAbbreviation { .. }));
    }

    #[test]
    fn table_from_yaml() {
        let table = StateLaneTable::from_yaml(
            "states:\n  - name: Iowa\n    abbreviation: IA\n    lanes: [Des Moines→Chicago]\n",
        )
        .unwrap();
        let states = table.generate().unwrap();
        assert_eq!(states[0].lanes[0].slug, "des-moines-to-chicago");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Estimates stay inside their documented ranges for any lane.
            #[test]
            fn estimate_ranges(state in "[a-z]{3,12}", lane in "[a-z]{2,10}-to-[a-z]{2,10}") {
                let e = LaneEstimate::derive(&state, &lane);
                prop_assert!((500..=1999).contains(&e.distance_miles));
                prop_assert!((1..=3).contains(&e.transit_min_days));
                prop_assert!((2..=3).contains(&e.transit_max_days));
                prop_assert!(e.transit_min_days <= e.transit_max_days);
                prop_assert!((1500..=4499).contains(&e.rate_low));
                prop_assert!((4000..=5999).contains(&e.rate_high));
                prop_assert!((220..=309).contains(&e.per_mile_low_cents));
                prop_assert!((300..=389).contains(&e.per_mile_high_cents));
                prop_assert!(DEADHEAD_BANDS.contains(&e.deadhead_risk));
            }
        }
    }
}
