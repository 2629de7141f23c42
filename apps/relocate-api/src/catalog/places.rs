//! Location profiles, housing markets and the origin/destination comparison

use relocate_types::{
    ComparisonPoint, HousingArea, HousingMarket, LocationProfile, RelocationComparison,
    DESTINATION, ORIGIN,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn locations() -> Vec<LocationProfile> {
    vec![
        LocationProfile {
            id: ORIGIN.to_string(),
            name: "Phoenix".to_string(),
            region: "Arizona".to_string(),
            country: "United States".to_string(),
            population: "1.6 million (4.9 million metro)".to_string(),
            climate: "Hot desert; summer highs above 40°C, mild winters".to_string(),
            cost_of_living: "Around the US average; housing has risen sharply since 2020"
                .to_string(),
            highlights: strings(&[
                "Over 300 days of sunshine a year",
                "Phoenix Sky Harbor international airport",
                "Large tech and healthcare employers",
            ]),
            nearby_towns: strings(&["Scottsdale", "Tempe", "Mesa", "Chandler"]),
        },
        LocationProfile {
            id: DESTINATION.to_string(),
            name: "Peak District".to_string(),
            region: "Derbyshire, East Midlands".to_string(),
            country: "United Kingdom".to_string(),
            population: "About 38,000 inside the National Park".to_string(),
            climate: "Temperate maritime; cool summers, wet winters, occasional snow".to_string(),
            cost_of_living: "Below London; village property carries a premium".to_string(),
            highlights: strings(&[
                "Britain's first National Park, founded 1951",
                "Within an hour of Sheffield and Manchester",
                "Walking, climbing and caving on the doorstep",
            ]),
            nearby_towns: strings(&["Bakewell", "Buxton", "Matlock", "Castleton", "Hathersage"]),
        },
    ]
}

fn area(
    name: &str,
    description: &str,
    average_rent: &str,
    average_price: &str,
    commute: &str,
) -> HousingArea {
    HousingArea {
        name: name.to_string(),
        description: description.to_string(),
        average_rent: average_rent.to_string(),
        average_price: average_price.to_string(),
        commute: commute.to_string(),
    }
}

pub fn housing_markets() -> Vec<HousingMarket> {
    vec![
        HousingMarket {
            location_id: ORIGIN.to_string(),
            currency: "USD".to_string(),
            average_rent: "$1,650 per month".to_string(),
            average_price: "$425,000".to_string(),
            property_types: strings(&["Single-family home", "Condo", "Townhouse"]),
            areas: vec![
                area(
                    "Arcadia",
                    "Established neighbourhood below Camelback Mountain",
                    "$2,400 per month",
                    "$850,000",
                    "20 minutes to downtown",
                ),
                area(
                    "Tempe",
                    "University town with light rail into Phoenix",
                    "$1,700 per month",
                    "$450,000",
                    "15 minutes to downtown",
                ),
            ],
            tips: strings(&[
                "Give notice on a lease at least 60 days before moving",
                "Budget for selling costs of around 6% if selling",
            ]),
        },
        HousingMarket {
            location_id: DESTINATION.to_string(),
            currency: "GBP".to_string(),
            average_rent: "£950 per month".to_string(),
            average_price: "£325,000".to_string(),
            property_types: strings(&["Stone cottage", "Terraced house", "Semi-detached", "Barn conversion"]),
            areas: vec![
                area(
                    "Bakewell",
                    "Market town at the centre of the National Park",
                    "£1,100 per month",
                    "£375,000",
                    "40 minutes to Sheffield",
                ),
                area(
                    "Buxton",
                    "Spa town with a direct rail line to Manchester",
                    "£850 per month",
                    "£260,000",
                    "60 minutes by train to Manchester",
                ),
                area(
                    "Hathersage",
                    "Hope Valley village on the Sheffield line",
                    "£1,050 per month",
                    "£420,000",
                    "25 minutes by train to Sheffield",
                ),
            ],
            tips: strings(&[
                "Landlords usually ask for a UK guarantor or six months' rent up front",
                "Check broadband and mobile coverage before committing to a village",
                "Many cottages are listed buildings with limits on alterations",
            ]),
        },
    ]
}

fn point(aspect: &str, origin: &str, destination: &str, note: Option<&str>) -> ComparisonPoint {
    ComparisonPoint {
        aspect: aspect.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        note: note.map(str::to_string),
    }
}

pub fn comparisons() -> Vec<RelocationComparison> {
    vec![RelocationComparison {
        origin: ORIGIN.to_string(),
        destination: DESTINATION.to_string(),
        points: vec![
            point("climate", "Hot and dry", "Mild and wet", Some("Pack waterproofs, not sunscreen")),
            point("average rent", "$1,650 per month", "£950 per month", None),
            point("average home price", "$425,000", "£325,000", None),
            point(
                "healthcare",
                "Private insurance through employer",
                "NHS, funded by the Immigration Health Surcharge",
                Some("Register with a GP as soon as you have an address"),
            ),
            point("driving", "Right-hand traffic", "Left-hand traffic", Some("A US licence is valid for 12 months")),
            point("pace of life", "Sprawling metro", "Villages and market towns", None),
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_ends_have_a_profile_and_a_market() {
        let locations = locations();
        let markets = housing_markets();
        for id in [ORIGIN, DESTINATION] {
            assert!(locations.iter().any(|l| l.id == id), "no profile for {}", id);
            assert!(markets.iter().any(|m| m.location_id == id), "no market for {}", id);
        }
        assert!(markets.iter().all(|m| !m.areas.is_empty()));
    }

    #[test]
    fn comparison_points_are_filled_in() {
        let comparison = &comparisons()[0];
        assert_eq!(comparison.route(), "phoenix-to-peak-district");
        assert!(comparison
            .points
            .iter()
            .all(|p| !p.origin.is_empty() && !p.destination.is_empty()));
    }
}
