//! Resource links and logistics providers

use relocate_types::{LogisticsProvider, ResourceLink};

fn link(category: &str, name: &str, url: &str, description: &str) -> ResourceLink {
    ResourceLink {
        name: name.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        category: category.to_string(),
    }
}

pub fn resources() -> Vec<ResourceLink> {
    vec![
        link("government", "UK Government", "https://www.gov.uk", "Official UK government portal"),
        link(
            "government",
            "UK Visas and Immigration",
            "https://www.gov.uk/browse/visas-immigration",
            "Visa routes, fees and application guidance",
        ),
        link(
            "government",
            "Register of licensed sponsors",
            "https://www.gov.uk/government/publications/register-of-licensed-sponsors-workers",
            "Employers allowed to sponsor Skilled Worker visas",
        ),
        link(
            "housing",
            "Rightmove",
            "https://www.rightmove.co.uk",
            "Largest UK property listings site",
        ),
        link("housing", "Zoopla", "https://www.zoopla.co.uk", "Rental listings and area guides"),
        link(
            "employment",
            "NHS Jobs",
            "https://www.jobs.nhs.uk",
            "Every vacancy in the National Health Service",
        ),
        link("employment", "Indeed UK", "https://uk.indeed.com", "General job board"),
        link(
            "healthcare",
            "Register with a GP",
            "https://www.nhs.uk/nhs-services/gps/how-to-register-with-a-gp-surgery/",
            "How to join a local NHS practice",
        ),
        link(
            "community",
            "Peak District National Park",
            "https://www.peakdistrict.gov.uk",
            "Your new home region",
        ),
        link(
            "community",
            "Visit Peak District",
            "https://www.visitpeakdistrict.com",
            "Events, walks and local businesses",
        ),
    ]
}

pub fn logistics_providers() -> Vec<LogisticsProvider> {
    vec![
        LogisticsProvider {
            id: "crown-relocations".to_string(),
            name: "Crown Relocations".to_string(),
            category: "international_movers".to_string(),
            description: "Door-to-door international removals with customs handling.".to_string(),
            website: "https://www.crownrelo.com".to_string(),
            phone: None,
            estimated_cost: Some("$8,000-$12,000 for a 20ft container".to_string()),
        },
        LogisticsProvider {
            id: "allied-pickfords".to_string(),
            name: "Allied Pickfords".to_string(),
            category: "international_movers".to_string(),
            description: "US to UK sea freight and shared container options.".to_string(),
            website: "https://www.alliedpickfords.co.uk".to_string(),
            phone: None,
            estimated_cost: Some("$5,000-$9,000".to_string()),
        },
        LogisticsProvider {
            id: "seven-seas".to_string(),
            name: "Seven Seas Worldwide".to_string(),
            category: "small_shipments".to_string(),
            description: "Boxes and suitcases shipped without a full container.".to_string(),
            website: "https://www.sevenseasworldwide.com".to_string(),
            phone: None,
            estimated_cost: Some("$300-$1,500".to_string()),
        },
        LogisticsProvider {
            id: "pet-relocation".to_string(),
            name: "PetRelocation".to_string(),
            category: "pet_transport".to_string(),
            description: "Handles paperwork, crates and flights for cats and dogs.".to_string(),
            website: "https://www.petrelocation.com".to_string(),
            phone: None,
            estimated_cost: Some("$2,000-$5,000 per pet".to_string()),
        },
        LogisticsProvider {
            id: "big-yellow".to_string(),
            name: "Big Yellow Self Storage".to_string(),
            category: "storage".to_string(),
            description: "Short-term storage near Sheffield while your tenancy starts.".to_string(),
            website: "https://www.bigyellow.co.uk".to_string(),
            phone: None,
            estimated_cost: Some("£100-£250 per month".to_string()),
        },
    ]
}
