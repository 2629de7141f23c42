use relocate_types::Priority;

use super::ProgressSeed;

pub fn seeds() -> Vec<ProgressSeed> {
    vec![
        ProgressSeed {
            id: "visa-application",
            title: "Skilled Worker visa application",
            description: "Everything needed to get a decision on the visa before the move date.",
            category: "visa",
            priority: Priority::High,
            subtasks: &[
                "Confirm the employer is a licensed sponsor",
                "Receive Certificate of Sponsorship",
                "Pass the English language test",
                "Pay the Immigration Health Surcharge",
                "Submit the online application",
                "Attend biometrics",
            ],
        },
        ProgressSeed {
            id: "job-search",
            title: "Secure a job offer",
            description: "Land a sponsored role within commuting distance of the Peak District.",
            category: "employment",
            priority: Priority::High,
            subtasks: &[
                "Rewrite CV in UK format",
                "Set up job board alerts",
                "Apply to five sponsored roles",
                "Prepare for video interviews",
            ],
        },
        ProgressSeed {
            id: "housing-search",
            title: "Find a rental home",
            description: "Shortlist towns, view properties remotely and sign a tenancy.",
            category: "housing",
            priority: Priority::Medium,
            subtasks: &[
                "Pick two or three target towns",
                "Set up Rightmove and Zoopla alerts",
                "Book virtual viewings",
                "Gather referencing documents",
                "Pay the holding deposit",
            ],
        },
        ProgressSeed {
            id: "financial-setup",
            title: "Money and tax",
            description: "Banking, transfers and tax residency on both sides of the Atlantic.",
            category: "financial",
            priority: Priority::Medium,
            subtasks: &[
                "Open a UK app-based bank account",
                "Choose a currency transfer service",
                "Book a cross-border tax consultation",
                "Tell US banks about the move",
            ],
        },
        ProgressSeed {
            id: "shipping",
            title: "Ship household goods",
            description: "Decide what to ship, sell or store, and book the movers.",
            category: "logistics",
            priority: Priority::Medium,
            subtasks: &[
                "Collect three moving quotes",
                "Sell 110V appliances",
                "Book sea freight",
                "Buy transit insurance",
            ],
        },
        ProgressSeed {
            id: "healthcare",
            title: "Healthcare handover",
            description: "Leave the US with records and prescriptions, then register with the NHS.",
            category: "healthcare",
            priority: Priority::Low,
            subtasks: &[
                "Request medical records",
                "Fill prescriptions for three months",
                "Register with a GP",
                "Join an NHS dentist waiting list",
            ],
        },
    ]
}
