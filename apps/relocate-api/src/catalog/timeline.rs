use relocate_types::{Priority, TimelineStep};

use Priority::{High, Low, Medium};

struct Step {
    title: &'static str,
    category: &'static str,
    priority: Priority,
    description: &'static str,
    documents: &'static [&'static str],
    cost: Option<&'static str>,
    duration: Option<&'static str>,
}

const STEPS: [Step; 34] = [
    // Visa and legal
    Step {
        title: "Check passport validity",
        category: "visa",
        priority: High,
        description: "Make sure every passport is valid for the whole visa period plus six months, and renew early if not.",
        documents: &["Current passport", "Passport photos"],
        cost: Some("$165"),
        duration: Some("6-8 weeks"),
    },
    Step {
        title: "Choose a visa route",
        category: "visa",
        priority: High,
        description: "Compare the Skilled Worker, Global Talent and Family routes and pick the one that fits your situation.",
        documents: &[],
        cost: None,
        duration: Some("1 week"),
    },
    Step {
        title: "Take an approved English language test",
        category: "visa",
        priority: Medium,
        description: "Book a Secure English Language Test if your degree or nationality does not already exempt you.",
        documents: &["Test booking confirmation"],
        cost: Some("£150-£200"),
        duration: Some("2-3 weeks"),
    },
    Step {
        title: "Take a tuberculosis test if required",
        category: "visa",
        priority: Low,
        description: "Check whether a TB certificate is needed for your country of residence and book an approved clinic.",
        documents: &["TB test certificate"],
        cost: Some("$200"),
        duration: Some("1-2 weeks"),
    },
    Step {
        title: "Obtain a Certificate of Sponsorship",
        category: "visa",
        priority: High,
        description: "Your UK employer assigns a Certificate of Sponsorship reference once the job offer is confirmed.",
        documents: &["Job offer letter", "Certificate of Sponsorship reference"],
        cost: None,
        duration: Some("1-4 weeks"),
    },
    Step {
        title: "Submit the online visa application",
        category: "visa",
        priority: High,
        description: "Complete the application on GOV.UK and pay the visa fee and Immigration Health Surcharge.",
        documents: &["Passport", "Certificate of Sponsorship", "English test result", "Bank statements"],
        cost: Some("£719-£1,500 plus surcharge"),
        duration: Some("1 day"),
    },
    Step {
        title: "Attend the biometrics appointment",
        category: "visa",
        priority: High,
        description: "Give fingerprints and a photo at a USCIS Application Support Center or the UKVCAS equivalent.",
        documents: &["Appointment confirmation", "Passport"],
        cost: None,
        duration: Some("1 day"),
    },
    Step {
        title: "Collect your BRP or set up your eVisa",
        category: "visa",
        priority: Medium,
        description: "Link your UKVI account to your passport so your immigration status can be proven after arrival.",
        documents: &["Decision letter"],
        cost: None,
        duration: Some("10 days after arrival"),
    },
    // Employment
    Step {
        title: "Rewrite your CV for the UK market",
        category: "employment",
        priority: High,
        description: "Convert your resume to a two-page UK CV with a personal statement and no photo.",
        documents: &["UK-format CV", "Cover letter template"],
        cost: None,
        duration: Some("1 week"),
    },
    Step {
        title: "Register on UK job boards",
        category: "employment",
        priority: Medium,
        description: "Create profiles on Indeed UK, Reed and Totaljobs with alerts for Sheffield, Derby and the Peak District.",
        documents: &[],
        cost: None,
        duration: Some("2 days"),
    },
    Step {
        title: "Apply to licensed sponsors",
        category: "employment",
        priority: High,
        description: "Check each employer against the register of licensed sponsors before applying.",
        documents: &["UK-format CV", "References"],
        cost: None,
        duration: Some("4-12 weeks"),
    },
    Step {
        title: "Get professional qualifications recognised",
        category: "employment",
        priority: Medium,
        description: "Request a statement of comparability from Ecctis for degrees and professional licences.",
        documents: &["Degree certificates", "Transcripts"],
        cost: Some("£140"),
        duration: Some("2-4 weeks"),
    },
    Step {
        title: "Sign the employment contract",
        category: "employment",
        priority: High,
        description: "Review salary, notice period and relocation support, then sign so sponsorship can proceed.",
        documents: &["Signed contract"],
        cost: None,
        duration: Some("1 week"),
    },
    // Housing
    Step {
        title: "Research Peak District towns",
        category: "housing",
        priority: Medium,
        description: "Compare Bakewell, Buxton, Matlock, Hathersage and Castleton for commute, schools and amenities.",
        documents: &[],
        cost: None,
        duration: Some("2 weeks"),
    },
    Step {
        title: "Set a housing budget",
        category: "housing",
        priority: High,
        description: "Budget for rent, council tax, utilities and the five-week tenancy deposit cap.",
        documents: &[],
        cost: None,
        duration: Some("2 days"),
    },
    Step {
        title: "Arrange virtual viewings",
        category: "housing",
        priority: Medium,
        description: "Book video viewings through Rightmove and Zoopla agents, and ask a local contact to visit shortlisted homes.",
        documents: &[],
        cost: None,
        duration: Some("2-4 weeks"),
    },
    Step {
        title: "Prepare tenant referencing documents",
        category: "housing",
        priority: High,
        description: "Landlords will run a Right to Rent check and may ask for a guarantor or rent paid in advance.",
        documents: &["Passport", "Visa decision", "Employment contract", "Landlord reference"],
        cost: None,
        duration: Some("1 week"),
    },
    Step {
        title: "Sign the tenancy agreement",
        category: "housing",
        priority: High,
        description: "Pay the holding deposit, sign the assured shorthold tenancy and confirm the deposit protection scheme.",
        documents: &["Tenancy agreement", "Deposit protection certificate"],
        cost: Some("Five weeks' rent deposit"),
        duration: Some("1 week"),
    },
    Step {
        title: "Set up council tax and utilities",
        category: "housing",
        priority: Medium,
        description: "Register with the district council and open gas, electricity, water and broadband accounts.",
        documents: &["Tenancy agreement"],
        cost: None,
        duration: Some("1 week"),
    },
    // Financial
    Step {
        title: "Open a UK bank account",
        category: "financial",
        priority: High,
        description: "Open an app-based account before the move, then a high-street account once you have a UK address.",
        documents: &["Passport", "Proof of address"],
        cost: None,
        duration: Some("1-2 weeks"),
    },
    Step {
        title: "Plan currency transfers",
        category: "financial",
        priority: Medium,
        description: "Use a transfer service with low fees to move savings in stages rather than all at once.",
        documents: &[],
        cost: Some("0.5% per transfer"),
        duration: Some("Ongoing"),
    },
    Step {
        title: "Understand US and UK tax obligations",
        category: "financial",
        priority: Medium,
        description: "US citizens keep filing US returns; check the foreign earned income exclusion and the UK tax year.",
        documents: &["Last two tax returns"],
        cost: Some("$500 adviser fee"),
        duration: Some("2 weeks"),
    },
    Step {
        title: "Apply for a National Insurance number",
        category: "financial",
        priority: High,
        description: "Check your eVisa first; apply through GOV.UK only if no number was issued with it.",
        documents: &["Passport", "Visa decision"],
        cost: None,
        duration: Some("2-4 weeks"),
    },
    // Logistics
    Step {
        title: "Get international moving quotes",
        category: "logistics",
        priority: High,
        description: "Request at least three quotes for sea freight from Phoenix, including door-to-door delivery.",
        documents: &["Inventory list"],
        cost: Some("$5,000-$12,000"),
        duration: Some("2 weeks"),
    },
    Step {
        title: "Declutter and sell belongings",
        category: "logistics",
        priority: Medium,
        description: "US appliances run on 110V; sell them along with anything not worth shipping.",
        documents: &[],
        cost: None,
        duration: Some("4-6 weeks"),
    },
    Step {
        title: "Arrange pet relocation",
        category: "logistics",
        priority: Medium,
        description: "Microchip, rabies vaccination and a USDA-endorsed health certificate are required for cats and dogs.",
        documents: &["Rabies certificate", "USDA health certificate"],
        cost: Some("$2,000-$5,000 per pet"),
        duration: Some("4 months"),
    },
    Step {
        title: "Book flights",
        category: "logistics",
        priority: High,
        description: "Fly into Manchester for the shortest road or rail trip to the Peak District.",
        documents: &["Passport", "Visa vignette or eVisa"],
        cost: Some("$800-$1,500 per person"),
        duration: Some("1 day"),
    },
    Step {
        title: "Book temporary accommodation",
        category: "logistics",
        priority: Medium,
        description: "Cover the first two to four weeks while the tenancy starts and shipped goods arrive.",
        documents: &[],
        cost: Some("£1,200-£2,500"),
        duration: Some("1 day"),
    },
    Step {
        title: "Exchange your driving licence",
        category: "logistics",
        priority: Low,
        description: "A US licence is valid for 12 months; Arizona licences cannot be exchanged so plan to take UK tests.",
        documents: &["US driving licence", "Passport"],
        cost: Some("£62 provisional licence"),
        duration: Some("3-6 months"),
    },
    // Healthcare
    Step {
        title: "Collect medical and vaccination records",
        category: "healthcare",
        priority: Medium,
        description: "Request records and a three-month supply of prescriptions before leaving.",
        documents: &["Medical records", "Vaccination history", "Prescriptions"],
        cost: None,
        duration: Some("2 weeks"),
    },
    Step {
        title: "Register with a GP",
        category: "healthcare",
        priority: High,
        description: "Register with the nearest NHS practice as soon as you have an address.",
        documents: &["Proof of address"],
        cost: None,
        duration: Some("1-2 weeks"),
    },
    Step {
        title: "Register with an NHS dentist",
        category: "healthcare",
        priority: Low,
        description: "NHS dental places are limited in Derbyshire; join waiting lists early.",
        documents: &[],
        cost: None,
        duration: Some("Varies"),
    },
    // Settling in
    Step {
        title: "Notify US institutions of the move",
        category: "settling_in",
        priority: Medium,
        description: "Update the IRS, banks, Social Security and voter registration with your overseas address.",
        documents: &[],
        cost: None,
        duration: Some("1 week"),
    },
    Step {
        title: "Join the local community",
        category: "settling_in",
        priority: Low,
        description: "Find walking groups, village events and the parish council newsletter to meet neighbours.",
        documents: &[],
        cost: None,
        duration: Some("Ongoing"),
    },
];

pub fn steps() -> Vec<TimelineStep> {
    STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| TimelineStep {
            id: format!("step-{:02}", i + 1),
            title: step.title.to_string(),
            description: step.description.to_string(),
            category: step.category.to_string(),
            priority: step.priority,
            is_completed: false,
            due_date: None,
            required_documents: step.documents.iter().map(|d| d.to_string()).collect(),
            estimated_cost: step.cost.map(str::to_string),
            estimated_duration: step.duration.map(str::to_string),
            notes: None,
            completed_at: None,
        })
        .collect()
}
