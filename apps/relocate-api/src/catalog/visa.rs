use std::collections::BTreeMap;

use relocate_types::VisaType;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn group(category: &str, docs: &[&str]) -> (String, Vec<String>) {
    (category.to_string(), strings(docs))
}

pub fn visa_types() -> Vec<VisaType> {
    vec![
        VisaType {
            id: "skilled-worker".to_string(),
            visa_type: "Skilled Worker Visa".to_string(),
            fee: "£719 (up to 3 years) or £1,420 (over 3 years)".to_string(),
            processing_time: "3 weeks from outside the UK".to_string(),
            requirements: strings(&[
                "Job offer from a Home Office licensed sponsor",
                "Role on the list of eligible occupations",
                "Salary at or above the going rate",
                "English at CEFR level B1",
                "£1,270 in savings held for 28 days unless the sponsor certifies maintenance",
            ]),
            application_process: strings(&[
                "Receive a Certificate of Sponsorship from your employer",
                "Apply online on GOV.UK",
                "Pay the application fee and Immigration Health Surcharge",
                "Book and attend a biometrics appointment",
                "Wait for a decision and set up your eVisa",
            ]),
            required_documents: BTreeMap::from([
                group("identity", &["Valid passport", "Previous passports"]),
                group("employment", &["Certificate of Sponsorship reference", "Job offer letter"]),
                group("financial", &["Bank statements for 28 days"]),
                group("supporting", &["English language test certificate", "TB test certificate"]),
            ]),
        },
        VisaType {
            id: "global-talent".to_string(),
            visa_type: "Global Talent Visa".to_string(),
            fee: "£716 including endorsement".to_string(),
            processing_time: "3 weeks after endorsement".to_string(),
            requirements: strings(&[
                "Endorsement from an approved body, or an eligible award",
                "Leadership or potential in academia, research, arts or digital technology",
            ]),
            application_process: strings(&[
                "Apply for endorsement",
                "Apply for the visa within three months of endorsement",
                "Attend a biometrics appointment",
                "Wait for a decision",
            ]),
            required_documents: BTreeMap::from([
                group("identity", &["Valid passport", "Passport photos"]),
                group("endorsement", &["Endorsement letter", "Letters of recommendation"]),
                group("supporting", &["Evidence portfolio", "TB test certificate"]),
            ]),
        },
        VisaType {
            id: "family".to_string(),
            visa_type: "Family Visa".to_string(),
            fee: "£1,938 from outside the UK".to_string(),
            processing_time: "12 weeks".to_string(),
            requirements: strings(&[
                "Partner is a British citizen or settled in the UK",
                "Relationship is genuine and subsisting",
                "Combined income of at least £29,000",
                "English at CEFR level A1",
            ]),
            application_process: strings(&[
                "Gather relationship and financial evidence",
                "Apply online on GOV.UK",
                "Pay the fee and Immigration Health Surcharge",
                "Attend a biometrics appointment",
                "Wait for a decision",
            ]),
            required_documents: BTreeMap::from([
                group("identity", &["Valid passport", "Partner's passport"]),
                group("relationship", &["Marriage certificate", "Evidence of living together"]),
                group("financial", &["Six months of payslips", "Bank statements for 6 months"]),
            ]),
        },
    ]
}
