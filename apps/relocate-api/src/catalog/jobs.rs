use chrono::NaiveDate;
use relocate_types::{JobListing, JobSector};

struct Job {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: &'static str,
    job_type: &'static str,
    category: &'static str,
    remote_work: bool,
    requirements: &'static [&'static str],
    description: &'static str,
    posted: (i32, u32, u32),
    url: &'static str,
    featured: bool,
}

const JOBS: [Job; 8] = [
    Job {
        title: "Senior Software Engineer",
        company: "Sheffield Digital Works",
        location: "Sheffield",
        salary: "£55,000 - £70,000",
        job_type: "full-time",
        category: "technology",
        remote_work: true,
        requirements: &["5+ years backend experience", "Cloud infrastructure", "Visa sponsorship available"],
        description: "Build and run booking platforms for tourism operators across the Peak District.",
        posted: (2025, 1, 6),
        url: "https://uk.indeed.com",
        featured: true,
    },
    Job {
        title: "Staff Nurse",
        company: "Chesterfield Royal Hospital NHS Foundation Trust",
        location: "Chesterfield",
        salary: "£28,407 - £34,581",
        job_type: "full-time",
        category: "healthcare",
        remote_work: false,
        requirements: &["NMC registration", "Acute care experience"],
        description: "Band 5 nurse on a medical ward; international recruits receive OSCE support.",
        posted: (2025, 1, 3),
        url: "https://www.jobs.nhs.uk",
        featured: true,
    },
    Job {
        title: "Park Ranger",
        company: "Peak District National Park Authority",
        location: "Bakewell",
        salary: "£26,000 - £29,000",
        job_type: "full-time",
        category: "environment",
        remote_work: false,
        requirements: &["Full driving licence", "Conservation experience", "Outdoor first aid"],
        description: "Manage access, footpaths and visitor safety across the White Peak.",
        posted: (2024, 12, 18),
        url: "https://www.peakdistrict.gov.uk/looking-after/jobs",
        featured: true,
    },
    Job {
        title: "Secondary Maths Teacher",
        company: "Lady Manners School",
        location: "Bakewell",
        salary: "£31,650 - £43,607",
        job_type: "full-time",
        category: "education",
        remote_work: false,
        requirements: &["Qualified Teacher Status or equivalent", "Maths degree"],
        description: "Teach key stages 3 to 5 at a rural secondary school.",
        posted: (2024, 12, 20),
        url: "https://teaching-vacancies.service.gov.uk",
        featured: false,
    },
    Job {
        title: "Civil Engineer",
        company: "Derbyshire County Council",
        location: "Matlock",
        salary: "£40,000 - £48,000",
        job_type: "contract",
        category: "engineering",
        remote_work: false,
        requirements: &["Chartered or working towards chartership", "Highways design"],
        description: "Twelve-month contract on highway drainage and bridge maintenance.",
        posted: (2025, 1, 2),
        url: "https://www.derbyshire.gov.uk/working-for-us",
        featured: false,
    },
    Job {
        title: "Data Analyst",
        company: "High Peak Analytics",
        location: "Buxton",
        salary: "£35,000 - £42,000",
        job_type: "full-time",
        category: "technology",
        remote_work: true,
        requirements: &["SQL", "Python or R", "Stakeholder reporting"],
        description: "Hybrid role analysing visitor and retail data for regional businesses.",
        posted: (2025, 1, 8),
        url: "https://www.reed.co.uk",
        featured: false,
    },
    Job {
        title: "Hotel Operations Manager",
        company: "Hathersage Hall Hotel",
        location: "Hathersage",
        salary: "£32,000 - £36,000",
        job_type: "full-time",
        category: "hospitality",
        remote_work: false,
        requirements: &["Hospitality management experience", "Weekend availability"],
        description: "Run daily operations for a boutique country hotel.",
        posted: (2024, 12, 28),
        url: "https://www.caterer.com",
        featured: false,
    },
    Job {
        title: "Outdoor Activity Instructor",
        company: "Castleton Adventure Centre",
        location: "Castleton",
        salary: "£12.50 per hour",
        job_type: "part-time",
        category: "tourism",
        remote_work: false,
        requirements: &["Climbing or caving qualifications", "DBS check"],
        description: "Lead climbing, caving and hill walking sessions for school groups.",
        posted: (2025, 1, 5),
        url: "https://www.totaljobs.com",
        featured: false,
    },
];

pub fn listings() -> Vec<JobListing> {
    JOBS.iter()
        .enumerate()
        .map(|(i, job)| {
            let (y, m, d) = job.posted;
            JobListing {
                id: format!("job-{}", i + 1),
                title: job.title.to_string(),
                company: job.company.to_string(),
                location: job.location.to_string(),
                salary: job.salary.to_string(),
                job_type: job.job_type.to_string(),
                category: job.category.to_string(),
                remote_work: job.remote_work,
                requirements: job.requirements.iter().map(|r| r.to_string()).collect(),
                description: job.description.to_string(),
                posted_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
                application_url: job.url.to_string(),
                featured: job.featured,
            }
        })
        .collect()
}

fn sector(
    name: &str,
    demand: &str,
    salary_range: &str,
    major_employers: &[&str],
    sponsorship: bool,
    notes: &str,
) -> JobSector {
    JobSector {
        sector: name.to_string(),
        demand: demand.to_string(),
        salary_range: salary_range.to_string(),
        major_employers: major_employers.iter().map(|e| e.to_string()).collect(),
        sponsorship,
        notes: notes.to_string(),
    }
}

/// Sector outlook around the Peak District, broader than the job board
pub fn sectors() -> Vec<JobSector> {
    vec![
        sector(
            "healthcare",
            "high",
            "£28,000 - £60,000",
            &["Chesterfield Royal Hospital", "Sheffield Teaching Hospitals", "Derbyshire Community Health Services"],
            true,
            "Nursing and care roles are on the shortage list; NHS trusts sponsor routinely.",
        ),
        sector(
            "technology",
            "medium",
            "£35,000 - £75,000",
            &["Sheffield Digital Works", "Manchester tech sector"],
            true,
            "Most roles sit in Sheffield or Manchester, often hybrid.",
        ),
        sector(
            "education",
            "medium",
            "£31,650 - £49,084",
            &["Derbyshire County Council schools", "University of Derby", "University of Sheffield"],
            true,
            "Teachers from the US can apply for Qualified Teacher Status.",
        ),
        sector(
            "engineering",
            "medium",
            "£35,000 - £55,000",
            &["Derbyshire County Council", "Rolls-Royce Derby", "Tarmac Buxton"],
            true,
            "Quarrying and civil infrastructure keep demand steady.",
        ),
        sector(
            "tourism",
            "seasonal",
            "£20,000 - £30,000",
            &["Chatsworth Estate", "Peak District National Park Authority", "Castleton attractions"],
            false,
            "Peak season runs Easter to October; few roles qualify for sponsorship.",
        ),
    ]
}
