use super::{highlights, strings};
use crate::models::{EmploymentType, JobListing, SalaryPeriod};
use chrono::Utc;

const DAY: i64 = 86_400;

/// General dummy listings for smoke-testing list and detail views. Usually
/// seeded with the server timestamp policy so they all land "just posted".
#[must_use]
pub fn smoke_jobs() -> Vec<JobListing> {
    let now = Utc::now().timestamp();

    vec![
        JobListing {
            job_id: "job_dummy_1".to_string(),
            employer_name: "Acme Software GmbH".to_string(),
            employer_logo: Some("https://placehold.co/48x48/2B3A4C/ffffff?text=AC".to_string()),
            job_title: "Backend Engineer (Go)".to_string(),
            job_city: "Munich".to_string(),
            job_state: None,
            job_country: "Germany".to_string(),
            job_is_remote: true,
            job_employment_type: EmploymentType::FullTime,
            job_description: "Own backend services end to end in a small product team. \
                              Kubernetes, Postgres, and plenty of autonomy."
                .to_string(),
            job_highlights: highlights(&[
                ("Qualifications", &["Go", "SQL", "3+ years experience"]),
                ("Responsibilities", &["API design", "On-call rotation"]),
                ("Benefits", &["Remote-first", "Learning budget"]),
            ]),
            job_apply_link: "https://example.com/apply/dummy_1".to_string(),
            job_required_skills: strings(&["Go", "PostgreSQL", "Kubernetes"]),
            job_salary_currency: Some("EUR".to_string()),
            job_salary_period: Some(SalaryPeriod::Year),
            job_salary_min: Some(70_000),
            job_salary_max: Some(90_000),
            job_posted_at_timestamp: Some(now - 3 * DAY),
            job_category: "Technology".to_string(),
            job_requirements: strings(&["mid_level"]),
        },
        JobListing {
            job_id: "job_dummy_2".to_string(),
            employer_name: "Brightside Health".to_string(),
            employer_logo: Some("https://placehold.co/48x48/4C5B6D/ffffff?text=BH".to_string()),
            job_title: "Registered Nurse".to_string(),
            job_city: "Austin".to_string(),
            job_state: Some("TX".to_string()),
            job_country: "US".to_string(),
            job_is_remote: false,
            job_employment_type: EmploymentType::FullTime,
            job_description: "Provide patient care in our outpatient clinic. Supportive team \
                              and predictable shifts."
                .to_string(),
            job_highlights: highlights(&[
                ("Qualifications", &["RN license", "BLS certification"]),
                ("Responsibilities", &["Patient care", "Charting"]),
            ]),
            job_apply_link: "https://example.com/apply/dummy_2".to_string(),
            job_required_skills: strings(&["Nursing", "Patient Care"]),
            job_salary_currency: Some("USD".to_string()),
            job_salary_period: Some(SalaryPeriod::Hour),
            job_salary_min: Some(38),
            job_salary_max: Some(52),
            job_posted_at_timestamp: Some(now - 6 * DAY),
            job_category: "Healthcare".to_string(),
            job_requirements: strings(&["mid_level"]),
        },
        JobListing {
            job_id: "job_dummy_3".to_string(),
            employer_name: "Ledger & Lane LLP".to_string(),
            employer_logo: Some("https://placehold.co/48x48/6D7C8E/ffffff?text=LL".to_string()),
            job_title: "Junior Accountant".to_string(),
            job_city: "Toronto".to_string(),
            job_state: Some("ON".to_string()),
            job_country: "Canada".to_string(),
            job_is_remote: false,
            job_employment_type: EmploymentType::FullTime,
            job_description: "Assist with month-end close, reconciliations, and client \
                              reporting. Great first role in accounting."
                .to_string(),
            job_highlights: highlights(&[
                ("Qualifications", &["Accounting degree", "Excel"]),
                ("Responsibilities", &["Reconciliations", "Reporting"]),
            ]),
            job_apply_link: "https://example.com/apply/dummy_3".to_string(),
            job_required_skills: strings(&["Accounting", "Excel"]),
            job_salary_currency: Some("CAD".to_string()),
            job_salary_period: Some(SalaryPeriod::Year),
            job_salary_min: Some(52_000),
            job_salary_max: Some(60_000),
            job_posted_at_timestamp: Some(now - 10 * DAY),
            job_category: "Finance".to_string(),
            job_requirements: strings(&["entry_level"]),
        },
        JobListing {
            job_id: "job_dummy_4".to_string(),
            employer_name: "Pixel & Prose Agency".to_string(),
            employer_logo: Some("https://placehold.co/48x48/8E9DAF/ffffff?text=PP".to_string()),
            job_title: "Content Writer (Freelance)".to_string(),
            job_city: "Remote".to_string(),
            job_state: None,
            job_country: "US".to_string(),
            job_is_remote: true,
            job_employment_type: EmploymentType::Contractor,
            job_description: "Write long-form marketing content for B2B SaaS clients. \
                              Flexible hours, per-article pricing."
                .to_string(),
            job_highlights: highlights(&[
                ("Qualifications", &["Portfolio", "SEO basics"]),
                ("Responsibilities", &["Drafting", "Revisions"]),
            ]),
            job_apply_link: "https://example.com/apply/dummy_4".to_string(),
            job_required_skills: strings(&["Writing", "SEO"]),
            job_salary_currency: Some("USD".to_string()),
            job_salary_period: Some(SalaryPeriod::Week),
            job_salary_min: Some(800),
            job_salary_max: Some(1_500),
            job_posted_at_timestamp: Some(now - 14 * DAY),
            job_category: "Marketing".to_string(),
            job_requirements: strings(&["mid_level"]),
        },
        JobListing {
            job_id: "job_dummy_5".to_string(),
            employer_name: "Summit Logistics".to_string(),
            employer_logo: Some("https://placehold.co/48x48/AFBEC8/ffffff?text=SL".to_string()),
            job_title: "Warehouse Supervisor".to_string(),
            job_city: "Rotterdam".to_string(),
            job_state: None,
            job_country: "Netherlands".to_string(),
            job_is_remote: false,
            job_employment_type: EmploymentType::FullTime,
            job_description: "Lead a shift of 12 in our distribution hub. Forklift \
                              certification a plus."
                .to_string(),
            job_highlights: highlights(&[
                ("Qualifications", &["Team leadership", "Logistics experience"]),
                ("Responsibilities", &["Shift planning", "Safety compliance"]),
            ]),
            job_apply_link: "https://example.com/apply/dummy_5".to_string(),
            job_required_skills: strings(&["Logistics", "Leadership"]),
            job_salary_currency: Some("EUR".to_string()),
            job_salary_period: Some(SalaryPeriod::Month),
            job_salary_min: Some(3_200),
            job_salary_max: Some(3_900),
            job_posted_at_timestamp: Some(now - 21 * DAY),
            job_category: "Logistics".to_string(),
            job_requirements: strings(&["senior_level"]),
        },
    ]
}
