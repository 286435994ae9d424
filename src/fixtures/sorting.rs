use super::{highlights, strings};
use crate::models::{EmploymentType, JobListing, SalaryPeriod};
use chrono::Utc;

const DAY: i64 = 86_400;
const YEAR: i64 = 365 * DAY;

/// Six listings whose posting times fan out from ~1.2 hours to ~3 years
/// before now. Ids are prefixed `job_sort_` so they never collide with the
/// smoke set. Deltas are relative to the clock at seeding time, matching how
/// the data was originally authored.
#[must_use]
pub fn sorting_jobs() -> Vec<JobListing> {
    let now = Utc::now().timestamp();

    vec![
        JobListing {
            job_id: "job_sort_newest_1".to_string(),
            employer_name: "New Horizons Tech".to_string(),
            employer_logo: Some("https://placehold.co/48x48/1A2B3C/ffffff?text=NN".to_string()),
            job_title: "Frontend Developer (React)".to_string(),
            job_city: "Berlin".to_string(),
            job_state: None,
            job_country: "Germany".to_string(),
            job_is_remote: false,
            job_employment_type: EmploymentType::FullTime,
            job_description: "We're looking for a React developer to join our rapidly growing \
                              team. Fresh projects and modern stack!"
                .to_string(),
            job_highlights: highlights(&[
                ("Qualifications", &["React", "JavaScript"]),
                ("Responsibilities", &["Build UIs"]),
            ]),
            job_apply_link: "https://example.com/apply/newest_1".to_string(),
            job_required_skills: strings(&["React", "JS"]),
            job_salary_currency: Some("EUR".to_string()),
            job_salary_period: Some(SalaryPeriod::Year),
            job_salary_min: Some(55_000),
            job_salary_max: Some(75_000),
            // 2.4 hours ago
            job_posted_at_timestamp: Some(now - DAY / 10),
            job_category: "Technology".to_string(),
            job_requirements: strings(&["mid_level"]),
        },
        JobListing {
            job_id: "job_sort_newest_2".to_string(),
            employer_name: "Future Forward Innovations".to_string(),
            employer_logo: Some("https://placehold.co/48x48/3D4F5C/ffffff?text=FF".to_string()),
            job_title: "AI Research Scientist".to_string(),
            job_city: "San Francisco".to_string(),
            job_state: Some("CA".to_string()),
            job_country: "US".to_string(),
            job_is_remote: true,
            job_employment_type: EmploymentType::FullTime,
            job_description: "Push the boundaries of AI research with our cutting-edge team. \
                              Remote opportunity."
                .to_string(),
            job_highlights: highlights(&[
                ("Qualifications", &["PhD AI", "Python", "ML"]),
                ("Responsibilities", &["Research", "Develop models"]),
            ]),
            job_apply_link: "https://example.com/apply/newest_2".to_string(),
            job_required_skills: strings(&["AI", "Python", "ML"]),
            job_salary_currency: Some("USD".to_string()),
            job_salary_period: Some(SalaryPeriod::Year),
            job_salary_min: Some(180_000),
            job_salary_max: Some(250_000),
            // 1.2 hours ago
            job_posted_at_timestamp: Some(now - DAY / 20),
            job_category: "Technology".to_string(),
            job_requirements: strings(&["senior_level"]),
        },
        JobListing {
            job_id: "job_sort_oldest_1".to_string(),
            employer_name: "Old School Holdings".to_string(),
            employer_logo: Some("https://placehold.co/48x48/5C6D7E/ffffff?text=OH".to_string()),
            job_title: "Administrative Assistant".to_string(),
            job_city: "New York".to_string(),
            job_state: Some("NY".to_string()),
            job_country: "US".to_string(),
            job_is_remote: false,
            job_employment_type: EmploymentType::FullTime,
            job_description: "Support our busy office with daily administrative tasks. \
                              Long-standing company with stable environment."
                .to_string(),
            job_highlights: highlights(&[
                ("Qualifications", &["Office skills", "Communication"]),
                ("Responsibilities", &["Scheduling", "Filing"]),
            ]),
            job_apply_link: "https://example.com/apply/oldest_1".to_string(),
            job_required_skills: strings(&["Admin", "Organization"]),
            job_salary_currency: Some("USD".to_string()),
            job_salary_period: Some(SalaryPeriod::Year),
            job_salary_min: Some(40_000),
            job_salary_max: Some(50_000),
            // 2 years ago
            job_posted_at_timestamp: Some(now - 2 * YEAR),
            job_category: "Administrative".to_string(),
            job_requirements: strings(&["entry_level"]),
        },
        JobListing {
            job_id: "job_sort_oldest_2".to_string(),
            employer_name: "Traditional Retail Co.".to_string(),
            employer_logo: Some("https://placehold.co/48x48/7E8F9A/ffffff?text=TR".to_string()),
            job_title: "Retail Associate".to_string(),
            job_city: "London".to_string(),
            job_state: None,
            job_country: "UK".to_string(),
            job_is_remote: false,
            job_employment_type: EmploymentType::PartTime,
            job_description: "Join our retail team. Provide excellent customer service and \
                              maintain store appearance."
                .to_string(),
            job_highlights: highlights(&[
                ("Qualifications", &["Customer service", "Retail experience"]),
                ("Responsibilities", &["Sales", "Stocking"]),
            ]),
            job_apply_link: "https://example.com/apply/oldest_2".to_string(),
            job_required_skills: strings(&["Customer Service", "Sales"]),
            job_salary_currency: Some("GBP".to_string()),
            job_salary_period: Some(SalaryPeriod::Hour),
            job_salary_min: Some(10),
            job_salary_max: Some(12),
            // 3 years ago
            job_posted_at_timestamp: Some(now - 3 * YEAR),
            job_category: "Retail".to_string(),
            job_requirements: strings(&["entry_level"]),
        },
        JobListing {
            job_id: "job_sort_recent_3".to_string(),
            employer_name: "Innovate Now".to_string(),
            employer_logo: Some("https://placehold.co/48x48/9AAAB9/ffffff?text=IN".to_string()),
            job_title: "Product Designer".to_string(),
            job_city: "Chicago".to_string(),
            job_state: Some("IL".to_string()),
            job_country: "US".to_string(),
            job_is_remote: false,
            job_employment_type: EmploymentType::FullTime,
            job_description: "Design user-centric products for our fast-paced startup. \
                              Creativity and collaboration are key."
                .to_string(),
            job_highlights: highlights(&[
                ("Qualifications", &["UX/UI", "Figma"]),
                ("Responsibilities", &["Wireframing", "Prototyping"]),
            ]),
            job_apply_link: "https://example.com/apply/recent_3".to_string(),
            job_required_skills: strings(&["UX Design", "UI Design"]),
            job_salary_currency: Some("USD".to_string()),
            job_salary_period: Some(SalaryPeriod::Year),
            job_salary_min: Some(90_000),
            job_salary_max: Some(120_000),
            // 12 hours ago
            job_posted_at_timestamp: Some(now - DAY / 2),
            job_category: "Design".to_string(),
            job_requirements: strings(&["mid_level"]),
        },
        JobListing {
            job_id: "job_sort_recent_4".to_string(),
            employer_name: "Green Solutions Inc.".to_string(),
            employer_logo: Some("https://placehold.co/48x48/B9C8D7/ffffff?text=GR".to_string()),
            job_title: "Environmental Scientist".to_string(),
            job_city: "Nairobi".to_string(),
            job_state: None,
            job_country: "Kenya".to_string(),
            job_is_remote: false,
            job_employment_type: EmploymentType::FullTime,
            job_description: "Contribute to sustainable practices and environmental research \
                              in East Africa."
                .to_string(),
            job_highlights: highlights(&[
                ("Qualifications", &["Environmental Science", "Research"]),
                ("Responsibilities", &["Fieldwork", "Data analysis"]),
            ]),
            job_apply_link: "https://example.com/apply/recent_4".to_string(),
            job_required_skills: strings(&["Environmental Science", "Research"]),
            job_salary_currency: Some("KES".to_string()),
            job_salary_period: Some(SalaryPeriod::Year),
            job_salary_min: Some(1_500_000),
            job_salary_max: Some(2_500_000),
            // ~17 hours ago
            job_posted_at_timestamp: Some(now - DAY * 7 / 10),
            job_category: "Science".to_string(),
            job_requirements: strings(&["mid_level"]),
        },
    ]
}
