use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Earliest and latest epoch seconds Firestore timestamps can represent
/// (0001-01-01T00:00:00Z and 9999-12-31T23:59:59Z).
const FIRESTORE_EPOCH_MIN: i64 = -62_135_596_800;
const FIRESTORE_EPOCH_MAX: i64 = 253_402_300_799;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("job_id must not be empty")]
    EmptyId,

    #[error("salary bounds inverted for {job_id}: min {min} > max {max}")]
    SalaryBounds { job_id: String, min: i64, max: i64 },

    #[error("posted timestamp {epoch} for {job_id} is outside the Firestore range")]
    TimestampOutOfRange { job_id: String, epoch: i64 },
}

/// One job listing document, shaped exactly like the records the job-board
/// frontend reads back from Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub job_id: String,
    pub employer_name: String,
    pub employer_logo: Option<String>,
    pub job_title: String,
    pub job_city: String,
    pub job_state: Option<String>,
    pub job_country: String,
    pub job_is_remote: bool,
    pub job_employment_type: EmploymentType,
    pub job_description: String,
    pub job_highlights: BTreeMap<String, Vec<String>>,
    pub job_apply_link: String,
    pub job_required_skills: Vec<String>,
    pub job_salary_currency: Option<String>,
    pub job_salary_period: Option<SalaryPeriod>,
    pub job_salary_min: Option<i64>,
    pub job_salary_max: Option<i64>,
    /// Plain epoch seconds as authored; converted to a native timestamp on write.
    pub job_posted_at_timestamp: Option<i64>,
    pub job_category: String,
    pub job_requirements: Vec<String>,
}

impl JobListing {
    /// Checks the per-record invariants before anything is written.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.job_id.is_empty() {
            return Err(ValidationError::EmptyId);
        }

        if let (Some(min), Some(max)) = (self.job_salary_min, self.job_salary_max)
            && min > max
        {
            return Err(ValidationError::SalaryBounds {
                job_id: self.job_id.clone(),
                min,
                max,
            });
        }

        if let Some(epoch) = self.job_posted_at_timestamp
            && !(FIRESTORE_EPOCH_MIN..=FIRESTORE_EPOCH_MAX).contains(&epoch)
        {
            return Err(ValidationError::TimestampOutOfRange {
                job_id: self.job_id.clone(),
                epoch,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contractor,
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FullTime => "FULLTIME",
            Self::PartTime => "PARTTIME",
            Self::Contractor => "CONTRACTOR",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SalaryPeriod {
    Hour,
    Week,
    Month,
    Year,
}

impl fmt::Display for SalaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Hour => "HOUR",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
        };
        write!(f, "{s}")
    }
}

/// How `job_posted_at_timestamp` is written to the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TimestampPolicy {
    /// Convert the authored epoch value, preserving relative recency
    /// across the seeded records.
    Authored,
    /// Substitute the database's write-time server timestamp; all records
    /// in one run land with effectively the same recency.
    Server,
}

impl fmt::Display for TimestampPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Authored => "authored",
            Self::Server => "server",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str) -> JobListing {
        JobListing {
            job_id: id.to_string(),
            employer_name: "Acme".to_string(),
            employer_logo: None,
            job_title: "Engineer".to_string(),
            job_city: "Berlin".to_string(),
            job_state: None,
            job_country: "Germany".to_string(),
            job_is_remote: false,
            job_employment_type: EmploymentType::FullTime,
            job_description: "Build things".to_string(),
            job_highlights: BTreeMap::new(),
            job_apply_link: "https://example.com/apply".to_string(),
            job_required_skills: vec![],
            job_salary_currency: Some("EUR".to_string()),
            job_salary_period: Some(SalaryPeriod::Year),
            job_salary_min: Some(50_000),
            job_salary_max: Some(70_000),
            job_posted_at_timestamp: Some(1_700_000_000),
            job_category: "Technology".to_string(),
            job_requirements: vec!["mid_level".to_string()],
        }
    }

    #[test]
    fn valid_listing_passes() {
        assert!(listing("job_1").validate().is_ok());
    }

    #[test]
    fn empty_id_rejected() {
        let job = listing("");
        assert!(matches!(job.validate(), Err(ValidationError::EmptyId)));
    }

    #[test]
    fn inverted_salary_bounds_rejected() {
        let mut job = listing("job_1");
        job.job_salary_min = Some(90_000);
        job.job_salary_max = Some(60_000);
        assert!(matches!(
            job.validate(),
            Err(ValidationError::SalaryBounds { .. })
        ));
    }

    #[test]
    fn one_sided_salary_bound_allowed() {
        let mut job = listing("job_1");
        job.job_salary_max = None;
        assert!(job.validate().is_ok());
    }

    #[test]
    fn out_of_range_timestamp_rejected() {
        let mut job = listing("job_1");
        job.job_posted_at_timestamp = Some(i64::MAX);
        assert!(matches!(
            job.validate(),
            Err(ValidationError::TimestampOutOfRange { .. })
        ));
    }

    #[test]
    fn employment_type_serializes_uppercase() {
        let json = serde_json::to_string(&EmploymentType::PartTime).unwrap();
        assert_eq!(json, "\"PARTTIME\"");
        let json = serde_json::to_string(&SalaryPeriod::Year).unwrap();
        assert_eq!(json, "\"YEAR\"");
    }
}
