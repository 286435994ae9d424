pub mod job;

pub use job::{EmploymentType, JobListing, SalaryPeriod, TimestampPolicy, ValidationError};
