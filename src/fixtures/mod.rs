//! Hand-authored sample job listings.
//!
//! Two sets: `sorting` carries posting timestamps spread from hours to years
//! before now (for recency-sort and pagination testing), `smoke` is general
//! dummy data for exercising list and detail views.

mod smoke;
mod sorting;

use crate::models::JobListing;
use std::collections::BTreeMap;

pub use smoke::smoke_jobs;
pub use sorting::sorting_jobs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FixtureSet {
    /// Listings with authored posting times spread across hours to years.
    Sorting,
    /// General dummy listings for smoke-testing the job board.
    Smoke,
    /// Both sets.
    All,
}

impl std::fmt::Display for FixtureSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Sorting => "sorting",
            Self::Smoke => "smoke",
            Self::All => "all",
        };
        write!(f, "{s}")
    }
}

impl FixtureSet {
    #[must_use]
    pub fn records(self) -> Vec<JobListing> {
        match self {
            Self::Sorting => sorting_jobs(),
            Self::Smoke => smoke_jobs(),
            Self::All => {
                let mut jobs = sorting_jobs();
                jobs.extend(smoke_jobs());
                jobs
            }
        }
    }
}

fn highlights(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(category, lines)| {
            (
                (*category).to_string(),
                lines.iter().map(|s| (*s).to_string()).collect(),
            )
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
