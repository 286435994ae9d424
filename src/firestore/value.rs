//! Firestore REST value encoding.
//!
//! The REST API wraps every field in a single-key object naming its type
//! (`stringValue`, `integerValue`, ...). Integers travel as JSON strings.

use crate::models::{JobListing, TimestampPolicy};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    NullValue(()),
    BooleanValue(bool),
    IntegerValue(#[serde(with = "int_as_string")] i64),
    DoubleValue(f64),
    /// RFC 3339 UTC instant.
    TimestampValue(String),
    StringValue(String),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

mod int_as_string {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

impl Value {
    fn string(s: impl Into<String>) -> Self {
        Self::StringValue(s.into())
    }

    fn opt_string(s: Option<&String>) -> Self {
        s.map_or(Self::NullValue(()), |s| Self::StringValue(s.clone()))
    }

    fn string_array(items: &[String]) -> Self {
        Self::ArrayValue(ArrayValue {
            values: items.iter().map(|s| Self::string(s.clone())).collect(),
        })
    }
}

#[derive(Debug, Error)]
#[error("epoch value {0} is not representable as a Firestore timestamp")]
pub struct TimestampOutOfRange(pub i64);

/// Converts authored epoch seconds to the RFC 3339 form `timestampValue` expects.
pub fn epoch_to_timestamp(epoch: i64) -> Result<String, TimestampOutOfRange> {
    let instant: DateTime<Utc> =
        DateTime::from_timestamp(epoch, 0).ok_or(TimestampOutOfRange(epoch))?;
    Ok(instant.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// A listing encoded for one Firestore write: the literal field map plus the
/// field paths that must instead be filled in with the server's write time.
#[derive(Debug, Clone)]
pub struct EncodedJob {
    pub fields: BTreeMap<String, Value>,
    pub server_time_fields: Vec<String>,
}

/// Flattens a listing into Firestore fields under the given timestamp policy.
///
/// Optional fields are written as explicit nulls so a re-run fully replaces
/// the previous document rather than leaving stale values behind.
pub fn encode_job(
    job: &JobListing,
    policy: TimestampPolicy,
) -> Result<EncodedJob, TimestampOutOfRange> {
    let mut fields = BTreeMap::new();

    fields.insert("job_id".into(), Value::string(job.job_id.clone()));
    fields.insert(
        "employer_name".into(),
        Value::string(job.employer_name.clone()),
    );
    fields.insert(
        "employer_logo".into(),
        Value::opt_string(job.employer_logo.as_ref()),
    );
    fields.insert("job_title".into(), Value::string(job.job_title.clone()));
    fields.insert("job_city".into(), Value::string(job.job_city.clone()));
    fields.insert("job_state".into(), Value::opt_string(job.job_state.as_ref()));
    fields.insert("job_country".into(), Value::string(job.job_country.clone()));
    fields.insert("job_is_remote".into(), Value::BooleanValue(job.job_is_remote));
    fields.insert(
        "job_employment_type".into(),
        Value::string(job.job_employment_type.to_string()),
    );
    fields.insert(
        "job_description".into(),
        Value::string(job.job_description.clone()),
    );

    let highlights = job
        .job_highlights
        .iter()
        .map(|(category, lines)| (category.clone(), Value::string_array(lines)))
        .collect();
    fields.insert(
        "job_highlights".into(),
        Value::MapValue(MapValue { fields: highlights }),
    );

    fields.insert(
        "job_apply_link".into(),
        Value::string(job.job_apply_link.clone()),
    );
    fields.insert(
        "job_required_skills".into(),
        Value::string_array(&job.job_required_skills),
    );
    fields.insert(
        "job_salary_currency".into(),
        Value::opt_string(job.job_salary_currency.as_ref()),
    );
    fields.insert(
        "job_salary_period".into(),
        job.job_salary_period
            .map_or(Value::NullValue(()), |p| Value::string(p.to_string())),
    );
    fields.insert(
        "job_salary_min".into(),
        job.job_salary_min
            .map_or(Value::NullValue(()), Value::IntegerValue),
    );
    fields.insert(
        "job_salary_max".into(),
        job.job_salary_max
            .map_or(Value::NullValue(()), Value::IntegerValue),
    );

    let mut server_time_fields = Vec::new();
    match (policy, job.job_posted_at_timestamp) {
        (TimestampPolicy::Authored, Some(epoch)) => {
            fields.insert(
                "job_posted_at_timestamp".into(),
                Value::TimestampValue(epoch_to_timestamp(epoch)?),
            );
        }
        (TimestampPolicy::Server, _) => {
            server_time_fields.push("job_posted_at_timestamp".to_string());
        }
        (TimestampPolicy::Authored, None) => {
            fields.insert("job_posted_at_timestamp".into(), Value::NullValue(()));
        }
    }

    fields.insert(
        "job_category".into(),
        Value::string(job.job_category.clone()),
    );
    fields.insert(
        "job_requirements".into(),
        Value::string_array(&job.job_requirements),
    );

    Ok(EncodedJob {
        fields,
        server_time_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmploymentType, SalaryPeriod};

    fn sample_job() -> JobListing {
        JobListing {
            job_id: "job_sort_newest_1".to_string(),
            employer_name: "New Horizons Tech".to_string(),
            employer_logo: Some("https://placehold.co/48x48".to_string()),
            job_title: "Frontend Developer (React)".to_string(),
            job_city: "Berlin".to_string(),
            job_state: None,
            job_country: "Germany".to_string(),
            job_is_remote: false,
            job_employment_type: EmploymentType::FullTime,
            job_description: "React developer wanted".to_string(),
            job_highlights: std::collections::BTreeMap::from([(
                "Qualifications".to_string(),
                vec!["React".to_string(), "JavaScript".to_string()],
            )]),
            job_apply_link: "https://example.com/apply/newest_1".to_string(),
            job_required_skills: vec!["React".to_string(), "JS".to_string()],
            job_salary_currency: Some("EUR".to_string()),
            job_salary_period: Some(SalaryPeriod::Year),
            job_salary_min: Some(55_000),
            job_salary_max: Some(75_000),
            job_posted_at_timestamp: Some(1_756_000_000),
            job_category: "Technology".to_string(),
            job_requirements: vec!["mid_level".to_string()],
        }
    }

    #[test]
    fn integer_value_serializes_as_string() {
        let json = serde_json::to_value(&Value::IntegerValue(55_000)).unwrap();
        assert_eq!(json, serde_json::json!({ "integerValue": "55000" }));
    }

    #[test]
    fn integer_value_round_trips() {
        let json = serde_json::json!({ "integerValue": "-42" });
        let value: Value = serde_json::from_value(json).unwrap();
        assert_eq!(value, Value::IntegerValue(-42));
    }

    #[test]
    fn null_value_serializes_as_null() {
        let json = serde_json::to_value(&Value::NullValue(())).unwrap();
        assert_eq!(json, serde_json::json!({ "nullValue": null }));
    }

    #[test]
    fn epoch_conversion_is_rfc3339_utc() {
        assert_eq!(epoch_to_timestamp(0).unwrap(), "1970-01-01T00:00:00Z");
        assert_eq!(
            epoch_to_timestamp(1_700_000_000).unwrap(),
            "2023-11-14T22:13:20Z"
        );
    }

    #[test]
    fn epoch_conversion_preserves_ordering() {
        let older = epoch_to_timestamp(1_600_000_000).unwrap();
        let newer = epoch_to_timestamp(1_700_000_000).unwrap();
        assert!(older < newer);
    }

    #[test]
    fn authored_policy_writes_literal_timestamp() {
        let encoded = encode_job(&sample_job(), TimestampPolicy::Authored).unwrap();
        assert!(encoded.server_time_fields.is_empty());
        assert!(matches!(
            encoded.fields.get("job_posted_at_timestamp"),
            Some(Value::TimestampValue(_))
        ));
    }

    #[test]
    fn server_policy_defers_timestamp_to_transform() {
        let encoded = encode_job(&sample_job(), TimestampPolicy::Server).unwrap();
        assert_eq!(
            encoded.server_time_fields,
            vec!["job_posted_at_timestamp".to_string()]
        );
        assert!(!encoded.fields.contains_key("job_posted_at_timestamp"));
    }

    #[test]
    fn missing_optionals_become_explicit_nulls() {
        let mut job = sample_job();
        job.job_state = None;
        job.job_salary_min = None;
        let encoded = encode_job(&job, TimestampPolicy::Authored).unwrap();
        assert_eq!(encoded.fields.get("job_state"), Some(&Value::NullValue(())));
        assert_eq!(
            encoded.fields.get("job_salary_min"),
            Some(&Value::NullValue(()))
        );
    }

    #[test]
    fn highlights_encode_as_nested_map_of_arrays() {
        let encoded = encode_job(&sample_job(), TimestampPolicy::Authored).unwrap();
        let Some(Value::MapValue(map)) = encoded.fields.get("job_highlights") else {
            panic!("job_highlights should be a mapValue");
        };
        let Some(Value::ArrayValue(list)) = map.fields.get("Qualifications") else {
            panic!("Qualifications should be an arrayValue");
        };
        assert_eq!(list.values.len(), 2);
        assert_eq!(list.values[0], Value::StringValue("React".to_string()));
    }

    #[test]
    fn enums_encode_as_wire_strings() {
        let encoded = encode_job(&sample_job(), TimestampPolicy::Authored).unwrap();
        assert_eq!(
            encoded.fields.get("job_employment_type"),
            Some(&Value::StringValue("FULLTIME".to_string()))
        );
        assert_eq!(
            encoded.fields.get("job_salary_period"),
            Some(&Value::StringValue("YEAR".to_string()))
        );
    }
}
