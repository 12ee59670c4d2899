//! Job listing filters.

use serde::{Deserialize, Serialize};

use crate::job::{ExperienceLevel, JobType};

/// Filter set for the job listing endpoint.
///
/// Serialized as query parameters; only fields with a defined, non-empty
/// value make it into the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFilters {
    /// Free-text search over title and description
    pub search: Option<String>,
    /// Category name
    pub category: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub experience_level: Option<ExperienceLevel>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub is_remote: Option<bool>,
}

impl JobFilters {
    /// Query pairs for the defined, non-empty fields.
    ///
    /// Blank text fields count as undefined: a filter form handing over
    /// `location: ""` must not produce `location=` in the URL.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        push_text(&mut query, "search", self.search.as_deref());
        push_text(&mut query, "category", self.category.as_deref());
        push_text(&mut query, "location", self.location.as_deref());

        if let Some(job_type) = self.job_type {
            query.push(("job_type", job_type.as_str().to_string()));
        }
        if let Some(level) = self.experience_level {
            query.push(("experience_level", level.as_str().to_string()));
        }
        if let Some(min) = self.salary_min {
            query.push(("salary_min", min.to_string()));
        }
        if let Some(max) = self.salary_max {
            query.push(("salary_max", max.to_string()));
        }
        if let Some(remote) = self.is_remote {
            query.push(("is_remote", remote.to_string()));
        }

        query
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}

fn push_text(query: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.trim().is_empty() {
            query.push((key, value.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_no_query() {
        let filters = JobFilters::default();
        assert!(filters.to_query().is_empty());
        assert!(filters.is_empty());
    }

    #[test]
    fn test_blank_text_fields_are_omitted() {
        let filters = JobFilters {
            category: Some("Construction".to_string()),
            location: Some("".to_string()),
            ..JobFilters::default()
        };
        let query = filters.to_query();
        assert_eq!(query, vec![("category", "Construction".to_string())]);
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let filters = JobFilters {
            search: Some("   ".to_string()),
            ..JobFilters::default()
        };
        assert!(filters.to_query().is_empty());
    }

    #[test]
    fn test_typed_fields_use_wire_names() {
        let filters = JobFilters {
            job_type: Some(JobType::FullTime),
            experience_level: Some(ExperienceLevel::Senior),
            salary_min: Some(25000.0),
            is_remote: Some(false),
            ..JobFilters::default()
        };
        let query = filters.to_query();
        assert!(query.contains(&("job_type", "full_time".to_string())));
        assert!(query.contains(&("experience_level", "senior".to_string())));
        assert!(query.contains(&("salary_min", "25000".to_string())));
        assert!(query.contains(&("is_remote", "false".to_string())));
    }
}
