//! Interest filter normalization.
//!
//! Agent runtimes are sloppy about this argument: it arrives as a single
//! category, an array, or a JSON-encoded array in a string. The dispatch
//! boundary normalizes all of those into one canonical sum type before the
//! search logic sees it.

use serde_json::Value;
use voyagent_core::error::ToolError;

/// Canonical form of the `interests` tool argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterestFilter {
    /// No filter — every category matches
    None,
    /// A single category
    One(String),
    /// A set of categories (empty set matches everything)
    Many(Vec<String>),
}

impl InterestFilter {
    /// Normalize the raw argument value.
    ///
    /// Accepted shapes: missing/null, `"beaches"`, `["beaches","culture"]`,
    /// and the string-encoded `"[\"beaches\",\"culture\"]"`. A string that
    /// looks like JSON but fails to parse degrades to no filter, matching the
    /// original planner's behavior. Anything else is malformed input.
    pub fn from_value(value: &Value) -> Result<Self, ToolError> {
        match value {
            Value::Null => Ok(Self::None),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.starts_with('[') {
                    match serde_json::from_str::<Vec<String>>(trimmed) {
                        Ok(list) => Ok(Self::Many(list)),
                        Err(_) => {
                            tracing::debug!("unparseable interests string, ignoring filter");
                            Ok(Self::None)
                        }
                    }
                } else if trimmed.is_empty() {
                    Ok(Self::None)
                } else {
                    Ok(Self::One(trimmed.to_string()))
                }
            }
            Value::Array(items) => {
                let list = items
                    .iter()
                    .map(|item| {
                        item.as_str().map(str::to_string).ok_or_else(|| {
                            ToolError::InvalidArguments(
                                "interests array must contain only strings".into(),
                            )
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Many(list))
            }
            _ => Err(ToolError::InvalidArguments(
                "interests must be a string or an array of strings".into(),
            )),
        }
    }

    /// Set-membership test for an activity category.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::None => true,
            Self::One(interest) => interest == category,
            Self::Many(interests) => interests.is_empty() || interests.iter().any(|i| i == category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_means_no_filter() {
        assert_eq!(InterestFilter::from_value(&Value::Null).unwrap(), InterestFilter::None);
        assert!(InterestFilter::None.matches("anything"));
    }

    #[test]
    fn scalar_string_is_single_interest() {
        let filter = InterestFilter::from_value(&json!("beaches")).unwrap();
        assert_eq!(filter, InterestFilter::One("beaches".into()));
        assert!(filter.matches("beaches"));
        assert!(!filter.matches("culture"));
    }

    #[test]
    fn array_is_many() {
        let filter = InterestFilter::from_value(&json!(["beaches", "culture"])).unwrap();
        assert!(filter.matches("culture"));
        assert!(!filter.matches("nightlife"));
    }

    #[test]
    fn encoded_array_is_decoded() {
        let filter = InterestFilter::from_value(&json!("[\"beaches\",\"culture\"]")).unwrap();
        assert_eq!(filter, InterestFilter::Many(vec!["beaches".into(), "culture".into()]));
    }

    #[test]
    fn broken_encoded_array_degrades_to_no_filter() {
        let filter = InterestFilter::from_value(&json!("[beaches,")).unwrap();
        assert_eq!(filter, InterestFilter::None);
    }

    #[test]
    fn empty_set_matches_everything() {
        let filter = InterestFilter::from_value(&json!([])).unwrap();
        assert!(filter.matches("beaches"));
    }

    #[test]
    fn non_string_array_rejected() {
        let err = InterestFilter::from_value(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn number_rejected() {
        assert!(InterestFilter::from_value(&json!(42)).is_err());
    }
}
