//! List query parameters and the list response body

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sentinel status value meaning "no filtering"
pub const STATUS_ALL: &str = "all";

/// Sort direction
///
/// Serialized as `asc` / `desc`, the values the tables put in `sortDir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply this direction to an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Read a `sortDir` query value
    ///
    /// Anything other than `asc` (in any case) sorts descending.
    pub fn from_query(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("invalid sort direction '{}'", other)),
        }
    }
}

/// Status filter: either the `"all"` sentinel or one exact status value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// Build a filter from the raw query value
    ///
    /// Only the exact sentinel `"all"` disables filtering.
    pub fn parse(raw: &str) -> Self {
        if raw == STATUS_ALL {
            StatusFilter::All
        } else {
            StatusFilter::Only(raw.to_string())
        }
    }

    /// Exact, case-sensitive match; a missing status never matches a concrete filter
    pub fn matches(&self, status: Option<&str>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => status == Some(expected.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => STATUS_ALL,
            StatusFilter::Only(value) => value,
        }
    }
}

impl From<&str> for StatusFilter {
    fn from(raw: &str) -> Self {
        StatusFilter::parse(raw)
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(StatusFilter::parse(&raw))
    }
}

/// Query string parameters as they arrive on `/api/{resource}`
///
/// # Example
/// ```text
/// GET /api/claims?sortBy=amount&sortDir=asc&status=pending
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQueryParams {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,

    #[serde(rename = "sortDir")]
    pub sort_dir: Option<String>,

    pub status: Option<String>,
}

impl ListQueryParams {
    /// Fill missing parameters with the resource defaults
    pub fn resolve(self, default_sort_field: &str) -> ListQuery {
        ListQuery {
            sort_by: self
                .sort_by
                .filter(|field| !field.is_empty())
                .unwrap_or_else(|| default_sort_field.to_string()),
            sort_dir: self
                .sort_dir
                .as_deref()
                .map(SortDirection::from_query)
                .unwrap_or_default(),
            status: self
                .status
                .as_deref()
                .map(StatusFilter::parse)
                .unwrap_or_default(),
        }
    }
}

/// A fully resolved list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub sort_by: String,
    pub sort_dir: SortDirection,
    pub status: StatusFilter,
}

impl ListQuery {
    /// Query pairs sent to the backend
    pub fn to_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("sortBy", self.sort_by.clone()),
            ("sortDir", self.sort_dir.as_str().to_string()),
            ("status", self.status.as_str().to_string()),
        ]
    }
}

/// Body returned for a list request: `{<collectionKey>: [...], "total": n}`
#[derive(Debug, Clone)]
pub struct ListResponse {
    pub collection_key: String,
    pub items: Vec<Value>,
}

impl ListResponse {
    pub fn new(collection_key: impl Into<String>, items: Vec<Value>) -> Self {
        Self {
            collection_key: collection_key.into(),
            items,
        }
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn into_json(self) -> Value {
        let total = self.total();
        let mut body = Map::new();
        body.insert(self.collection_key, Value::Array(self.items));
        body.insert("total".to_string(), Value::from(total));
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direction_toggle_alternates() {
        let dir = SortDirection::Asc;
        assert_eq!(dir.toggled(), SortDirection::Desc);
        assert_eq!(dir.toggled().toggled(), SortDirection::Asc);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("ASC".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_query_direction_is_lenient() {
        assert_eq!(SortDirection::from_query("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::from_query("ASC"), SortDirection::Asc);
        assert_eq!(SortDirection::from_query("DESC"), SortDirection::Desc);
        assert_eq!(SortDirection::from_query("sideways"), SortDirection::Desc);
        assert_eq!(SortDirection::from_query(""), SortDirection::Desc);
    }

    #[test]
    fn test_status_filter_sentinel() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("All"),
            StatusFilter::Only("All".to_string())
        );
    }

    #[test]
    fn test_status_filter_exact_match() {
        let filter = StatusFilter::parse("pending");
        assert!(filter.matches(Some("pending")));
        assert!(!filter.matches(Some("Pending")));
        assert!(!filter.matches(Some("pending_review")));
        assert!(!filter.matches(None));
        assert!(StatusFilter::All.matches(None));
    }

    #[test]
    fn test_params_resolve_defaults() {
        let query = ListQueryParams::default().resolve("dateSubmitted");
        assert_eq!(query.sort_by, "dateSubmitted");
        assert_eq!(query.sort_dir, SortDirection::Desc);
        assert_eq!(query.status, StatusFilter::All);
    }

    #[test]
    fn test_params_deserialize_from_query_names() {
        let params: ListQueryParams =
            serde_json::from_value(json!({"sortBy": "amount", "sortDir": "asc", "status": "approved"}))
                .expect("params should deserialize");
        let query = params.resolve("dateSubmitted");
        assert_eq!(query.sort_by, "amount");
        assert_eq!(query.sort_dir, SortDirection::Asc);
        assert_eq!(query.status, StatusFilter::Only("approved".to_string()));
    }

    #[test]
    fn test_to_pairs() {
        let query = ListQuery {
            sort_by: "amount".to_string(),
            sort_dir: SortDirection::Asc,
            status: StatusFilter::All,
        };
        let pairs = query.to_pairs();
        assert_eq!(pairs[0], ("sortBy", "amount".to_string()));
        assert_eq!(pairs[1], ("sortDir", "asc".to_string()));
        assert_eq!(pairs[2], ("status", "all".to_string()));
    }

    #[test]
    fn test_list_response_body() {
        let body = ListResponse::new("claims", vec![json!({"id": "1"})]).into_json();
        assert_eq!(body["claims"][0]["id"], "1");
        assert_eq!(body["total"], 1);
    }
}
