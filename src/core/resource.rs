//! Resource descriptors and the catalog of orchestrator collections

use super::listing::Arrangement;
use super::query::ListQuery;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Describes one backend collection endpoint
///
/// # Example
///
/// ```rust,ignore
/// let claims = ResourceDescriptor::new("claims", "/claims", "claims")
///     .with_default_sort("dateSubmitted")
///     .with_date_fields(["dateSubmitted"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Name used in dashboard routes (`/api/{name}`)
    pub name: String,

    /// Path on the orchestrator (e.g. `/claims_scrubbing`)
    pub path: String,

    /// Key of the array in list response bodies (e.g. `scrubbedClaims`)
    pub collection_key: String,

    /// Human label used in messages ("prior auths")
    pub label: String,

    pub default_sort_field: String,

    pub status_field: String,

    #[serde(default)]
    pub date_fields: Vec<String>,
}

impl ResourceDescriptor {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        collection_key: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            label: name.replace('_', " "),
            name,
            path: path.into(),
            collection_key: collection_key.into(),
            default_sort_field: "created_at".to_string(),
            status_field: "status".to_string(),
            date_fields: vec!["created_at".to_string(), "updated_at".to_string()],
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_default_sort(mut self, field: impl Into<String>) -> Self {
        self.default_sort_field = field.into();
        self
    }

    pub fn with_status_field(mut self, field: impl Into<String>) -> Self {
        self.status_field = field.into();
        self
    }

    pub fn with_date_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Local arrangement for a resolved query on this resource
    pub fn arrangement(&self, query: &ListQuery) -> Arrangement {
        Arrangement::new(&query.sort_by, &self.status_field)
            .with_date_fields(self.date_fields.iter().cloned())
            .with_query(query)
    }
}

/// Registry of the resources the dashboard can list
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    resources: BTreeMap<String, ResourceDescriptor>,
}

impl ResourceCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven collections exposed by the RCM orchestrator
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        catalog.register(
            ResourceDescriptor::new("claims", "/claims", "claims")
                .with_default_sort("dateSubmitted")
                .with_date_fields(["dateSubmitted"]),
        );
        catalog.register(ResourceDescriptor::new(
            "clinical_documents",
            "/clinical_documents",
            "clinicalDocuments",
        ));
        catalog.register(ResourceDescriptor::new(
            "coded_encounters",
            "/coded_encounters",
            "codedEncounters",
        ));
        catalog.register(
            ResourceDescriptor::new("prior_auths", "/prior_auths", "priorAuths")
                .with_label("prior auths"),
        );
        catalog.register(ResourceDescriptor::new(
            "scrubbed_claims",
            "/claims_scrubbing",
            "scrubbedClaims",
        ));
        catalog.register(ResourceDescriptor::new("workflows", "/workflows", "workflows"));
        catalog.register(
            ResourceDescriptor::new("eligibility_checks", "/eligibility_checks", "eligibilityChecks")
                .with_status_field("eligible"),
        );

        catalog
    }

    /// Register a descriptor, replacing any existing one with the same name
    pub fn register(&mut self, descriptor: ResourceDescriptor) {
        self.resources.insert(descriptor.name.clone(), descriptor);
    }

    pub fn get(&self, name: &str) -> Option<&ResourceDescriptor> {
        self.resources.get(name)
    }

    /// Registered resource names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.resources.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
