//! Core module containing the list primitives shared by the view-model and the proxy

pub mod error;
pub mod field;
pub mod listing;
pub mod payload;
pub mod query;
pub mod record;
pub mod resource;

pub use error::{ConfigError, DashboardError, FetchError, RequestError};
pub use field::{FieldValue, ToFieldValue};
pub use listing::Arrangement;
pub use payload::normalize_collection;
pub use query::{ListQuery, ListQueryParams, ListResponse, STATUS_ALL, SortDirection, StatusFilter};
pub use record::Record;
pub use resource::{ResourceCatalog, ResourceDescriptor};
