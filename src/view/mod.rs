//! Generic list view-model
//!
//! One [`ListViewModel`] backs one dashboard table. It owns the table's
//! [`ViewState`]: the fetched records, loading/error flags and the sort and
//! status-filter parameters. Every parameter change triggers a refetch;
//! results are filtered and sorted locally before they are exposed.
//!
//! # Overlapping fetches
//!
//! Each refresh is tagged with a monotonically increasing ticket. A fetch
//! that resolves after a newer one was issued is discarded, so a slow early
//! response can never overwrite a fast later one. `loading` stays set until
//! the newest fetch resolves.
//!
//! # Errors
//!
//! A failed fetch sets `error` to a generic message and keeps the last
//! successfully fetched `items` on display.
//!
//! # Example
//!
//! ```rust,ignore
//! let claims: ListViewModel<Claim> =
//!     ListViewModel::for_resource(source, catalog.get("claims").unwrap().clone());
//! claims.refresh().await;
//! claims.set_sort_field("amount").await; // ascending
//! claims.set_sort_field("amount").await; // descending
//! let state = claims.snapshot();
//! ```

use crate::client::ResourceSource;
use crate::core::error::FetchError;
use crate::core::listing::Arrangement;
use crate::core::query::{ListQuery, SortDirection, StatusFilter};
use crate::core::record::Record;
use crate::core::resource::ResourceDescriptor;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Field names a view sorts and filters on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFields {
    pub sort_field: String,
    pub status_field: String,
}

impl ListFields {
    pub fn new(sort_field: impl Into<String>, status_field: impl Into<String>) -> Self {
        Self {
            sort_field: sort_field.into(),
            status_field: status_field.into(),
        }
    }
}

/// Render-ready state of one table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub status_filter: StatusFilter,
}

impl<T> ViewState<T> {
    fn mounted(sort_field: String) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            sort_field,
            sort_direction: SortDirection::Desc,
            status_filter: StatusFilter::All,
        }
    }

    fn query(&self) -> ListQuery {
        ListQuery {
            sort_by: self.sort_field.clone(),
            sort_dir: self.sort_direction,
            status: self.status_filter.clone(),
        }
    }
}

/// Handle for one issued fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    token: u64,
    query: ListQuery,
}

impl RefreshTicket {
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Parameters the fetch was issued with
    pub fn query(&self) -> &ListQuery {
        &self.query
    }
}

struct Shared<T> {
    state: ViewState<T>,
    latest_token: u64,
}

/// View-model for one resource table
pub struct ListViewModel<T> {
    source: Arc<dyn ResourceSource>,
    resource: ResourceDescriptor,
    status_field: String,
    shared: Arc<RwLock<Shared<T>>>,
}

impl<T> Clone for ListViewModel<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            resource: self.resource.clone(),
            status_field: self.status_field.clone(),
            shared: self.shared.clone(),
        }
    }
}

impl<T> ListViewModel<T>
where
    T: Record + DeserializeOwned,
{
    /// Bind a view to one resource and the fields it sorts and filters on
    ///
    /// A sort field absent from the records is accepted; it simply leaves the
    /// fetched order unchanged.
    pub fn configure(
        source: Arc<dyn ResourceSource>,
        resource: ResourceDescriptor,
        fields: ListFields,
    ) -> Self {
        Self {
            source,
            resource,
            status_field: fields.status_field,
            shared: Arc::new(RwLock::new(Shared {
                state: ViewState::mounted(fields.sort_field),
                latest_token: 0,
            })),
        }
    }

    /// Bind a view using the resource's default sort and status fields
    pub fn for_resource(source: Arc<dyn ResourceSource>, resource: ResourceDescriptor) -> Self {
        let fields = ListFields::new(&resource.default_sort_field, &resource.status_field);
        Self::configure(source, resource, fields)
    }

    pub fn resource(&self) -> &ResourceDescriptor {
        &self.resource
    }

    fn read(&self) -> RwLockReadGuard<'_, Shared<T>> {
        self.shared.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shared<T>> {
        self.shared.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Owned copy of the current state for the rendering layer
    pub fn snapshot(&self) -> ViewState<T> {
        self.read().state.clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.read().state.items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().state.loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().state.error.clone()
    }

    /// Sort on `field`
    ///
    /// A new field starts ascending; the current field flips direction.
    pub async fn set_sort_field(&self, field: impl Into<String>) -> bool {
        let field = field.into();
        {
            let mut shared = self.write();
            let state = &mut shared.state;
            if state.sort_field == field {
                state.sort_direction = state.sort_direction.toggled();
            } else {
                state.sort_field = field;
                state.sort_direction = SortDirection::Asc;
            }
        }
        self.refresh().await
    }

    pub async fn toggle_sort_direction(&self) -> bool {
        {
            let mut shared = self.write();
            shared.state.sort_direction = shared.state.sort_direction.toggled();
        }
        self.refresh().await
    }

    /// Filter on an exact status value, or `"all"` to disable filtering
    pub async fn set_status_filter(&self, value: impl AsRef<str>) -> bool {
        {
            let mut shared = self.write();
            shared.state.status_filter = StatusFilter::parse(value.as_ref());
        }
        self.refresh().await
    }

    /// Fetch with the current parameters
    ///
    /// Returns `false` when the result was superseded by a newer refresh.
    pub async fn refresh(&self) -> bool {
        let ticket = self.begin_refresh();
        let result = self.source.fetch(&self.resource, ticket.query()).await;
        self.complete_refresh(ticket, result)
    }

    /// Mark the view as loading and issue a new ticket
    pub fn begin_refresh(&self) -> RefreshTicket {
        let mut shared = self.write();
        shared.latest_token += 1;
        shared.state.loading = true;
        shared.state.error = None;

        RefreshTicket {
            token: shared.latest_token,
            query: shared.state.query(),
        }
    }

    /// Apply the outcome of a fetch
    ///
    /// Returns `false` and changes nothing if `ticket` is not the latest.
    pub fn complete_refresh(
        &self,
        ticket: RefreshTicket,
        result: Result<Vec<Value>, FetchError>,
    ) -> bool {
        // Decode and arrange before taking the lock.
        let outcome = result.and_then(|raw| self.arrange(raw, ticket.query()));

        let mut shared = self.write();
        if ticket.token != shared.latest_token {
            tracing::debug!(
                resource = %self.resource.name,
                token = ticket.token,
                latest = shared.latest_token,
                "discarding superseded fetch result"
            );
            return false;
        }

        shared.state.loading = false;
        match outcome {
            Ok(items) => {
                tracing::debug!(resource = %self.resource.name, count = items.len(), "view refreshed");
                shared.state.items = items;
                shared.state.error = None;
            }
            Err(cause) => {
                tracing::warn!(resource = %self.resource.name, error = %cause, "view refresh failed");
                shared.state.error = Some(format!("Failed to fetch {}", self.resource.label));
            }
        }
        true
    }

    fn arrange(&self, raw: Vec<Value>, query: &ListQuery) -> Result<Vec<T>, FetchError> {
        let items = raw
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;

        let arrangement = Arrangement {
            status_field: self.status_field.clone(),
            ..self.resource.arrangement(query)
        };
        Ok(arrangement.apply(items))
    }
}
