//! Local filtering and sorting of fetched records
//!
//! The orchestrator is asked to filter and sort, but the dashboard does not
//! rely on it: every fetched page is re-arranged here before it is exposed.
//! Applying an arrangement to data the backend already arranged is a no-op.

use super::field::compare_values;
use super::query::{ListQuery, SortDirection, StatusFilter};
use super::record::Record;
use std::cmp::Ordering;

/// Filter and sort parameters for one pass over a record list
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    pub sort_field: String,
    pub direction: SortDirection,
    pub status_field: String,
    pub status_filter: StatusFilter,
    /// Fields compared as timestamps when the values are not both strings or numbers
    pub date_fields: Vec<String>,
}

impl Arrangement {
    pub fn new(sort_field: impl Into<String>, status_field: impl Into<String>) -> Self {
        Self {
            sort_field: sort_field.into(),
            direction: SortDirection::default(),
            status_field: status_field.into(),
            status_filter: StatusFilter::All,
            date_fields: Vec::new(),
        }
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_status_filter(mut self, filter: StatusFilter) -> Self {
        self.status_filter = filter;
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

    /// Take sort field, direction and status filter from a resolved query
    pub fn with_query(mut self, query: &ListQuery) -> Self {
        self.sort_field = query.sort_by.clone();
        self.direction = query.sort_dir;
        self.status_filter = query.status.clone();
        self
    }

    fn sort_field_is_date_like(&self) -> bool {
        self.date_fields.iter().any(|f| f == &self.sort_field)
    }

    /// Keep records whose status equals the filter; order is preserved
    pub fn filter<T: Record>(&self, items: Vec<T>) -> Vec<T> {
        if self.status_filter == StatusFilter::All {
            return items;
        }
        items
            .into_iter()
            .filter(|item| {
                self.status_filter
                    .matches(item.status_value(&self.status_field).as_deref())
            })
            .collect()
    }

    /// Compare two records on the sort field
    pub fn compare<T: Record>(&self, a: &T, b: &T) -> Ordering {
        compare_values(
            a.field_value(&self.sort_field).as_ref(),
            b.field_value(&self.sort_field).as_ref(),
            self.direction,
            self.sort_field_is_date_like(),
        )
    }

    /// Stable sort in place
    ///
    /// The comparator is not a total order (incomparable pairs are `Equal`),
    /// which `slice::sort_by` may panic on.
    pub fn sort<T: Record>(&self, items: &mut Vec<T>) {
        let date_like = self.sort_field_is_date_like();
        let keys: Vec<_> = items
            .iter()
            .map(|item| item.field_value(&self.sort_field))
            .collect();
        let order = stable_order(keys.len(), |a, b| {
            compare_values(keys[a].as_ref(), keys[b].as_ref(), self.direction, date_like)
        });

        let mut slots: Vec<Option<T>> = std::mem::take(items).into_iter().map(Some).collect();
        items.extend(order.into_iter().filter_map(|index| slots[index].take()));
    }

    /// Filter, then sort
    pub fn apply<T: Record>(&self, items: Vec<T>) -> Vec<T> {
        let mut items = self.filter(items);
        self.sort(&mut items);
        items
    }
}

/// Bottom-up merge sort over indices
///
/// The left element wins unless the right one is strictly less, which keeps
/// equal (and incomparable) elements in their original relative order.
fn stable_order(len: usize, cmp: impl Fn(usize, usize) -> Ordering) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    let mut buffer = order.clone();
    let mut width = 1;

    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right, mut out) = (start, mid, start);

            while left < mid && right < end {
                if cmp(order[right], order[left]) == Ordering::Less {
                    buffer[out] = order[right];
                    right += 1;
                } else {
                    buffer[out] = order[left];
                    left += 1;
                }
                out += 1;
            }
            buffer[out..out + (mid - left)].copy_from_slice(&order[left..mid]);
            out += mid - left;
            buffer[out..out + (end - right)].copy_from_slice(&order[right..end]);

            start += 2 * width;
        }
        std::mem::swap(&mut order, &mut buffer);
        width *= 2;
    }

    order
}
