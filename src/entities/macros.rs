//! Macros for reducing boilerplate when defining record types
//!
//! Every table in the dashboard needs the same two things from its record
//! type: serde support for the orchestrator's JSON and a [`Record`] impl
//! mapping the column names the tables sort and filter on to struct fields.
//!
//! [`Record`]: crate::core::record::Record

/// Define a record struct and implement [`Record`](crate::core::record::Record) for it
///
/// Each field lists the names it answers to in `field_value`. Tables have
/// historically sent both snake_case and camelCase sort keys, so a field can
/// list several.
///
/// # Example
///
/// ```rust,ignore
/// impl_record!(
///     /// A prior authorization request
///     PriorAuth,
///     {
///         id: i64 => ["id"],
///         status: Option<String> => ["status"],
///         created_at: String => ["created_at", "createdAt"],
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $(#[$meta:meta])*
        $type:ident,
        {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $field_type:ty => [ $( $key:literal ),+ $(,)? ]
            ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $(#[$meta])*
        pub struct $type {
            $(
                $(#[$field_meta])*
                pub $field : $field_type
            ),*
        }

        impl $crate::core::record::Record for $type {
            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    $(
                        $( $key )|+ => Some($crate::core::field::ToFieldValue::to_field_value(&self.$field)),
                    )*
                    _ => None,
                }
            }
        }

        impl $type {
            /// Field names accepted by `field_value`
            pub fn field_names() -> &'static [&'static str] {
                &[ $( $( $key ),+ ),* ]
            }
        }
    };
}
