//! Macros for reducing boilerplate when defining entities
//!
//! Every aggregate needs the same small `Entity` implementation; these
//! macros generate it from the resource names and the identifier field.

/// Implement [`Entity`](crate::core::entity::Entity) for a struct.
///
/// The identifier accessor returns the named `Uuid` field. Adding
/// `timestamped` also implements
/// [`Timestamped`](crate::core::entity::Timestamped) over a `created_at`
/// field.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Favorite {
///     pub favorite_id: Uuid,
///     pub created_at: DateTime<Utc>,
/// }
///
/// impl_entity!(Favorite, "favorite", "favorites", favorite_id, timestamped);
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $singular:expr, $plural:expr, $id_field:ident) => {
        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> ::uuid::Uuid {
                self.$id_field
            }
        }
    };

    ($type:ident, $singular:expr, $plural:expr, $id_field:ident, timestamped) => {
        $crate::impl_entity!($type, $singular, $plural, $id_field);

        impl $crate::core::entity::Timestamped for $type {
            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }
        }
    };
}
