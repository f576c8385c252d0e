//! Core module containing fundamental traits and types for the ordering core

pub mod entity;
pub mod error;
pub mod events;
pub mod outcome;
pub mod repository;

pub use entity::{Entity, Timestamped, newest_first};
pub use error::{EntityError, ErrorKind, InputError, RuleError, StorageError, TeahouseError};
pub use events::{EventBus, EventEnvelope, NotificationEvent};
pub use outcome::Outcome;
pub use repository::{Predicate, Repository, WriteGuard};
