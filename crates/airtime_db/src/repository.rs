//! Repository factory trait
//!
//! This module defines the factory trait repositories are created through,
//! keeping callers agnostic of the concrete repository implementation.

/// A trait for database repository factories
///
/// This trait defines a factory for creating repository instances.
/// It is generic over the repository type and the configuration type.
pub trait RepositoryFactory<R, C> {
    /// Create a new repository instance from the given configuration.
    fn create_repository(&self, config: C) -> R;
}
