//! Repository modules for database access
//!
//! This module contains repository traits and implementations for the
//! entities of the booking system.

pub mod time_slot;
pub mod time_slot_factory;
pub mod time_slot_sql;
pub mod user;
pub mod user_factory;
pub mod user_sql;

// Re-export the repositories and factories for ease of use
pub use time_slot::{
    NewSlotDefinition, SlotDefinition, SlotStatus, TimeSlot, TimeSlotRepository,
};
pub use time_slot_factory::TimeSlotRepositoryFactory;
pub use time_slot_sql::SqlTimeSlotRepository;
pub use user::{NewUser, UserRecord, UserRepository};
pub use user_factory::UserRepositoryFactory;
pub use user_sql::SqlUserRepository;
