//! Domain layer - Entities and value objects of the club domain.

pub mod club;
pub mod foundation;
