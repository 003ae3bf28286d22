//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (LevelCompletion, SubjectProgress)
//! - Domain value objects (LevelResult)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
