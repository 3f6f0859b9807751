//! Domain layer for dirlint
//!
//! CDD Principle: Domain Model - Pure business logic for directory-naming enforcement
//! - Contains the core entities and value objects: rules, violations, run reports
//! - Independent of infrastructure concerns like the filesystem or terminal output
//! - Expresses the ubiquitous language of naming conventions and pipeline gating

pub mod violations;

// Re-export main domain types for convenience
pub use violations::*;
