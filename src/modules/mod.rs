//! Feature modules. Each follows the same structure:
//!
//! - `model.rs`: entities, DTOs, and their input contracts
//! - `service.rs`: business logic against the database
//! - `controller.rs`: HTTP handlers
//! - `router.rs`: route wiring

pub mod products;
pub mod users;
