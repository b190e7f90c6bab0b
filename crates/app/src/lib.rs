//! Till App
//!
//! The backend-facing half of the register: the HTTP API client, the cached
//! product catalog, and checkout orchestration over the pure `till` cart
//! engine. All business logic of consequence lives behind the remote API;
//! this crate only calls it and keeps the session's state consistent with
//! the outcomes.

pub mod api;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod context;
pub mod notify;
pub mod orders;
pub mod products;
pub mod records;
