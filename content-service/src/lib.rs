//! content-service: read-only API over the `book`, `lore` and `post`
//! collections.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
