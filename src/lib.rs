pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod service;

pub use service::Service;
