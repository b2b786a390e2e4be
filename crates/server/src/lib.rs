pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod routes;
