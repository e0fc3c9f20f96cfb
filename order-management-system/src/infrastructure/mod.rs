pub mod config;
pub mod database;
mod repository;
pub mod service_provider;
pub mod session;
pub mod telemetry;

#[rustfmt::skip]
pub use {
    service_provider::ServiceProvider,
};
