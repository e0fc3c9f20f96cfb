//! Domain model of field-service orders: entities, reference projections,
//! repository and service contracts.

pub mod command;
pub mod exception;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod repository;
pub mod service;
