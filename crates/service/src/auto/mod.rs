//! Auto module: domain inputs, repository abstraction, service.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AutoService;
