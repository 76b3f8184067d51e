pub mod credentials;
pub mod error;
pub mod model;
pub mod reconcile;
pub mod repo;
pub mod service;
pub mod token;
pub mod validation;
