// NHM health monitoring dashboard - page views over embedded sample records
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
