pub mod abstract_trait;
pub mod config;
pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod utils;
