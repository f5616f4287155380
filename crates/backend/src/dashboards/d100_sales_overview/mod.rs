pub mod dataset;
pub mod service;
