pub mod capture;
pub mod config;
pub mod consts;
pub mod crop;
pub mod detection;
pub mod error;
pub mod geometry;
pub mod session;
pub mod subject;
