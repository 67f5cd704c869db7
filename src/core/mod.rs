//! Classification rules, configuration and the run pipeline

pub mod config;
pub mod error;
pub mod pipeline;
pub mod validator;
