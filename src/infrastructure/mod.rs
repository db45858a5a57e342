//! Infrastructure layer: transport, gateway implementation, and services

pub mod analysis;
pub mod http;
pub mod llm;
pub mod logging;
pub mod tutoring;
