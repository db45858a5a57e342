//! Upstream completion provider integration

mod gateway;
mod stream;

pub use gateway::OpenAiGateway;
