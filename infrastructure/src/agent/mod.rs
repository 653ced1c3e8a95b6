//! Composition of the citizen-service agent from configuration.

mod factory;

pub use factory::CitizenAgentFactory;
