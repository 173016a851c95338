//! epic-game core domain model
//!
//! This crate contains the deployment parameters that are shared between:
//! - The host orchestrator (deployment + mint sequencing)
//! - The fake-chain tests

pub mod roster;
pub mod types;

pub use roster::{bootstrap_plan, bootstrap_request};
pub use types::{BossSpec, ConfigurationError, DeploymentRequest, ItemSpec, MintPlan};
