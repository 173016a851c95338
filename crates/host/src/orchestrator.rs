//! Bootstrap run driver
//!
//! Assemble parameters, deploy, then mint in plan order. The whole run is
//! one serialized sequence; every error anywhere propagates here untouched.

use tracing::info;

use epicgame_core::{bootstrap_plan, bootstrap_request, DeploymentRequest, MintPlan};

use crate::chain::ChainClient;
use crate::deployer;
use crate::error::BootstrapError;
use crate::minter;

/// Progress of a bootstrap run. Advances strictly left to right;
/// `Minting(k)` covers mint k (1-based) from submission through
/// confirmation. Any error drops the run into `Failed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Deploying,
    Minting(usize),
    Done,
    Failed,
}

/// Structured success outcome of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapReport {
    pub contract_address: String,
    pub minted: u32,
}

/// Assemble the compiled-in bootstrap parameters. Fails before any network
/// traffic if the roster or the mint plan is malformed.
pub fn assemble_bootstrap() -> Result<(DeploymentRequest, MintPlan), BootstrapError> {
    let request = bootstrap_request()?;
    let plan = bootstrap_plan(&request)?;
    Ok((request, plan))
}

/// Drives one deployment-and-mint run against a chain client.
pub struct Orchestrator<C> {
    client: C,
    state: RunState,
}

impl<C: ChainClient> Orchestrator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run the full sequence: deploy, confirm, then mint each plan entry
    /// with its own confirmation. Terminal state is `Done` or `Failed`.
    pub async fn run(
        &mut self,
        creation_bytecode: &[u8],
        request: &DeploymentRequest,
        plan: &MintPlan,
    ) -> Result<BootstrapReport, BootstrapError> {
        let result = self.drive(creation_bytecode, request, plan).await;
        self.state = match &result {
            Ok(_) => RunState::Done,
            Err(_) => RunState::Failed,
        };
        result
    }

    async fn drive(
        &mut self,
        creation_bytecode: &[u8],
        request: &DeploymentRequest,
        plan: &MintPlan,
    ) -> Result<BootstrapReport, BootstrapError> {
        info!(
            "Deploying with {} item types, {} bootstrap mints",
            request.item_count(),
            plan.len()
        );

        self.state = RunState::Deploying;
        let handle = deployer::deploy(&self.client, creation_bytecode, request).await?;

        for (position, &item_index) in plan.indices().iter().enumerate() {
            let ordinal = position + 1;
            self.state = RunState::Minting(ordinal);
            minter::mint_item(&self.client, &handle, ordinal, item_index).await?;
        }

        Ok(BootstrapReport {
            contract_address: handle.address().to_string(),
            minted: plan.len() as u32,
        })
    }
}
