// Copyright 2026, GemAI Labs
// For licensing, see https://github.com/gemai-labs/gemai-deployer/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use alloy::providers::{Provider, WalletProvider};

use crate::{
    core::{
        artifact::ContractArtifact,
        deployment::{self, DeploymentConfig, DeploymentRequest},
    },
    utils::color::DebugColor,
    Result,
};

/// Deploys the subscription service contract, reporting the deployed address.
pub async fn deploy(
    artifact: &ContractArtifact,
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<()> {
    let from_address = provider.default_signer_address();
    greyln!("deploying with account: {}", from_address.debug_lavender());

    if config.estimate_gas {
        let req = DeploymentRequest::from_artifact(artifact, config, from_address)?;
        let gas = req.estimate_gas(provider).await?;
        let gas_price = req.fee_per_gas(provider).await?;
        print_gas_estimate(gas, gas_price);
        return Ok(());
    }

    let address = deployment::deploy(artifact, config, provider).await?;
    greyln!(
        "deployed {} at address: {}",
        artifact.contract_name,
        address.debug_lavender()
    );
    Ok(())
}

fn print_gas_estimate(gas: u64, gas_price: u128) {
    greyln!("deployment tx gas: {gas}");
    greyln!("gas price: {} gwei", gas_price as f64 / 1e9);
    greyln!(
        "total cost: {:.6} ETH",
        gas as f64 * gas_price as f64 / 1e18
    );
}
