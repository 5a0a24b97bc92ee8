// Copyright 2026, GemAI Labs
// For licensing, see https://github.com/gemai-labs/gemai-deployer/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use alloy::primitives::U256;
use gemai_tools::{
    core::{artifact::ContractArtifact, deployment::DeploymentConfig},
    ops,
    utils::color::Color,
};

use crate::{
    common_args::{AuthArgs, ProviderArgs},
    constants::{DEFAULT_ARTIFACT_PATH, GEMAI_TOKEN_ADDRESS, SUBSCRIPTION_SERVICE_CONTRACT},
    error::GemaiDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
    /// Path to the compiled subscription service artifact.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_ARTIFACT_PATH)]
    artifact: PathBuf,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> GemaiDeployResult {
    let signer = args.auth.build_signer()?;
    let artifact = ContractArtifact::load(&args.artifact)?;
    if artifact.contract_name != SUBSCRIPTION_SERVICE_CONTRACT {
        log::warn!(
            "{}",
            format!(
                "artifact names {}, expected {SUBSCRIPTION_SERVICE_CONTRACT}",
                artifact.contract_name
            )
            .yellow()
        );
    }

    let provider = args.provider.build_provider_with_wallet(signer).await?;
    let config = DeploymentConfig {
        constructor_args: vec![GEMAI_TOKEN_ADDRESS.to_string()],
        constructor_value: U256::ZERO,
        max_fee_per_gas_wei: args.auth.get_max_fee_per_gas_wei()?,
        estimate_gas: args.estimate_gas,
    };
    ops::deploy(&artifact, &config, &provider).await?;
    Ok(())
}
