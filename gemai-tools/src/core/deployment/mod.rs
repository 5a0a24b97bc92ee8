// Copyright 2026, GemAI Labs
// For licensing, see https://github.com/gemai-labs/gemai-deployer/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use crate::{core::artifact::ContractArtifact, utils::color::DebugColor};

pub mod calldata;

/// Settings for a single deployment transaction.
#[derive(Debug, Default)]
pub struct DeploymentConfig {
    pub constructor_args: Vec<String>,
    pub constructor_value: U256,
    pub max_fee_per_gas_wei: Option<u128>,
    pub estimate_gas: bool,
}

#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(
        sender: Address,
        initcode: Vec<u8>,
        tx_value: U256,
        max_fee_per_gas_wei: Option<u128>,
    ) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_value(tx_value)
                .with_deploy_code(initcode),
            max_fee_per_gas_wei,
        }
    }

    /// Builds the deployment request for an artifact: creation bytecode with
    /// the ABI-encoded constructor arguments appended.
    pub fn from_artifact(
        artifact: &ContractArtifact,
        config: &DeploymentConfig,
        sender: Address,
    ) -> Result<Self, DeploymentError> {
        let initcode = calldata::encode_constructor_calldata(
            artifact.bytecode(),
            artifact.constructor(),
            &config.constructor_args,
            config.constructor_value,
        )?;
        Ok(Self::new(
            sender,
            initcode,
            config.constructor_value,
            config.max_fee_per_gas_wei,
        ))
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    pub async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }

    /// Submits the deployment transaction and awaits its receipt. The
    /// transaction is sent at most once; a receipt with failed status is an
    /// error.
    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let max_fee_per_gas = self.fee_per_gas(provider).await?;

        let mut tx = self.tx;
        tx.gas = Some(gas);
        tx.max_fee_per_gas = Some(max_fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let tx = provider.send_transaction(tx).await?;
        let tx_hash = *tx.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = tx
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }

        Ok(receipt)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing address: {0}")]
    NoContractAddress(String),
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
}

/// Deploys the contract artifact, returning the confirmed contract address.
pub async fn deploy(
    artifact: &ContractArtifact,
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<Address, DeploymentError> {
    let from_address = provider.default_signer_address();
    debug!(@grey, "sender address: {}", from_address.debug_lavender());

    let req = DeploymentRequest::from_artifact(artifact, config, from_address)?;
    let receipt = req.exec(provider).await?;

    let contract_address = receipt
        .contract_address
        .ok_or(DeploymentError::NoContractAddress(
            "in receipt".to_string(),
        ))?;
    debug!(@grey, "gas used: {}", receipt.gas_used);
    info!(@grey, "deployment tx hash: {}", receipt.transaction_hash.debug_lavender());

    Ok(contract_address)
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, U64},
        providers::ProviderBuilder,
        transports::mock::Asserter,
    };

    use super::*;

    fn request(max_fee_per_gas_wei: Option<u128>) -> DeploymentRequest {
        DeploymentRequest::new(
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            vec![0x60, 0x0a, 0x60, 0x0c],
            U256::ZERO,
            max_fee_per_gas_wei,
        )
    }

    #[tokio::test]
    async fn estimates_gas_via_rpc() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
        asserter.push_success(&U64::from(148_201u64));

        let gas = request(None).estimate_gas(&provider).await.unwrap();
        assert_eq!(gas, 148_201);
    }

    #[tokio::test]
    async fn explicit_max_fee_skips_gas_price_query() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());

        // nothing pushed: any RPC call would fail
        let fee = request(Some(42)).fee_per_gas(&provider).await.unwrap();
        assert_eq!(fee, 42);
    }

    #[tokio::test]
    async fn failed_estimation_aborts_without_retry() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
        asserter.push_failure_msg("execution reverted");

        let err = request(None).exec(&provider).await.unwrap_err();
        assert!(matches!(err, DeploymentError::Rpc(_)));

        // exec consumed the single pushed response; a retry would have hit an
        // empty response queue instead
        let err = request(None).estimate_gas(&provider).await.unwrap_err();
        assert!(matches!(err, DeploymentError::Rpc(_)));
    }
}
