// Copyright 2026, GemAI Labs
// For licensing, see https://github.com/gemai-labs/gemai-deployer/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! The contracts build emits one JSON file per contract containing its name,
//! ABI and creation bytecode. Deployment only needs those three fields; any
//! other compiler output in the file is ignored.

use std::{fs, path::Path};

use alloy::{
    json_abi::{Constructor, JsonAbi},
    primitives::Bytes,
};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact at {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed artifact json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid bytecode hex in artifact: {0}")]
    InvalidBytecode(hex::FromHexError),
    #[error("artifact contains no deployable bytecode")]
    EmptyBytecode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: String,
    abi: JsonAbi,
    bytecode: String,
}

/// Compiled output for a single contract.
#[derive(Debug)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    bytecode: Bytes,
}

impl ContractArtifact {
    /// Loads an artifact from the compiled JSON output at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(json)?;
        let bytecode = decode_bytecode(&raw.bytecode)?;
        if bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode);
        }
        Ok(Self {
            contract_name: raw.contract_name,
            abi: raw.abi,
            bytecode: bytecode.into(),
        })
    }

    /// Constructor entry of the contract ABI, if the contract declares one.
    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }

    /// Creation bytecode from the compiler output.
    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }
}

fn decode_bytecode(text: &str) -> Result<Vec<u8>, ArtifactError> {
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text).map_err(ArtifactError::InvalidBytecode)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const ARTIFACT_JSON: &str = r#"{
        "contractName": "GemAiSubscriptionService",
        "sourceName": "contracts/GemAiSubscriptionService.sol",
        "abi": [
            {
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [
                    { "name": "gemaiToken", "type": "address", "internalType": "address" }
                ]
            }
        ],
        "bytecode": "0x600a600c600039600a6000f3602a60005260206000f3",
        "linkReferences": {}
    }"#;

    #[test]
    fn parses_compiled_output() {
        let artifact = ContractArtifact::from_json(ARTIFACT_JSON).unwrap();
        assert_eq!(artifact.contract_name, "GemAiSubscriptionService");
        assert_eq!(artifact.bytecode().len(), 22);
        let constructor = artifact.constructor().unwrap();
        assert_eq!(constructor.inputs.len(), 1);
        assert_eq!(constructor.inputs[0].ty, "address");
    }

    #[test]
    fn rejects_invalid_bytecode_hex() {
        let json = ARTIFACT_JSON.replace("600a600c", "600a60zz");
        let err = ContractArtifact::from_json(&json).unwrap_err();
        assert!(matches!(err, ArtifactError::InvalidBytecode(_)));
    }

    #[test]
    fn rejects_empty_bytecode() {
        let json = ARTIFACT_JSON.replace("0x600a600c600039600a6000f3602a60005260206000f3", "0x");
        let err = ContractArtifact::from_json(&json).unwrap_err();
        assert!(matches!(err, ArtifactError::EmptyBytecode));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ContractArtifact::load("no/such/artifact.json").unwrap_err();
        assert!(matches!(err, ArtifactError::Read { .. }));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ARTIFACT_JSON.as_bytes()).unwrap();
        let artifact = ContractArtifact::load(file.path()).unwrap();
        assert_eq!(artifact.contract_name, "GemAiSubscriptionService");
    }
}
