// Copyright 2026, GemAI Labs
// For licensing, see https://github.com/gemai-labs/gemai-deployer/blob/main/licenses/COPYRIGHT.md

/// The default endpoint for connections to an Ethereum node.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

/// Name of the subscription service contract within the compiled artifact.
pub const SUBSCRIPTION_SERVICE_CONTRACT: &str = "GemAiSubscriptionService";

/// Compiled artifact committed by the contracts build.
pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/GemAiSubscriptionService.json";

/// GEMAI token contract wired into the subscription service constructor.
pub const GEMAI_TOKEN_ADDRESS: &str = "0xFBE44caE91d7Df8382208fCdc1fE80E40FBc7e9a";
