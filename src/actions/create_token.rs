use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use super::Action;
use crate::abi::factory_abi;
use crate::error::{FlaunchError, FlaunchResult};
use crate::networks::resolve_factory_address;
use crate::wallet::{ContractCall, WalletProvider};

pub const FLAUNCH_CREATE_TOKEN_PROMPT: &str = "\
This tool will create a Base FLAUNCH ERC20 memecoin using the WoW factory. \
This tool takes the token name and token symbol. It uses a bonding curve so \
there is no need to add liquidity to the pool upfront. It is only supported \
on Base Sepolia and (soon) Base Mainnet.";

/// Metadata URI recorded for every token minted through this action.
pub const GENERIC_TOKEN_METADATA_URI: &str =
    "ipfs://QmfXzbWQY1wBzq3k9mCthN9prVAYpJGfZ4ekcxMiAq5Xhg";

const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Input argument schema for the create token action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaunchCreateTokenInput {
    /// The name of the token to create, e.g. FlaunchCoin
    pub name: String,
    /// The symbol of the token to create, e.g. FLAUNCH
    pub symbol: String,
    /// The description of the token to create
    pub description: String,
}

impl FlaunchCreateTokenInput {
    /// Validating constructor: name and symbol must be non-empty. The
    /// description is passed through as-is.
    pub fn new<N, S, D>(name: N, symbol: S, description: D) -> FlaunchResult<Self>
    where
        N: Into<String>,
        S: Into<String>,
        D: Into<String>,
    {
        let input = Self {
            name: name.into(),
            symbol: symbol.into(),
            description: description.into(),
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> FlaunchResult<()> {
        if self.name.trim().is_empty() {
            return Err(FlaunchError::invalid_input("Token name must not be empty"));
        }
        if self.symbol.trim().is_empty() {
            return Err(FlaunchError::invalid_input(
                "Token symbol must not be empty",
            ));
        }
        Ok(())
    }
}

/// Create a Flaunch memecoin through the factory on the wallet's current
/// network.
///
/// Address resolution failures (unknown network, factory not yet deployed)
/// propagate as errors since they are configuration faults. Failures raised
/// by the wallet during invocation or confirmation are rendered into the
/// returned string instead, so the agent loop always gets text back once
/// the call has been attempted.
pub async fn create_token(
    wallet: &dyn WalletProvider,
    request: &FlaunchCreateTokenInput,
) -> FlaunchResult<String> {
    let network = wallet.network_id().to_string();
    let factory_address = resolve_factory_address(&network)?;

    debug!(
        "Deploying Flaunch memecoin '{}' ({}) via factory {} on {}",
        request.name, request.symbol, factory_address, network
    );

    let mut args = Map::new();
    args.insert("_tokenCreator".into(), json!(wallet.default_address()));
    args.insert("_platformReferrer".into(), json!(ZERO_ADDRESS));
    args.insert("_tokenURI".into(), json!(GENERIC_TOKEN_METADATA_URI));
    args.insert("_name".into(), json!(request.name));
    args.insert("_symbol".into(), json!(request.symbol));
    args.insert("_description".into(), json!(request.description));

    let call = ContractCall {
        contract_address: factory_address.to_string(),
        method: "deploy".to_string(),
        abi: factory_abi(),
        args,
    };

    let outcome = match wallet.invoke_contract(call).await {
        Ok(invocation) => invocation.wait().await,
        Err(e) => Err(e),
    };

    let receipt = match outcome {
        Ok(receipt) => receipt,
        Err(e) => return Ok(format!("Error creating Flaunch memecoin {}", e)),
    };

    info!(
        "Flaunch memecoin '{}' created, tx {}",
        request.name, receipt.transaction_hash
    );

    Ok(format!(
        "Created Flaunch memecoin {} with symbol {} on network {}.\n\
         Transaction hash for the token creation: {}\n\
         Transaction link for the token creation: {}",
        request.name,
        request.symbol,
        network,
        receipt.transaction_hash,
        receipt.transaction_link
    ))
}

/// Flaunch create token action.
pub struct FlaunchCreateTokenAction;

impl FlaunchCreateTokenAction {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FlaunchCreateTokenAction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for FlaunchCreateTokenAction {
    async fn execute(&self, wallet: &dyn WalletProvider, input: Value) -> FlaunchResult<String> {
        let request: FlaunchCreateTokenInput = serde_json::from_value(input)?;
        request.validate()?;
        create_token(wallet, &request).await
    }

    fn name(&self) -> &str {
        "flaunch_create_token"
    }

    fn description(&self) -> &str {
        FLAUNCH_CREATE_TOKEN_PROMPT
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The name of the token to create, e.g. FlaunchCoin"
                },
                "symbol": {
                    "type": "string",
                    "description": "The symbol of the token to create, e.g. FLAUNCH"
                },
                "description": {
                    "type": "string",
                    "description": "The description of the token to create, e.g. FlaunchCoin is a memecoin."
                }
            },
            "required": ["name", "symbol", "description"]
        })
    }
}
