//! # flaunch-agentkit — Flaunch memecoin actions for AI agents
//!
//! This crate lets an AI-agent framework mint Flaunch ERC20 memecoins
//! through the pre-deployed factory contract on Base. It is deliberately
//! thin glue: resolve the factory address for the wallet's network, shape
//! the constructor arguments, hand the call to a wallet abstraction and
//! report the transaction back as text the agent loop can read.
//!
//! ## Features
//!
//! - **Agent-Ready Actions**: named, described, schema-validated callables
//! - **Wallet Agnostic**: bring any wallet SDK via the `WalletProvider` trait
//! - **Fail-Fast Networks**: unknown or not-yet-deployed networks error
//!   before any chain call is attempted
//! - **String-Only Boundary**: chain failures come back as readable text,
//!   never as exceptions the agent loop cannot handle
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flaunch_agentkit::{ActionRegistry, WalletProvider};
//! use serde_json::json;
//!
//! async fn run(wallet: &dyn WalletProvider) -> flaunch_agentkit::FlaunchResult<()> {
//!     let registry = ActionRegistry::new();
//!     let report = registry
//!         .execute_action(
//!             "flaunch_create_token",
//!             wallet,
//!             json!({
//!                 "name": "FlaunchCoin",
//!                 "symbol": "FLAUNCH",
//!                 "description": "FlaunchCoin is a memecoin.",
//!             }),
//!         )
//!         .await?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

pub mod abi;
pub mod actions;
pub mod error;
pub mod networks;
pub mod wallet;

// Re-export commonly used types
pub use abi::{FLAUNCH_FACTORY_ABI_JSON, factory_abi};
pub use actions::{
    Action, ActionRegistry, FLAUNCH_CREATE_TOKEN_PROMPT, FlaunchCreateTokenAction,
    FlaunchCreateTokenInput, create_token,
};
pub use error::{FlaunchError, FlaunchResult};
pub use networks::{FactoryDeployment, resolve_factory_address, valid_networks};
pub use wallet::{ContractCall, Invocation, TransactionReceipt, WalletProvider};

/// The current version of flaunch-agentkit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
