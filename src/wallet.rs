// Seam to the external wallet SDK. The crate never signs or broadcasts
// anything itself; it hands a ContractCall to whatever implements
// WalletProvider and waits on the resulting invocation.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FlaunchResult;

/// Confirmed transaction metadata returned by the wallet collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub transaction_link: String,
}

/// A single contract-method invocation request: target address, method
/// name, the contract ABI and a named-argument map.
#[derive(Debug, Clone)]
pub struct ContractCall {
    pub contract_address: String,
    pub method: String,
    pub abi: &'static Value,
    pub args: Map<String, Value>,
}

/// A pending invocation that can be awaited for confirmation.
///
/// No timeout is imposed here; any timeout or cancellation policy belongs
/// to the wallet implementation.
#[async_trait]
pub trait Invocation: Send {
    async fn wait(self: Box<Self>) -> FlaunchResult<TransactionReceipt>;
}

/// Transaction executor backed by an external wallet SDK.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Identifier of the network the wallet is currently connected to.
    fn network_id(&self) -> &str;

    /// The wallet's own default address, used as the token creator.
    fn default_address(&self) -> &str;

    async fn invoke_contract(&self, call: ContractCall) -> FlaunchResult<Box<dyn Invocation>>;
}
