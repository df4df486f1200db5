use async_trait::async_trait;
use serde_json::Value;

use crate::error::{FlaunchError, FlaunchResult};
use crate::wallet::WalletProvider;

pub mod create_token;

pub use create_token::{
    FLAUNCH_CREATE_TOKEN_PROMPT, FlaunchCreateTokenAction, FlaunchCreateTokenInput, create_token,
};

/// A named, schema-described callable exposed to a host agent framework.
///
/// Actions take structured JSON input and return a human-readable string;
/// the agent loop has no exception-handling protocol, so runtime failures
/// from the chain come back as strings, not errors.
#[async_trait]
pub trait Action: Send + Sync {
    async fn execute(&self, wallet: &dyn WalletProvider, input: Value) -> FlaunchResult<String>;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> Value;
}

pub struct ActionRegistry {
    actions: Vec<Box<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            actions: Vec::new(),
        };

        // Register default actions
        registry.register(Box::new(FlaunchCreateTokenAction::new()));

        registry
    }

    pub fn register(&mut self, action: Box<dyn Action>) {
        self.actions.push(action);
    }

    pub async fn execute_action(
        &self,
        action_name: &str,
        wallet: &dyn WalletProvider,
        input: Value,
    ) -> FlaunchResult<String> {
        for action in &self.actions {
            if action.name() == action_name {
                return action.execute(wallet, input).await;
            }
        }

        Err(FlaunchError::invalid_input(format!(
            "Action '{}' not found",
            action_name
        )))
    }

    pub fn list_actions(&self) -> Vec<(&str, &str)> {
        self.actions
            .iter()
            .map(|action| (action.name(), action.description()))
            .collect()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
