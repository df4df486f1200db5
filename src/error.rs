use thiserror::Error;

pub type FlaunchResult<T> = Result<T, FlaunchError>;

#[derive(Error, Debug)]
pub enum FlaunchError {
    #[error("Invalid network: {network}. Valid networks are: {valid}")]
    UnsupportedNetwork { network: String, valid: String },

    #[error("Flaunch factory is not yet deployed on network: {0}")]
    FactoryNotDeployed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Carries the wallet collaborator's message verbatim so the action
    // boundary can render it for the agent loop unchanged.
    #[error("{0}")]
    Wallet(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlaunchError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        FlaunchError::InvalidInput(msg.into())
    }

    pub fn wallet<T: Into<String>>(msg: T) -> Self {
        FlaunchError::Wallet(msg.into())
    }
}
