// Network -> Flaunch factory address table. Fixed at build time; lookups
// are case-normalized before matching.
use crate::error::{FlaunchError, FlaunchResult};
use tracing::debug;

/// Deployment status of the Flaunch factory on a given network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryDeployment {
    Deployed(&'static str),
    /// Announced but not yet live. Calls against a pending network fail
    /// fast instead of reverting deep inside the wallet layer.
    Pending,
}

pub const FLAUNCH_FACTORY_CONTRACT_ADDRESSES: &[(&str, FactoryDeployment)] = &[
    (
        "base-sepolia",
        FactoryDeployment::Deployed("0xE982F970859383cF3A4221184330aa7B1AAE7fdc"),
    ),
    ("base-mainnet", FactoryDeployment::Pending),
];

/// Comma-separated list of all known network identifiers, for error messages.
pub fn valid_networks() -> String {
    FLAUNCH_FACTORY_CONTRACT_ADDRESSES
        .iter()
        .map(|(network, _)| *network)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve the Flaunch factory contract address for a network identifier.
///
/// Matching is case-insensitive. Fails with `UnsupportedNetwork` for unknown
/// identifiers and `FactoryNotDeployed` for networks the factory has not
/// launched on yet.
pub fn resolve_factory_address(network: &str) -> FlaunchResult<&'static str> {
    let normalized = network.to_lowercase();

    match FLAUNCH_FACTORY_CONTRACT_ADDRESSES
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
    {
        Some((_, FactoryDeployment::Deployed(address))) => {
            debug!("Resolved Flaunch factory on {}: {}", normalized, address);
            Ok(address)
        }
        Some((_, FactoryDeployment::Pending)) => {
            Err(FlaunchError::FactoryNotDeployed(normalized))
        }
        None => Err(FlaunchError::UnsupportedNetwork {
            network: normalized,
            valid: valid_networks(),
        }),
    }
}
