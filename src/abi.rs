// The factory ABI is foreign-defined structural data: it mirrors the
// deployed PositionManager contract and is never edited by hand here.
// Schema drift on the deployed contract is an external-versioning concern.
use serde_json::Value;
use std::sync::OnceLock;

/// Flaunch factory (PositionManager) ABI as published for the deployed
/// contract, embedded verbatim.
pub const FLAUNCH_FACTORY_ABI_JSON: &str = include_str!("abi/flaunch_factory.json");

static FACTORY_ABI: OnceLock<Value> = OnceLock::new();

/// Parsed factory ABI, parsed once on first use. The embedded document is
/// covered by tests, so the parse cannot fail at runtime.
pub fn factory_abi() -> &'static Value {
    FACTORY_ABI.get_or_init(|| {
        serde_json::from_str(FLAUNCH_FACTORY_ABI_JSON)
            .expect("embedded Flaunch factory ABI is valid JSON")
    })
}
