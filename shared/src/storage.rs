use std::collections::HashMap;
use crate::error::WheelError;
use crate::shared_prize_wheel::SpinResult;

/// Key-value store holding the persisted spin result.
pub trait ResultStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError>;
}

/// In-memory store for tests and hosts without browser storage
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }
}

impl ResultStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn decode_result(raw: &str) -> Result<SpinResult, WheelError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode_result(result: &SpinResult) -> Result<String, WheelError> {
    Ok(serde_json::to_string(result)?)
}

/// Reads a previously saved result. Anything unreadable counts as no result.
pub fn load_result<S: ResultStore + ?Sized>(store: &S, key: &str) -> Option<SpinResult> {
    let raw = store.get(key)?;
    match decode_result(&raw) {
        Ok(result) => Some(result),
        Err(e) => {
            log::error!("Ignoring stored spin result under `{}`: {}", key, e);
            None
        }
    }
}

pub fn save_result<S: ResultStore + ?Sized>(store: &mut S, key: &str, result: &SpinResult) -> Result<(), WheelError> {
    let raw = encode_result(result)?;
    store.set(key, &raw)
}
