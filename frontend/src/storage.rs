use prize_wheel_shared::{ResultStore, WheelError};
use web_sys::{window, Storage};

/// `window.localStorage`, scoped to the page origin
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LocalResultStore;

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

impl ResultStore for LocalResultStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError> {
        let storage = local_storage()
            .ok_or_else(|| WheelError::Storage("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| WheelError::Storage(format!("{:?}", e)))
    }
}
