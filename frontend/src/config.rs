use log::Level;
use prize_wheel_shared::WheelConfig;

/// The wheel is fixed at build time; these variables are read by the compiler,
/// never at runtime.
pub fn wheel_config() -> WheelConfig {
    with_overrides(
        WheelConfig::default(),
        option_env!("PRIZE_WHEEL_SPIN_MS"),
        option_env!("PRIZE_WHEEL_STORAGE_KEY"),
    )
}

pub fn log_level() -> Level {
    option_env!("PRIZE_WHEEL_LOG")
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::Info)
}

fn with_overrides(mut config: WheelConfig, spin_ms: Option<&str>, storage_key: Option<&str>) -> WheelConfig {
    if let Some(duration) = spin_ms.and_then(|ms| ms.trim().parse().ok()) {
        config.spin_duration_ms = duration;
    }
    if let Some(key) = storage_key.filter(|key| !key.is_empty()) {
        config.storage_key = key.to_string();
    }
    config
}
