pub mod config;
pub mod constants;
pub mod error;
pub mod prize_table;
pub mod rotation;
pub mod selector;
pub mod shared_prize_wheel;
pub mod slices;
pub mod storage;

pub use config::WheelConfig;
pub use error::WheelError;
pub use prize_table::{Distribution, DistributionEntry, PrizeTier};
pub use shared_prize_wheel::{PrizeWheel, SpinPlan, SpinResult, WheelEvent, WheelPhase};
pub use slices::{Slice, Wedge};
pub use storage::{MemoryStore, ResultStore};
