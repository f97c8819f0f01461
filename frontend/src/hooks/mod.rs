pub mod use_prize_wheel;

pub use use_prize_wheel::*;
