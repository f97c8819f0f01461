pub mod prize_wheel;
