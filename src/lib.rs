//! Optimal two-pointer solutions to two classic array problems:
//! 3Sum and Trapping Rain Water.

pub mod three_sum;
pub mod trapping_rain_water;

pub use three_sum::find_zero_triplets;
pub use trapping_rain_water::trapped_water;
