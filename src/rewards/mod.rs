//! Purrfect Saver reward counters

pub mod counter;

pub use counter::{level_for, RewardState, Submission, AMOUNT_PER_POINT, POINTS_PER_LEVEL};
