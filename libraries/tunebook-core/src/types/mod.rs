//! Domain types for Tunebook

mod book;
mod tune;

pub use book::BookCount;
pub use tune::Tune;
