pub mod api;
pub mod capacity;
pub mod config;
pub mod events;
mod state;

#[cfg(test)]
mod tests;

pub use state::{AppState, Snapshot, SnapshotInfo};
