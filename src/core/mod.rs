//! Process-wide state.

pub mod state;
