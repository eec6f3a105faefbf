//! Analysis-session state machine.
//!
//! One session tracks one user's path through the dashboard: draw a
//! boundary, run the analysis, look at the result, start over. The machine
//! owns the boundary and the generated dataset and makes the legal
//! transitions explicit, independent of any rendering technology.

pub mod machine;

pub use machine::{Session, ViewState};
