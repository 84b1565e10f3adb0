//! Typed application state for Staffdesk.
//!
//! UI code stays "dumb": widgets read and mutate state structs owned by a
//! single [`StateCtx`], and the app shell decides when network results get
//! applied. Everything here is synchronous and single-threaded; async results
//! reach the state only through the per-frame poll step in the UI crate.

mod ctx;
mod state;
mod time;

pub use ctx::StateCtx;
pub use state::State;
pub use time::Time;
