//! UI-observable state.

mod observable;

pub use observable::Observable;
