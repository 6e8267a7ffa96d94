//! Systems - rules that mutate live location state

mod visibility;

pub use visibility::*;
