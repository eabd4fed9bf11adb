pub mod filter;
pub mod navigation;

pub use filter::{filter_next, filter_prev};
pub use navigation::{navigate_down, navigate_up};
