pub mod browse;
pub mod common;

pub use browse::handle_browse_key;
pub use common::{handle_detail_key, handle_help_key};
