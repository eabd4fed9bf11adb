pub mod app_state;
pub mod load;
pub mod modes;

pub use app_state::App;
pub use load::{LoadMessage, PageInfo};
pub use modes::AppMode;
