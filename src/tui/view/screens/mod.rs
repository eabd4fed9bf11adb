mod browse;

pub use browse::{render_browse, BrowseData};
