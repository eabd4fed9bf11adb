pub mod client;
pub mod endpoints;
pub mod error;

pub use client::{ApiClient, CourseQuery};
pub use endpoints::Endpoint;
pub use error::ApiError;
