//! REST API endpoint implementations.

mod clusters;
mod request;

pub use clusters::{get_cluster, get_node_pool};
pub use request::send_request;
