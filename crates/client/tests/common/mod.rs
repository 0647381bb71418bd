//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root

#[allow(unused_imports)]
pub use gke_client::testing::load_fixture;

#[allow(unused_imports)]
pub use gke_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLUSTER_NAME: &str = "projects/acme-nonprod/locations/europe-west1/clusters/apps-nonprod";
pub const NODE_POOL_NAME: &str =
    "projects/acme-nonprod/locations/europe-west1/clusters/apps-nonprod/nodePools/default-pool";
