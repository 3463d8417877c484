//! HTTP proxy in front of the RCM orchestrator
//!
//! Every table page lists through `GET /api/{resource}`; the workflow page
//! uploads through `POST /api/run`. Handlers only hold trait objects, so tests
//! swap in fakes without touching the network.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::DashboardState;
pub use router::build_router;
