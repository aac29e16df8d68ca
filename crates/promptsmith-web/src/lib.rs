//! # Promptsmith Web
//!
//! Browser front end for the optimizer: one page plus a small JSON API.
//!
//! | route | purpose |
//! |---|---|
//! | `GET /` | form page (embedded assets) |
//! | `POST /api/optimize` | run an optimization |
//! | `GET /api/status` | readiness report |
//! | `GET /api/info` | title, description, example questions |
//! | `GET /health` | liveness |

pub mod routes;
pub mod server;

mod assets;
mod error;
mod state;

pub use error::{Result, WebError};
pub use server::{build_router, start_server};
pub use state::AppState;
