mod health;
mod info;
mod optimize;
mod status;

pub use health::health_routes;
pub use info::{info_routes, EXAMPLE_QUESTIONS};
pub use optimize::{optimize_routes, OptimizeRequest, OptimizeResponse};
pub use status::{status_routes, StatusResponse};
