pub mod action;
pub mod ident;
pub mod route;
pub mod step;

// Re-export key types for easier access from other waymark modules (and lib.rs)
pub use action::StepAction;
pub use ident::{RouteSpec, StepId, ROUTE_SEPARATOR};
pub use route::StepRoute;
pub use step::TourStep;
