// src/lib.rs

//! Waymark: a synchronous, observable step sequencer for guided on-screen tours.
//!
//! Waymark maps a host-declared, ordered list of step identifiers (possibly
//! spanning multiple navigation routes) onto the step definitions the view has
//! actually mounted, with:
//!  - Lazy resolution of declared identifiers against a view-driven staging area.
//!  - Advance/retreat navigation with explicit boundary signaling.
//!  - Route-qualified identifiers (`name@path?key=value`) parsed once at load.
//!  - Route lookahead for the step that would become current next.
//!  - A synchronous broadcast channel for anchor position changes.
//!
//! Rendering the tour overlay, measuring the screen, and driving the router are
//! the host's business; waymark only decides which step is current, which route
//! must be visited first, and tells subscribers when a step's anchor moved.

pub mod core;
pub mod error;
pub mod events;
pub mod order;
pub mod sequencer;

// --- Re-exports for the Public API ---

pub use crate::core::action::StepAction;
pub use crate::core::ident::{RouteSpec, StepId, ROUTE_SEPARATOR};
pub use crate::core::route::StepRoute;
pub use crate::core::step::TourStep;

pub use crate::error::{WaymarkError, WaymarkResult};

pub use crate::events::{PositionChanged, PositionListener, Subscription};
pub use crate::order::{StaticStepOrder, StepOrder};
pub use crate::sequencer::StepSequencer;
