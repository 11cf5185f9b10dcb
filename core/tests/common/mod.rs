// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use waymark::{StaticStepOrder, StepSequencer, TourStep};

use tracing::Level;

/// Builds a sequencer over the given declared order, already initialized.
pub fn sequencer(steps: &[&str]) -> StepSequencer {
  let order = StaticStepOrder::new(steps.iter().copied());
  let seq = StepSequencer::new(Arc::new(order));
  seq.init();
  seq
}

/// Builds a sequencer with a configured first step, already initialized.
pub fn sequencer_starting_at(steps: &[&str], first_step: &str) -> StepSequencer {
  let order = StaticStepOrder::new(steps.iter().copied()).with_first_step(first_step);
  let seq = StepSequencer::new(Arc::new(order));
  seq.init();
  seq
}

/// Stages one anchor per bare name, with a default position hint.
pub fn stage_all(seq: &StepSequencer, names: &[&str]) {
  for name in names {
    seq.add_step(TourStep::new(*name, "bottom"));
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
