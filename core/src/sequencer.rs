// waymark/src/sequencer.rs

//! Defines `StepSequencer`, the runtime association between the declared step
//! order and the step definitions the view has actually mounted.
//!
//! The sequencer owns three pieces of state:
//!  - the working slots: one per declared identifier, in declared order, each
//!    lazily caching the step definition resolved for it;
//!  - the staging area: the definitions currently registered by the view,
//!    keyed by anchor name;
//!  - the cursor: the index of the current step within the working slots.
//!
//! Navigation (`get`) moves the cursor and resolves the declared identifier at
//! the new index against the staging area. A missing anchor is a normal
//! outcome (the view may not render it right now) and is surfaced as
//! `Ok(None)`; crossing either boundary of the declared order is the fatal
//! `OutOfRange` condition.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{event, Level};

use crate::core::action::StepAction;
use crate::core::ident::StepId;
use crate::core::route::StepRoute;
use crate::core::step::TourStep;
use crate::error::{WaymarkError, WaymarkResult};
use crate::events::PositionChanged;
use crate::order::StepOrder;

struct WorkingSlot {
  id: StepId,
  step: Option<TourStep>,
}

struct SequencerState {
  slots: Vec<WorkingSlot>,
  cursor: isize,
}

/// The step sequencer for one active tour.
///
/// All methods take `&self`; slots/cursor and the staging area live behind
/// separate locks so that a step registration triggered while a navigation is
/// resolving (a nested view-mount side effect) cannot corrupt either. No lock
/// is held while subscriber callbacks run.
pub struct StepSequencer {
  order: Arc<dyn StepOrder>,
  state: Mutex<SequencerState>,
  staging: Mutex<HashMap<String, TourStep>>,
  position_changed: PositionChanged,
}

impl StepSequencer {
  /// Creates a sequencer bound to a declared order source. The sequencer is
  /// inert until the first `init()`.
  pub fn new(order: Arc<dyn StepOrder>) -> Self {
    Self {
      order,
      state: Mutex::new(SequencerState {
        slots: Vec::new(),
        cursor: -1,
      }),
      staging: Mutex::new(HashMap::new()),
      position_changed: PositionChanged::new(),
    }
  }

  /// Rebuilds the working slots from the order source and rewinds the cursor
  /// to just before the configured first step, so that the first `Advance`
  /// lands on it.
  ///
  /// Idempotent; this is the supported way to reset a tour (for example after
  /// a route change remounts the view). Slot contents and the cursor are
  /// discarded; the staging area and subscribers survive.
  pub fn init(&self) {
    let tokens = self.order.steps_order();
    let first_index = self.first_step_index(&tokens);
    event!(Level::INFO, steps = tokens.len(), "Initializing the working slots.");

    let slots: Vec<WorkingSlot> = tokens
      .into_iter()
      .map(|token| WorkingSlot {
        id: StepId::parse(token),
        step: None,
      })
      .collect();

    let mut state = self.state.lock();
    state.slots = slots;
    state.cursor = first_index as isize - 1;
  }

  // The configured first step may be the full declared token or just the bare
  // anchor name; an exact token match wins, then the first bare-name match.
  // An absent configuration silently means the first declared step; an
  // unknown one falls back to it with a warning.
  fn first_step_index(&self, tokens: &[String]) -> usize {
    let Some(first_step) = self.order.first_step() else {
      return 0;
    };
    let by_token = tokens.iter().position(|token| *token == first_step);
    let by_name = || {
      let first_name = StepId::parse(first_step.clone());
      tokens
        .iter()
        .position(|token| StepId::parse(token.clone()).name() == first_name.name())
    };
    match by_token.or_else(by_name) {
      Some(index) => index,
      None => {
        event!(
          Level::WARN,
          step = %first_step,
          "The configured first step does not exist. Check your declared step list."
        );
        0
      }
    }
  }

  /// Registers a step definition as its anchor mounts, replacing any prior
  /// definition with the same name. Never fails; registration order reflects
  /// view-mount order and is unrelated to tour order.
  pub fn add_step(&self, step: TourStep) {
    let mut staging = self.staging.lock();
    match staging.entry(step.name.clone()) {
      Entry::Vacant(entry) => {
        event!(Level::INFO, step = %step.name, "Adding step to the staging area.");
        entry.insert(step);
      }
      Entry::Occupied(mut entry) => {
        entry.insert(step);
      }
    }
  }

  /// Moves the cursor one step in the given direction and resolves the
  /// declared identifier there against the staging area.
  ///
  /// Returns `Ok(None)` when the declared step's anchor is not present in the
  /// current view; the caller decides whether to skip, wait, or abort. Fails
  /// with [`WaymarkError::OutOfRange`] past either end of the declared order,
  /// leaving the cursor at the invalid value: reinitialize with `init()` (or
  /// navigate in the opposite direction) before calling `get` again.
  pub fn get(&self, action: StepAction) -> WaymarkResult<Option<TourStep>> {
    let mut state = self.state.lock();
    state.cursor += action.offset();

    let cursor = state.cursor;
    if cursor < 0 || cursor >= state.slots.len() as isize {
      return Err(WaymarkError::OutOfRange);
    }
    let index = cursor as usize;

    let name = state.slots[index].id.name().to_string();
    let found = self.staging.lock().get(&name).cloned();
    state.slots[index].step = found.clone();

    if found.is_none() {
      event!(
        Level::WARN,
        step = %state.slots[index].id.raw(),
        "Step anchor not present in the current view. Check if it is conditionally rendered."
      );
    }

    Ok(found)
  }

  /// Looks at the identifier that would become current after `action`, without
  /// moving the cursor, and returns the route encoded in it.
  ///
  /// Past either boundary there is no identifier, so the result is an empty
  /// target with absent query parameters.
  pub fn step_route(&self, action: StepAction) -> StepRoute {
    let state = self.state.lock();
    let neighbor = state.cursor + action.offset();
    if neighbor < 0 {
      return StepRoute::default();
    }
    state
      .slots
      .get(neighbor as usize)
      .map(|slot| slot.id.step_route())
      .unwrap_or_default()
  }

  /// Updates the position hint of the step named `name` and broadcasts the
  /// updated definition to position-changed subscribers.
  ///
  /// If the slot for `name` holds no resolved definition (anchor not in the
  /// current view, or not yet visited), this is a no-op apart from a warning;
  /// no event is published. Fails with [`WaymarkError::StepNotFound`] when
  /// `name` matches nothing in the declared order.
  pub fn update_position(&self, name: &str, position: &str) -> WaymarkResult<()> {
    let updated = {
      let mut state = self.state.lock();
      let index = step_index(&state.slots, name)?;
      match state.slots[index].step.as_mut() {
        Some(step) => {
          step.position = position.to_string();
          Some(step.clone())
        }
        None => None,
      }
    };

    match updated {
      Some(step) => {
        // Keep the staged copy in agreement so later lookups see the new hint.
        if let Some(staged) = self.staging.lock().get_mut(&step.name) {
          staged.position = step.position.clone();
        }
        self.position_changed.publish(&step);
        Ok(())
      }
      None => {
        event!(
          Level::WARN,
          step = name,
          new_position = position,
          "Cannot update the position of an unresolved step. Is it located on a different route?"
        );
        Ok(())
      }
    }
  }

  /// 1-based ordinal of the declared step named `name`, independent of what is
  /// currently staged.
  pub fn step_number(&self, name: &str) -> WaymarkResult<usize> {
    let state = self.state.lock();
    step_index(&state.slots, name).map(|index| index + 1)
  }

  /// Total number of steps the tour was declared with, independent of how many
  /// anchors are currently mounted.
  pub fn steps_count(&self) -> usize {
    self.order.steps_order().len()
  }

  /// The position-changed broadcast channel, for subscribing the overlay
  /// renderer (or anything else that tracks anchor placement).
  pub fn position_changed(&self) -> &PositionChanged {
    &self.position_changed
  }
}

impl std::fmt::Debug for StepSequencer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let state = self.state.lock();
    f.debug_struct("StepSequencer")
      .field("slots", &state.slots.len())
      .field("cursor", &state.cursor)
      .field("staged", &self.staging.lock().len())
      .finish()
  }
}

// Decompose-match: slots are matched on the bare name, the same decomposition
// navigation uses.
fn step_index(slots: &[WorkingSlot], name: &str) -> WaymarkResult<usize> {
  slots
    .iter()
    .position(|slot| slot.id.name() == name)
    .ok_or_else(|| WaymarkError::StepNotFound {
      step_name: name.to_string(),
    })
}
