// waymark/src/core/action.rs

//! Defines the navigation actions a caller can request from the sequencer.

/// Direction of a single navigation step through the declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
  /// Move the cursor forward by one declared step.
  Advance,
  /// Move the cursor back by one declared step.
  Retreat,
}

impl StepAction {
  /// The cursor offset this action applies.
  pub(crate) fn offset(self) -> isize {
    match self {
      StepAction::Advance => 1,
      StepAction::Retreat => -1,
    }
  }
}
