// waymark/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaymarkError {
  /// Navigation was attempted past the first or last declared step.
  /// The cursor is left one step outside the valid range; the caller must
  /// re-initialize the sequencer (or navigate back) before calling `get` again.
  #[error("The first or last step of the tour cannot be found")]
  OutOfRange,

  /// A referenced step name has no match in the declared order. This is a
  /// configuration mistake by the host application, not a transient condition.
  #[error("The step with name '{step_name}' does not exist in the step list")]
  StepNotFound { step_name: String },
}

pub type WaymarkResult<T, E = WaymarkError> = std::result::Result<T, E>;
