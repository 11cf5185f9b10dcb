// waymark/src/core/step.rs

//! Defines the runtime step definition registered by the view as anchors mount.

/// A tour step as it exists at runtime: an anchor currently mounted in the
/// host view.
///
/// The `name` is invariant and matches the bare-name part of some declared
/// step identifier. The `position` is a placement hint for whoever draws the
/// overlay; the core stores and forwards it but never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourStep {
  pub name: String,
  pub position: String,
}

impl TourStep {
  pub fn new<N: Into<String>, P: Into<String>>(name: N, position: P) -> Self {
    Self {
      name: name.into(),
      position: position.into(),
    }
  }
}
