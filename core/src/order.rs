// waymark/src/order.rs

//! Defines the `StepOrder` trait for sourcing the declared tour configuration,
//! and `StaticStepOrder`, a pre-built implementation for hosts that configure
//! the tour once up front.

/// A source for the declared tour configuration.
///
/// The sequencer consults this collaborator on every `init()` and never
/// mutates it. Implementations must return a stable sequence for the duration
/// of one `init()` call; between calls the configuration may change (the next
/// `init()` picks up the new order).
pub trait StepOrder: Send + Sync {
  /// The declared, ordered list of step identifier tokens
  /// (`name` or `name@routeSpec`).
  fn steps_order(&self) -> Vec<String>;

  /// The full token of the step the tour should open on, if the host
  /// configured one.
  fn first_step(&self) -> Option<String>;
}

/// A fixed declared order, owned by the sequencer's creator.
#[derive(Debug, Clone, Default)]
pub struct StaticStepOrder {
  steps: Vec<String>,
  first_step: Option<String>,
}

impl StaticStepOrder {
  pub fn new<I, S>(steps: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      steps: steps.into_iter().map(Into::into).collect(),
      first_step: None,
    }
  }

  /// Sets the identifier of the step the tour should open on.
  pub fn with_first_step<S: Into<String>>(mut self, first_step: S) -> Self {
    self.first_step = Some(first_step.into());
    self
  }
}

impl StepOrder for StaticStepOrder {
  fn steps_order(&self) -> Vec<String> {
    self.steps.clone()
  }

  fn first_step(&self) -> Option<String> {
    self.first_step.clone()
  }
}
