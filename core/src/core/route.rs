// waymark/src/core/route.rs

//! Defines the route lookahead result handed to the host's router.

use std::collections::HashMap;

/// The navigation target encoded in a route-qualified step identifier.
///
/// Two absence shapes are distinct on purpose, because callers branch on them
/// differently:
///  - an identifier with no route separator yields an EMPTY `target` and
///    `query_params: None`;
///  - an identifier with a separator but no `?` section yields a non-empty
///    `target` and still `query_params: None`;
///  - only a `?` section produces `query_params: Some(..)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepRoute {
  /// Router target path; empty when the identifier carries no route.
  pub target: String,
  /// Query parameters, absent unless the route spec contains a `?` section.
  pub query_params: Option<HashMap<String, String>>,
}

impl StepRoute {
  /// True when there is no route to navigate to before showing the step.
  pub fn is_empty(&self) -> bool {
    self.target.is_empty()
  }
}
