// waymark/src/core/ident.rs

//! Defines `StepId`, the parsed form of a declared step identifier.
//!
//! A declared identifier is a composite token `name` or `name@routeSpec`,
//! where `routeSpec` is `path` or `path?key1=val1&key2=val2...`. The token is
//! parsed once, when the sequencer loads the declared order, so navigation,
//! position updates, and ordinal lookups all share one decomposition instead
//! of re-splitting the string on every call.

use std::collections::HashMap;

use crate::core::route::StepRoute;

/// Separator between the anchor name and the route spec. Must not appear in
/// the name or the route path.
pub const ROUTE_SEPARATOR: char = '@';

/// Route portion of a declared identifier: the substring after `@`, split into
/// a router target and an optional query-parameter section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
  pub target: String,
  pub query: Option<HashMap<String, String>>,
}

/// A declared step identifier, parsed at declaration load time.
///
/// `raw` keeps the original token for diagnostics and for matching against the
/// order provider's configured first step, which refers to the full token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepId {
  raw: String,
  name: String,
  route: Option<RouteSpec>,
}

impl StepId {
  /// Parses a declared identifier token.
  pub fn parse<S: Into<String>>(token: S) -> Self {
    let raw: String = token.into();
    match raw.split_once(ROUTE_SEPARATOR) {
      Some((name, spec)) => Self {
        name: name.to_string(),
        route: Some(parse_route_spec(spec)),
        raw,
      },
      None => Self {
        name: raw.clone(),
        route: None,
        raw,
      },
    }
  }

  /// The full declared token, as configured by the host.
  pub fn raw(&self) -> &str {
    &self.raw
  }

  /// The bare anchor name: the substring before the first route separator, or
  /// the whole token if no separator is present.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// The parsed route portion, if the identifier is route-qualified.
  pub fn route(&self) -> Option<&RouteSpec> {
    self.route.as_ref()
  }

  /// The route as handed to callers: an identifier without a separator yields
  /// an empty target (not an absent route), and query parameters stay absent
  /// unless a `?` section existed.
  pub fn step_route(&self) -> StepRoute {
    match &self.route {
      Some(spec) => StepRoute {
        target: spec.target.clone(),
        query_params: spec.query.clone(),
      },
      None => StepRoute::default(),
    }
  }
}

fn parse_route_spec(spec: &str) -> RouteSpec {
  match spec.split_once('?') {
    Some((target, raw_query)) => RouteSpec {
      target: target.to_string(),
      query: Some(parse_query(raw_query)),
    },
    None => RouteSpec {
      target: spec.to_string(),
      query: None,
    },
  }
}

// Fragments split on the first '='; a fragment without '=' maps its whole
// text to an empty value. Duplicate keys keep the last occurrence.
fn parse_query(raw_query: &str) -> HashMap<String, String> {
  raw_query
    .split('&')
    .map(|fragment| match fragment.split_once('=') {
      Some((key, value)) => (key.to_string(), value.to_string()),
      None => (fragment.to_string(), String::new()),
    })
    .collect()
}
