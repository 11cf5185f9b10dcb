// tests/ident_tests.rs
mod common;

use common::*;
use waymark::{StepAction, StepId, StepRoute};

#[test]
fn full_identifier_decomposes_into_name_target_and_query() {
  let id = StepId::parse("foo@bar?x=1&y=2");
  assert_eq!(id.name(), "foo");

  let route = id.step_route();
  assert_eq!(route.target, "bar");
  let query = route.query_params.expect("query section present");
  assert_eq!(query.len(), 2);
  assert_eq!(query.get("x").map(String::as_str), Some("1"));
  assert_eq!(query.get("y").map(String::as_str), Some("2"));
}

#[test]
fn bare_identifier_yields_empty_target_and_absent_query() {
  let id = StepId::parse("foo");
  assert_eq!(id.name(), "foo");

  // Empty target, not an absent route: callers branch on the two differently.
  let route = id.step_route();
  assert_eq!(route.target, "");
  assert!(route.query_params.is_none());
  assert!(route.is_empty());
}

#[test]
fn route_without_query_yields_target_and_absent_query() {
  let id = StepId::parse("foo@bar");
  assert_eq!(id.name(), "foo");

  let route = id.step_route();
  assert_eq!(route.target, "bar");
  assert!(route.query_params.is_none());
  assert!(!route.is_empty());
}

#[test]
fn empty_target_with_query_keeps_the_query() {
  let route = StepId::parse("foo@?x=1").step_route();
  assert_eq!(route.target, "");
  let query = route.query_params.expect("query section present");
  assert_eq!(query.get("x").map(String::as_str), Some("1"));
}

#[test]
fn query_section_is_split_on_the_first_equals() {
  let route = StepId::parse("filter@search?q=a=b&page=2").step_route();
  let query = route.query_params.expect("query section present");
  assert_eq!(query.get("q").map(String::as_str), Some("a=b"));
  assert_eq!(query.get("page").map(String::as_str), Some("2"));
}

#[test]
fn query_fragment_without_equals_maps_to_empty_value() {
  let route = StepId::parse("flag@list?verbose").step_route();
  let query = route.query_params.expect("query section present");
  assert_eq!(query.get("verbose").map(String::as_str), Some(""));
}

#[test]
fn raw_token_is_preserved() {
  let id = StepId::parse("foo@bar?x=1");
  assert_eq!(id.raw(), "foo@bar?x=1");
}

#[test]
fn default_step_route_is_the_boundary_shape() {
  let route = StepRoute::default();
  assert_eq!(route.target, "");
  assert!(route.query_params.is_none());
}

#[test]
fn lookahead_decomposition_matches_direct_parsing() {
  setup_tracing();
  let seq = sequencer(&["foo@bar?x=1&y=2", "plain"]);
  stage_all(&seq, &["foo", "plain"]);

  let route = seq.step_route(StepAction::Advance);
  assert_eq!(route, StepId::parse("foo@bar?x=1&y=2").step_route());

  seq.get(StepAction::Advance).unwrap();
  let next = seq.step_route(StepAction::Advance);
  assert_eq!(next.target, "");
  assert!(next.query_params.is_none());
}
