// waymark/src/events.rs

//! The position-changed broadcast channel.
//!
//! A one-directional observer surface: the sequencer publishes the updated
//! step definition whenever an anchor's position hint changes, and every
//! current subscriber is invoked synchronously, in subscription order, on the
//! publisher's thread of control. There is no buffering and no replay; a
//! subscriber registered after an event never sees it.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::step::TourStep;

/// Callback invoked with each updated step definition.
pub type PositionListener = Arc<dyn Fn(&TourStep) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Broadcast channel for position-changed notifications.
#[derive(Default)]
pub struct PositionChanged {
  subscribers: RwLock<Vec<(Subscription, PositionListener)>>,
  next_id: RwLock<u64>,
}

impl PositionChanged {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a listener. Delivery starts with the next published event.
  pub fn subscribe<F>(&self, listener: F) -> Subscription
  where
    F: Fn(&TourStep) + Send + Sync + 'static,
  {
    let id = {
      let mut next = self.next_id.write();
      *next += 1;
      Subscription(*next)
    };
    self.subscribers.write().push((id, Arc::new(listener)));
    id
  }

  /// Removes a listener. Unknown subscriptions are a no-op.
  pub fn unsubscribe(&self, subscription: Subscription) {
    self.subscribers.write().retain(|(id, _)| *id != subscription);
  }

  pub fn subscriber_count(&self) -> usize {
    self.subscribers.read().len()
  }

  /// Delivers `step` to every subscriber present when publishing starts, in
  /// subscription order. The subscriber list is snapshotted first, so a
  /// listener may subscribe or unsubscribe re-entrantly without deadlocking;
  /// such changes take effect from the next publish.
  pub(crate) fn publish(&self, step: &TourStep) {
    let snapshot: Vec<PositionListener> = self
      .subscribers
      .read()
      .iter()
      .map(|(_, listener)| Arc::clone(listener))
      .collect();
    for listener in snapshot {
      listener(step);
    }
  }
}

impl std::fmt::Debug for PositionChanged {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PositionChanged")
      .field("subscriber_count", &self.subscriber_count())
      .finish()
  }
}
