use std::fmt;
use std::sync::Arc;

use super::{StateChange, StateSnapshot};

/// Callback invoked after every store write.
pub type Observer = Arc<dyn Fn(StateChange, &StateSnapshot) + Send + Sync>;

/// Handle returned by [`Store::subscribe`](super::Store::subscribe), used to
/// unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}
