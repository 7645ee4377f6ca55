use std::collections::BTreeSet;
use std::fmt;

use crate::domain::entities::user::UserId;

/// What an in-flight mutation is about. Creates share one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MutationKey {
    Create,
    Record(UserId),
}

impl fmt::Display for MutationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKey::Create => write!(f, "new user"),
            MutationKey::Record(id) => write!(f, "user {id}"),
        }
    }
}

/// Single-flight guard: one outstanding mutation per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingMutations {
    keys: BTreeSet<MutationKey>,
}

impl PendingMutations {
    pub fn try_begin(&mut self, key: MutationKey) -> bool {
        self.keys.insert(key)
    }

    pub fn finish(&mut self, key: MutationKey) {
        self.keys.remove(&key);
    }

    pub fn is_pending(&self, key: MutationKey) -> bool {
        self.keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_for_same_key_is_refused() {
        let mut pending = PendingMutations::default();
        assert!(pending.try_begin(MutationKey::Record(UserId(1))));
        assert!(!pending.try_begin(MutationKey::Record(UserId(1))));
        assert!(pending.try_begin(MutationKey::Record(UserId(2))));
        assert!(pending.try_begin(MutationKey::Create));

        pending.finish(MutationKey::Record(UserId(1)));
        assert!(!pending.is_pending(MutationKey::Record(UserId(1))));
        assert!(pending.try_begin(MutationKey::Record(UserId(1))));
    }
}
