//! Change notification for the appearance state
//!
//! Listeners are plain closures called synchronously after a mutation has
//! been committed. They get a shared reference to the state, so a listener
//! can read anything but cannot start another mutation.

use std::collections::BTreeSet;

use super::fields::Field;
use super::AppearanceState;

/// Fields changed by one committed mutation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    fields: BTreeSet<Field>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `field` and everything that depends on it
    pub fn insert(&mut self, field: Field) {
        self.fields.insert(field);
        self.fields.extend(field.dependents().iter().copied());
    }

    /// Record `field` alone
    pub fn insert_only(&mut self, field: Field) {
        self.fields.insert(field);
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }

    /// Whether the overlay needs to redraw
    pub fn touches_visuals(&self) -> bool {
        self.iter().any(Field::is_visual)
    }

    pub fn merge(&mut self, other: &ChangeSet) {
        self.fields.extend(other.fields.iter().copied());
    }
}

impl FromIterator<Field> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut set = ChangeSet::new();
        for field in iter {
            set.insert_only(field);
        }
        set
    }
}

/// Handle returned by [`AppearanceState::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Listener = Box<dyn FnMut(&ChangeSet, &AppearanceState)>;

/// Registered listeners in subscription order
#[derive(Default)]
pub(super) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Observers {
    pub fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Move the listeners out so they can be called with `&state`
    pub fn take(&mut self) -> Vec<(SubscriptionId, Listener)> {
        std::mem::take(&mut self.entries)
    }

    pub fn restore(&mut self, entries: Vec<(SubscriptionId, Listener)>) {
        debug_assert!(self.entries.is_empty());
        self.entries = entries;
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("listeners", &self.entries.len())
            .finish()
    }
}
