//! Actor and capability store.
//!
//! The [`ActorStore`] trait is the only way the controller reads or changes
//! actor state. Capability operations are idempotent: ensuring a present
//! marker or removing an absent one changes nothing. [`ActorTable`] is the
//! in-memory implementation used by the engine and the tests.

use std::collections::{BTreeMap, BTreeSet};

use jester_types::{ActorId, Capability, EmoteKey, LifeState, LocationId};

/// Per-actor capability markers plus the position and life-state queries
/// the controller needs.
pub trait ActorStore {
    /// Add `capability` to `actor`. Returns `true` if it was newly added.
    fn ensure(&mut self, actor: ActorId, capability: Capability) -> bool;

    /// Remove `capability` from `actor`. Returns `true` if it was present.
    ///
    /// Removing [`Capability::AutoEmote`] also drops the actor's registered
    /// auto-emote triggers.
    fn remove(&mut self, actor: ActorId, capability: Capability) -> bool;

    /// Whether `actor` currently has `capability`.
    fn has(&self, actor: ActorId, capability: Capability) -> bool;

    /// Register an auto-emote trigger. Returns `true` if it was not yet
    /// registered. Has no effect unless the actor has
    /// [`Capability::AutoEmote`].
    fn register_auto_emote(&mut self, actor: ActorId, trigger: EmoteKey) -> bool;

    /// The auto-emote triggers currently registered for `actor`.
    fn auto_emotes(&self, actor: ActorId) -> Vec<EmoteKey>;

    /// Where `actor` currently stands, if it exists.
    fn location(&self, actor: ActorId) -> Option<LocationId>;

    /// The actor's current life state, if it exists.
    fn life_state(&self, actor: ActorId) -> Option<LifeState>;
}

/// State tracked per actor by [`ActorTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRecord {
    /// Current location.
    pub location: LocationId,
    /// Current life state.
    pub life_state: LifeState,
    /// Capability markers.
    pub capabilities: BTreeSet<Capability>,
    /// Registered auto-emote triggers (only meaningful with `AutoEmote`).
    pub auto_emotes: BTreeSet<EmoteKey>,
}

/// In-memory [`ActorStore`].
#[derive(Debug, Clone, Default)]
pub struct ActorTable {
    actors: BTreeMap<ActorId, ActorRecord>,
}

impl ActorTable {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            actors: BTreeMap::new(),
        }
    }

    /// Insert a new alive actor at `location` with the given capabilities.
    pub fn insert(
        &mut self,
        location: LocationId,
        capabilities: impl IntoIterator<Item = Capability>,
    ) -> ActorId {
        let id = ActorId::new();
        self.actors.insert(
            id,
            ActorRecord {
                location,
                life_state: LifeState::Alive,
                capabilities: capabilities.into_iter().collect(),
                auto_emotes: BTreeSet::new(),
            },
        );
        id
    }

    /// Record a new life state. Returns the previous one, or `None` if the
    /// actor does not exist.
    pub fn set_life_state(&mut self, actor: ActorId, state: LifeState) -> Option<LifeState> {
        self.actors
            .get_mut(&actor)
            .map(|record| core::mem::replace(&mut record.life_state, state))
    }

    /// Look up the full record of an actor.
    pub fn get(&self, actor: ActorId) -> Option<&ActorRecord> {
        self.actors.get(&actor)
    }

    /// Number of actors in the table.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the table has no actors.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl ActorStore for ActorTable {
    fn ensure(&mut self, actor: ActorId, capability: Capability) -> bool {
        self.actors
            .get_mut(&actor)
            .is_some_and(|record| record.capabilities.insert(capability))
    }

    fn remove(&mut self, actor: ActorId, capability: Capability) -> bool {
        let Some(record) = self.actors.get_mut(&actor) else {
            return false;
        };
        let removed = record.capabilities.remove(&capability);
        if capability == Capability::AutoEmote {
            record.auto_emotes.clear();
        }
        removed
    }

    fn has(&self, actor: ActorId, capability: Capability) -> bool {
        self.actors
            .get(&actor)
            .is_some_and(|record| record.capabilities.contains(&capability))
    }

    fn register_auto_emote(&mut self, actor: ActorId, trigger: EmoteKey) -> bool {
        match self.actors.get_mut(&actor) {
            Some(record) if record.capabilities.contains(&Capability::AutoEmote) => {
                record.auto_emotes.insert(trigger)
            }
            _ => false,
        }
    }

    fn auto_emotes(&self, actor: ActorId) -> Vec<EmoteKey> {
        self.actors
            .get(&actor)
            .map(|record| record.auto_emotes.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn location(&self, actor: ActorId) -> Option<LocationId> {
        self.actors.get(&actor).map(|record| record.location)
    }

    fn life_state(&self, actor: ActorId) -> Option<LifeState> {
        self.actors.get(&actor).map(|record| record.life_state)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn table_with_actor() -> (ActorTable, ActorId) {
        let mut table = ActorTable::new();
        let id = table.insert(LocationId::new(), []);
        (table, id)
    }

    #[test]
    fn ensure_is_idempotent() {
        let (mut table, id) = table_with_actor();
        assert!(table.ensure(id, Capability::Clumsy));
        let after_once = table.get(id).cloned();
        assert!(!table.ensure(id, Capability::Clumsy));
        assert_eq!(table.get(id).cloned(), after_once);
    }

    #[test]
    fn removing_absent_capability_is_a_no_op() {
        let (mut table, id) = table_with_actor();
        assert!(!table.remove(id, Capability::StealthOnMove));
        assert!(!table.has(id, Capability::StealthOnMove));
    }

    #[test]
    fn removing_auto_emote_clears_triggers() {
        let (mut table, id) = table_with_actor();
        table.ensure(id, Capability::AutoEmote);
        assert!(table.register_auto_emote(id, EmoteKey::from("Giggle")));
        assert!(!table.register_auto_emote(id, EmoteKey::from("Giggle")));
        assert_eq!(table.auto_emotes(id), vec![EmoteKey::from("Giggle")]);

        table.remove(id, Capability::AutoEmote);
        assert!(table.auto_emotes(id).is_empty());
    }

    #[test]
    fn triggers_need_the_auto_emote_capability() {
        let (mut table, id) = table_with_actor();
        assert!(!table.register_auto_emote(id, EmoteKey::from("Giggle")));
        assert!(table.auto_emotes(id).is_empty());
    }

    #[test]
    fn unknown_actor_has_nothing() {
        let mut table = ActorTable::new();
        let ghost = ActorId::new();
        assert!(!table.ensure(ghost, Capability::Clumsy));
        assert!(!table.has(ghost, Capability::Clumsy));
        assert_eq!(table.location(ghost), None);
        assert_eq!(table.life_state(ghost), None);
    }

    #[test]
    fn set_life_state_returns_previous() {
        let (mut table, id) = table_with_actor();
        assert_eq!(table.set_life_state(id, LifeState::Critical), Some(LifeState::Alive));
        assert_eq!(table.life_state(id), Some(LifeState::Critical));
    }
}
