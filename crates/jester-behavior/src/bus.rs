//! Ordered, synchronous notification dispatch.
//!
//! Every notification is handled to completion before `dispatch` returns.
//! Beast controllers are routed by actor: spawn, life-state, and emote
//! notifications go to the controller of the actor they concern, melee hits
//! to the controller of the attacker.
//!
//! Emotes additionally flow through downstream listeners. The order is
//! fixed: the beast controller first, then every [`EmoteStage::Vocal`]
//! listener, then every [`EmoteStage::BodyEmotes`] listener, each in
//! registration order. Once the event is marked handled, the remaining
//! listeners are skipped.

use std::collections::BTreeMap;

use jester_types::ActorId;
use tracing::{debug, trace};

use crate::controller::{BeastController, EmoteOutcome, Services};
use crate::error::BehaviorError;
use crate::events::{EmoteEvent, Notification};
use crate::profile::ActorProfile;

/// Downstream emote stages, in delivery order after the beast controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmoteStage {
    /// Voice sounds (screams, laughs).
    Vocal,
    /// Body sounds (claps, snaps).
    BodyEmotes,
}

/// Delivery order of the downstream stages.
pub const DOWNSTREAM_ORDER: [EmoteStage; 2] = [EmoteStage::Vocal, EmoteStage::BodyEmotes];

/// A downstream emote handler.
pub trait EmoteListener {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Handle an emote that no earlier handler has handled yet.
    fn handle(&mut self, event: &mut EmoteEvent, services: &mut Services<'_>);
}

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// No controller was interested and, for emotes, no listener ran.
    Unrouted,
    /// A beast initialized.
    Spawned {
        /// The companion spawned next to it, if any.
        companion: Option<ActorId>,
    },
    /// A beast's capabilities were updated for its new life state.
    LifeStateApplied,
    /// An emote went through the pipeline.
    Emote {
        /// The beast controller's outcome, if the emoter is a beast.
        beast: Option<EmoteOutcome>,
        /// Number of downstream listeners that ran.
        listeners: usize,
        /// Whether the event ended up handled.
        handled: bool,
    },
    /// A beast's melee hit was processed.
    MeleeHit {
        /// Actors newly marked as transformed.
        marked: Vec<ActorId>,
    },
}

/// Routes notifications to beast controllers and emote listeners.
#[derive(Default)]
pub struct EventBus {
    controllers: BTreeMap<ActorId, BeastController>,
    listeners: BTreeMap<EmoteStage, Vec<Box<dyn EmoteListener>>>,
}

impl core::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBus")
            .field("controllers", &self.controllers.len())
            .field(
                "listeners",
                &self.listeners.values().map(Vec::len).sum::<usize>(),
            )
            .finish()
    }
}

impl EventBus {
    /// Create a bus with no controllers and no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a controller for `actor`. The beast does not initialize until
    /// a [`Notification::Spawned`] for it is dispatched.
    pub fn register(&mut self, actor: ActorId, profile: ActorProfile) -> Result<(), BehaviorError> {
        if self.controllers.contains_key(&actor) {
            return Err(BehaviorError::DuplicateController(actor));
        }
        self.controllers
            .insert(actor, BeastController::new(actor, profile));
        debug!(%actor, "Beast controller registered");
        Ok(())
    }

    /// Detach and return the controller for `actor`.
    pub fn unregister(&mut self, actor: ActorId) -> Option<BeastController> {
        self.controllers.remove(&actor)
    }

    /// The controller for `actor`, if it is a beast.
    pub fn controller(&self, actor: ActorId) -> Option<&BeastController> {
        self.controllers.get(&actor)
    }

    /// Number of registered beasts.
    pub fn beast_count(&self) -> usize {
        self.controllers.len()
    }

    /// Append a downstream emote listener to `stage`.
    pub fn add_listener(&mut self, stage: EmoteStage, listener: Box<dyn EmoteListener>) {
        debug!(?stage, listener = listener.name(), "Emote listener added");
        self.listeners.entry(stage).or_default().push(listener);
    }

    /// Deliver `notification` to every interested handler.
    pub fn dispatch(&mut self, notification: Notification, services: &mut Services<'_>) -> Dispatch {
        match notification {
            Notification::Spawned(spawned) => match self.controllers.get_mut(&spawned.actor) {
                Some(controller) => Dispatch::Spawned {
                    companion: controller.on_spawned(services),
                },
                None => Dispatch::Unrouted,
            },
            Notification::LifeStateChanged(change) => match self.controllers.get(&change.actor) {
                Some(controller) => {
                    controller.on_life_state_changed(change.new_state, services);
                    Dispatch::LifeStateApplied
                }
                None => Dispatch::Unrouted,
            },
            Notification::Emote(mut event) => self.dispatch_emote(&mut event, services),
            Notification::MeleeHit(hit) => match self.controllers.get(&hit.attacker) {
                Some(controller) => Dispatch::MeleeHit {
                    marked: controller.on_melee_hit(&hit, services),
                },
                None => Dispatch::Unrouted,
            },
        }
    }

    fn dispatch_emote(&mut self, event: &mut EmoteEvent, services: &mut Services<'_>) -> Dispatch {
        let beast = self
            .controllers
            .get(&event.actor)
            .map(|controller| controller.on_emote(event, services));

        let mut ran = 0_usize;
        for stage in DOWNSTREAM_ORDER {
            let Some(listeners) = self.listeners.get_mut(&stage) else {
                continue;
            };
            for listener in listeners {
                if event.handled {
                    trace!(?stage, listener = listener.name(), "Emote already handled");
                    continue;
                }
                listener.handle(event, services);
                ran = ran.saturating_add(1);
            }
        }

        if beast.is_none() && ran == 0 {
            return Dispatch::Unrouted;
        }
        Dispatch::Emote {
            beast,
            listeners: ran,
            handled: event.handled,
        }
    }
}
