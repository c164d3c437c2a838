//! Scripted encounter between the beast and a crowd of bystanders.
//!
//! The encounter seeds an in-memory world from [`JesterConfig`], registers
//! the beast with the bus, and plays a fixed number of rounds. Each round
//! the beast emotes, a bystander emotes, and the beast swings at a random
//! subset of the crowd. Every `downed_every` rounds the beast instead goes
//! critical for the round and is revived at its end.
//!
//! Two RNG streams are used: the script stream picks emotes and targets,
//! the behavior stream feeds the controller's chance rolls. Both are seeded
//! from `world.seed`, so an encounter is reproducible.

use jester_behavior::{
    ActorSpawned, ActorStore, ActorTable, Dispatch, EffectLog, EmoteEvent, EmoteOutcome,
    EmoteStage, EventBus, LifeStateChanged, MeleeHit, Notification, ReactionBranch, RngSource,
    Services, StaticProfileRegistry,
};
use jester_types::{ActorId, Capability, EmoteKey, LifeState, LocationId};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::JesterConfig;
use crate::error::EngineError;
use crate::listeners::{BodyEmotes, VocalEmotes};

/// Emotes the script picks from.
const SCRIPT_EMOTES: [&str; 5] = ["Laugh", "Scream", "Giggle", "Clap", "Snap"];

/// Tallies from one encounter run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncounterSummary {
    /// Rounds played.
    pub rounds: u32,
    /// Rounds the beast spent critical.
    pub downed_rounds: u32,
    /// Emotes performed by the beast.
    pub beast_emotes: u32,
    /// Beast emotes with a matching profile sound.
    pub matched_sounds: u32,
    /// Giggle reactions.
    pub giggles: u32,
    /// Knock reactions.
    pub knocks: u32,
    /// Emotes handled by a downstream listener.
    pub downstream_handled: u32,
    /// Melee swings by the beast.
    pub swings: u32,
    /// Bystanders carrying the transformed marker at the end.
    pub transformed: usize,
    /// Whether a companion was spawned next to the beast.
    pub companion_spawned: bool,
}

impl EncounterSummary {
    /// Fraction of beast emotes that ended in a giggle.
    pub fn giggle_rate(&self) -> Option<Decimal> {
        Decimal::from(self.giggles).checked_div(Decimal::from(self.beast_emotes))
    }
}

/// Live state of a running encounter.
#[derive(Debug)]
pub struct Encounter {
    actors: ActorTable,
    registry: StaticProfileRegistry,
    random: RngSource<SmallRng>,
    effects: EffectLog,
    bus: EventBus,
    script: SmallRng,
    beast: ActorId,
    bystanders: Vec<ActorId>,
    summary: EncounterSummary,
}

impl Encounter {
    /// Build the world described by `config` and wire the beast in.
    pub fn new(config: &JesterConfig) -> Result<Self, EngineError> {
        let profile = config.beast_profile()?;

        let mut actors = ActorTable::new();
        let location = LocationId::new();
        let beast = actors.insert(location, []);
        let bystanders = (0..config.world.bystanders)
            .map(|_| actors.insert(location, [Capability::HumanoidAppearance]))
            .collect();

        let mut bus = EventBus::new();
        bus.register(beast, profile)?;
        bus.add_listener(EmoteStage::Vocal, Box::new(VocalEmotes::humanoid()));
        bus.add_listener(EmoteStage::BodyEmotes, Box::new(BodyEmotes::standard()));

        let seed = config.world.seed;
        Ok(Self {
            actors,
            registry: config.registry(),
            random: RngSource::new(SmallRng::seed_from_u64(seed.wrapping_add(1))),
            effects: EffectLog::new(),
            bus,
            script: SmallRng::seed_from_u64(seed),
            beast,
            bystanders,
            summary: EncounterSummary::default(),
        })
    }

    /// The beast's actor ID.
    pub const fn beast(&self) -> ActorId {
        self.beast
    }

    /// The actor table.
    pub const fn actors(&self) -> &ActorTable {
        &self.actors
    }

    /// Spawn the beast and play `rounds` rounds.
    pub fn run(mut self, rounds: u32, downed_every: u32) -> EncounterSummary {
        let beast = self.beast;
        if let Dispatch::Spawned { companion } =
            self.dispatch(Notification::Spawned(ActorSpawned { actor: beast }))
        {
            self.summary.companion_spawned = companion.is_some();
        }
        self.transition(LifeState::Alive);

        for round in 1..=rounds {
            let downed = round.checked_rem(downed_every) == Some(0);
            debug!(round, downed, "Round start");
            if downed {
                self.downed_round();
            } else {
                self.regular_round();
            }
            self.summary.rounds = round;
        }

        self.summary.transformed = self
            .bystanders
            .iter()
            .filter(|actor| self.actors.has(**actor, Capability::Transformed))
            .count();
        self.summary
    }

    fn regular_round(&mut self) {
        self.beast_emote();

        if let Some(bystander) = self.pick_bystander() {
            let emote = self.pick_emote();
            self.emote(bystander, emote);
        }

        let hit: Vec<ActorId> = self
            .bystanders
            .clone()
            .into_iter()
            .filter(|_| self.script.random_bool(0.5))
            .collect();
        let attacker = self.beast;
        let result = self.dispatch(Notification::MeleeHit(MeleeHit { attacker, hit }));
        self.summary.swings = self.summary.swings.saturating_add(1);
        if let Dispatch::MeleeHit { marked } = result
            && !marked.is_empty()
        {
            info!(count = marked.len(), "Bystanders transformed");
        }
    }

    fn downed_round(&mut self) {
        self.transition(LifeState::Critical);
        self.summary.downed_rounds = self.summary.downed_rounds.saturating_add(1);
        self.beast_emote();
        self.transition(LifeState::Alive);
    }

    fn beast_emote(&mut self) {
        let emote = self.pick_emote();
        let beast = self.beast;
        let result = self.emote(beast, emote);
        self.summary.beast_emotes = self.summary.beast_emotes.saturating_add(1);

        let Dispatch::Emote {
            beast: Some(EmoteOutcome::Reacted {
                matched_sound,
                branch,
            }),
            ..
        } = result
        else {
            return;
        };
        if matched_sound {
            self.summary.matched_sounds = self.summary.matched_sounds.saturating_add(1);
        }
        match branch {
            Some(ReactionBranch::Giggle) => {
                self.summary.giggles = self.summary.giggles.saturating_add(1);
            }
            Some(ReactionBranch::Knock) => {
                self.summary.knocks = self.summary.knocks.saturating_add(1);
            }
            None => {}
        }
    }

    fn emote(&mut self, actor: ActorId, emote: EmoteKey) -> Dispatch {
        let result = self.dispatch(Notification::Emote(EmoteEvent::new(actor, emote)));
        if let Dispatch::Emote {
            listeners, handled, ..
        } = result
            && handled
            && listeners > 0
        {
            self.summary.downstream_handled = self.summary.downstream_handled.saturating_add(1);
        }
        result
    }

    fn transition(&mut self, new_state: LifeState) {
        let actor = self.beast;
        let Some(old_state) = self.actors.set_life_state(actor, new_state) else {
            warn!(%actor, "Beast missing from actor table");
            return;
        };
        debug!(%actor, %old_state, %new_state, "Life state changed");
        self.dispatch(Notification::LifeStateChanged(LifeStateChanged {
            actor,
            old_state,
            new_state,
        }));
    }

    fn pick_emote(&mut self) -> EmoteKey {
        let idx = self.script.random_range(0..SCRIPT_EMOTES.len());
        EmoteKey::from(SCRIPT_EMOTES.get(idx).copied().unwrap_or("Laugh"))
    }

    fn pick_bystander(&mut self) -> Option<ActorId> {
        if self.bystanders.is_empty() {
            return None;
        }
        let idx = self.script.random_range(0..self.bystanders.len());
        self.bystanders.get(idx).copied()
    }

    fn dispatch(&mut self, notification: Notification) -> Dispatch {
        let mut services = Services {
            actors: &mut self.actors,
            registry: &self.registry,
            random: &mut self.random,
            effects: &mut self.effects,
        };
        self.bus.dispatch(notification, &mut services)
    }
}

/// Run the encounter described by `config`.
pub fn run_encounter(config: &JesterConfig) -> Result<EncounterSummary, EngineError> {
    let encounter = Encounter::new(config)?;
    info!(
        beast = %encounter.beast(),
        actors = encounter.actors().len(),
        rounds = config.world.rounds,
        "Encounter starting"
    );
    Ok(encounter.run(config.world.rounds, config.world.downed_every))
}
