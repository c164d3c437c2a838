//! Downstream emote listeners for ordinary actors.
//!
//! These stand in for the generic voice and body emote systems. They run
//! after the beast controller and only see emotes it did not handle.

use jester_behavior::{EmoteEvent, EmoteListener, Services};
use jester_types::{Capability, EmoteKey, SoundId};
use tracing::trace;

/// Plays a voice sound for humanoid vocal emotes.
#[derive(Debug, Clone)]
pub struct VocalEmotes {
    sounds: Vec<(EmoteKey, SoundId)>,
}

impl VocalEmotes {
    /// Generic humanoid voice set.
    pub fn humanoid() -> Self {
        Self {
            sounds: vec![
                (EmoteKey::from("Laugh"), SoundId::from("/Audio/Voice/Human/laugh.ogg")),
                (EmoteKey::from("Scream"), SoundId::from("/Audio/Voice/Human/scream.ogg")),
            ],
        }
    }
}

impl EmoteListener for VocalEmotes {
    fn name(&self) -> &str {
        "vocal"
    }

    fn handle(&mut self, event: &mut EmoteEvent, services: &mut Services<'_>) {
        if !services
            .actors
            .has(event.actor, Capability::HumanoidAppearance)
        {
            return;
        }
        let Some((_, sound)) = self.sounds.iter().find(|(key, _)| *key == event.emote) else {
            return;
        };
        trace!(actor = %event.actor, emote = %event.emote, "Vocal emote");
        services.effects.play_sound_at(sound, event.actor);
        event.handled = true;
    }
}

/// Plays body sounds (claps, snaps) for any actor.
#[derive(Debug, Clone)]
pub struct BodyEmotes {
    sounds: Vec<(EmoteKey, SoundId)>,
}

impl BodyEmotes {
    /// Default body sound set.
    pub fn standard() -> Self {
        Self {
            sounds: vec![
                (EmoteKey::from("Clap"), SoundId::from("/Audio/Effects/clap.ogg")),
                (EmoteKey::from("Snap"), SoundId::from("/Audio/Effects/snap.ogg")),
            ],
        }
    }
}

impl EmoteListener for BodyEmotes {
    fn name(&self) -> &str {
        "body"
    }

    fn handle(&mut self, event: &mut EmoteEvent, services: &mut Services<'_>) {
        let Some((_, sound)) = self.sounds.iter().find(|(key, _)| *key == event.emote) else {
            return;
        };
        trace!(actor = %event.actor, emote = %event.emote, "Body emote");
        services.effects.play_sound_at(sound, event.actor);
        event.handled = true;
    }
}

#[cfg(test)]
mod tests {
    use jester_behavior::{ActorTable, EffectLog, RngSource, StaticProfileRegistry};
    use jester_types::LocationId;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    struct World {
        actors: ActorTable,
        registry: StaticProfileRegistry,
        random: RngSource<SmallRng>,
        effects: EffectLog,
    }

    impl World {
        fn new() -> Self {
            Self {
                actors: ActorTable::new(),
                registry: StaticProfileRegistry::default(),
                random: RngSource::new(SmallRng::seed_from_u64(3)),
                effects: EffectLog::new(),
            }
        }

        fn handle(&mut self, listener: &mut dyn EmoteListener, event: &mut EmoteEvent) {
            let mut services = Services {
                actors: &mut self.actors,
                registry: &self.registry,
                random: &mut self.random,
                effects: &mut self.effects,
            };
            listener.handle(event, &mut services);
        }
    }

    #[test]
    fn vocal_only_voices_humanoids() {
        let mut world = World::new();
        let location = LocationId::new();
        let human = world.actors.insert(location, [Capability::HumanoidAppearance]);
        let beast = world.actors.insert(location, []);
        let mut vocal = VocalEmotes::humanoid();

        let mut event = EmoteEvent::new(beast, EmoteKey::from("Scream"));
        world.handle(&mut vocal, &mut event);
        assert!(!event.handled);
        assert!(world.effects.sounds().is_empty());

        let mut event = EmoteEvent::new(human, EmoteKey::from("Scream"));
        world.handle(&mut vocal, &mut event);
        assert!(event.handled);
        assert_eq!(
            world.effects.sounds(),
            vec![&SoundId::from("/Audio/Voice/Human/scream.ogg")]
        );
    }

    #[test]
    fn body_ignores_unknown_emotes() {
        let mut world = World::new();
        let actor = world.actors.insert(LocationId::new(), []);
        let mut body = BodyEmotes::standard();

        let mut event = EmoteEvent::new(actor, EmoteKey::from("Laugh"));
        world.handle(&mut body, &mut event);
        assert!(!event.handled);

        let mut event = EmoteEvent::new(actor, EmoteKey::from("Clap"));
        world.handle(&mut body, &mut event);
        assert!(event.handled);
        assert_eq!(world.effects.sounds().len(), 1);
    }
}
