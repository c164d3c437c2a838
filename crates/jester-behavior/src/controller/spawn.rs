//! One-time setup when a beast is created.

use jester_types::{ActorId, Capability};
use tracing::{debug, warn};

use super::{BeastController, Services, grant_auto_emote};

impl BeastController {
    /// Initialize the beast.
    ///
    /// A profile without an emote sound profile gets no setup at all: no
    /// capabilities and no companion. Otherwise the sounds are resolved
    /// (a miss leaves them unset), auto-emote and clumsy are granted, and
    /// the companion is spawned where the beast stands.
    ///
    /// Setup runs once per controller; repeated notifications are ignored.
    ///
    /// Returns the companion's ID when one was spawned.
    pub fn on_spawned(&mut self, services: &mut Services<'_>) -> Option<ActorId> {
        let actor = self.actor;
        if self.spawned {
            debug!(%actor, "Beast already initialized, ignoring spawn");
            return None;
        }
        self.spawned = true;

        let Some(profile_id) = self.profile.emote_profile.as_ref() else {
            debug!(%actor, "Beast has no emote profile, skipping setup");
            return None;
        };

        self.emote_sounds = services.registry.lookup(profile_id);
        if self.emote_sounds.is_none() {
            debug!(%actor, %profile_id, "Emote profile not found");
        }

        grant_auto_emote(services.actors, actor);
        services.actors.ensure(actor, Capability::Clumsy);

        let Some(location) = services.actors.location(actor) else {
            warn!(%actor, "Beast has no location, companion not spawned");
            return None;
        };
        let companion = services
            .effects
            .spawn_actor(&self.profile.companion_spawn, location);
        debug!(%actor, %companion, %location, "Beast initialized");
        Some(companion)
    }
}

#[cfg(test)]
mod tests {
    use jester_types::{EmoteKey, ProfileId};

    use super::*;
    use crate::controller::GIGGLE_TRIGGER;
    use crate::controller::test_support::{Fixture, profile};
    use crate::effects::Effect;
    use crate::profile::Probability;
    use crate::store::ActorStore;

    fn beast(fx: &Fixture, emote_profile: Option<&str>) -> BeastController {
        let mut profile = profile(Probability::NEVER, Probability::NEVER, Probability::NEVER);
        profile.emote_profile = emote_profile.map(ProfileId::from);
        BeastController::new(fx.beast, profile)
    }

    #[test]
    fn full_setup_with_known_profile() {
        let mut fx = Fixture::new();
        let mut controller = beast(&fx, Some("BeastEmotes"));
        let companion = controller.on_spawned(&mut fx.services());

        assert!(companion.is_some());
        assert!(controller.emote_sounds().is_some());
        assert!(fx.actors.has(fx.beast, Capability::AutoEmote));
        assert!(fx.actors.has(fx.beast, Capability::Clumsy));
        assert!(!fx.actors.has(fx.beast, Capability::StealthOnMove));
        assert_eq!(
            fx.actors.auto_emotes(fx.beast),
            vec![EmoteKey::from(GIGGLE_TRIGGER)]
        );
        assert!(matches!(
            fx.effects.effects(),
            [Effect::Spawned { location, .. }] if *location == fx.location
        ));
    }

    #[test]
    fn missing_profile_id_skips_everything() {
        let mut fx = Fixture::new();
        let mut controller = beast(&fx, None);
        assert_eq!(controller.on_spawned(&mut fx.services()), None);

        assert!(controller.emote_sounds().is_none());
        assert!(!fx.actors.has(fx.beast, Capability::AutoEmote));
        assert!(!fx.actors.has(fx.beast, Capability::Clumsy));
        assert!(fx.effects.effects().is_empty());
    }

    #[test]
    fn lookup_miss_still_grants_and_spawns() {
        let mut fx = Fixture::new();
        let mut controller = beast(&fx, Some("NoSuchProfile"));
        let companion = controller.on_spawned(&mut fx.services());

        assert!(companion.is_some());
        assert!(controller.emote_sounds().is_none());
        assert!(fx.actors.has(fx.beast, Capability::AutoEmote));
        assert!(fx.actors.has(fx.beast, Capability::Clumsy));
    }

    #[test]
    fn second_spawn_is_ignored() {
        let mut fx = Fixture::new();
        let mut controller = beast(&fx, Some("BeastEmotes"));
        assert!(controller.on_spawned(&mut fx.services()).is_some());
        assert!(controller.is_spawned());

        assert_eq!(controller.on_spawned(&mut fx.services()), None);
        let companions = fx
            .effects
            .effects()
            .iter()
            .filter(|effect| matches!(effect, Effect::Spawned { .. }))
            .count();
        assert_eq!(companions, 1);
    }

    #[test]
    fn companion_skipped_without_location() {
        let mut fx = Fixture::new();
        let mut profile = profile(Probability::NEVER, Probability::NEVER, Probability::NEVER);
        profile.emote_profile = Some(ProfileId::from("BeastEmotes"));
        let mut controller = BeastController::new(ActorId::new(), profile);

        assert_eq!(controller.on_spawned(&mut fx.services()), None);
        assert!(fx.effects.effects().is_empty());
    }
}
