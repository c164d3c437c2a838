//! Life-state transitions.
//!
//! Auto-emote and stealth-on-move are present exactly while the beast is
//! alive. Both are toggled together on every transition, so repeating the
//! same transition changes nothing.

use jester_types::{Capability, LifeState};
use tracing::debug;

use super::{BeastController, Services, grant_auto_emote};

impl BeastController {
    /// React to the beast entering `new_state`.
    pub fn on_life_state_changed(&self, new_state: LifeState, services: &mut Services<'_>) {
        let actor = self.actor;
        if new_state.is_alive() {
            grant_auto_emote(services.actors, actor);
            services.actors.ensure(actor, Capability::StealthOnMove);
            debug!(%actor, %new_state, "Beast behaviors granted");
        } else {
            services.actors.remove(actor, Capability::AutoEmote);
            services.actors.remove(actor, Capability::StealthOnMove);
            debug!(%actor, %new_state, "Beast behaviors removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use jester_types::EmoteKey;

    use super::*;
    use crate::controller::GIGGLE_TRIGGER;
    use crate::controller::test_support::{Fixture, profile};
    use crate::profile::Probability;
    use crate::store::ActorStore;

    fn controller(fx: &Fixture) -> BeastController {
        BeastController::new(
            fx.beast,
            profile(Probability::NEVER, Probability::NEVER, Probability::NEVER),
        )
    }

    fn has_both(fx: &Fixture) -> (bool, bool) {
        (
            fx.actors.has(fx.beast, Capability::AutoEmote),
            fx.actors.has(fx.beast, Capability::StealthOnMove),
        )
    }

    #[test]
    fn dead_and_critical_remove_both() {
        for state in [LifeState::Dead, LifeState::Critical] {
            let mut fx = Fixture::new();
            let beast = controller(&fx);
            beast.on_life_state_changed(LifeState::Alive, &mut fx.services());
            assert_eq!(has_both(&fx), (true, true));

            beast.on_life_state_changed(state, &mut fx.services());
            assert_eq!(has_both(&fx), (false, false), "after {state}");
        }
    }

    #[test]
    fn alive_grants_both_and_registers_giggle() {
        let mut fx = Fixture::new();
        let beast = controller(&fx);
        beast.on_life_state_changed(LifeState::Alive, &mut fx.services());
        assert_eq!(has_both(&fx), (true, true));
        assert_eq!(
            fx.actors.auto_emotes(fx.beast),
            vec![EmoteKey::from(GIGGLE_TRIGGER)]
        );
    }

    #[test]
    fn repeated_transitions_are_idempotent() {
        let mut fx = Fixture::new();
        let beast = controller(&fx);
        beast.on_life_state_changed(LifeState::Alive, &mut fx.services());
        let once = fx.actors.get(fx.beast).cloned();
        beast.on_life_state_changed(LifeState::Alive, &mut fx.services());
        assert_eq!(fx.actors.get(fx.beast).cloned(), once);

        beast.on_life_state_changed(LifeState::Dead, &mut fx.services());
        beast.on_life_state_changed(LifeState::Dead, &mut fx.services());
        assert_eq!(has_both(&fx), (false, false));
    }

    #[test]
    fn lifecycle_never_touches_clumsy() {
        let mut fx = Fixture::new();
        fx.actors.ensure(fx.beast, Capability::Clumsy);
        let beast = controller(&fx);
        beast.on_life_state_changed(LifeState::Dead, &mut fx.services());
        beast.on_life_state_changed(LifeState::Alive, &mut fx.services());
        assert!(fx.actors.has(fx.beast, Capability::Clumsy));
        assert!(fx.effects.effects().is_empty());
    }
}
