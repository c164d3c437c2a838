//! Spreading the transformation marker through melee hits.

use jester_types::{ActorId, Capability};
use tracing::debug;

use super::{BeastController, Services};
use crate::events::MeleeHit;

impl BeastController {
    /// Roll the infection chance for every eligible actor the beast struck.
    ///
    /// An actor is eligible when it has a humanoid appearance and is not
    /// dead. Each eligible actor gets its own roll. The marker is only ever
    /// added, never removed. Returns the actors newly marked by this hit.
    pub fn on_melee_hit(&self, hit: &MeleeHit, services: &mut Services<'_>) -> Vec<ActorId> {
        let mut marked = Vec::new();
        for &target in &hit.hit {
            if !is_eligible(target, services) {
                continue;
            }
            if services.random.bernoulli(self.profile.infection_chance)
                && services.actors.ensure(target, Capability::Transformed)
            {
                debug!(beast = %self.actor, %target, "Marked actor as transformed");
                marked.push(target);
            }
        }
        marked
    }
}

fn is_eligible(target: ActorId, services: &Services<'_>) -> bool {
    services.actors.has(target, Capability::HumanoidAppearance)
        && services
            .actors
            .life_state(target)
            .is_some_and(|state| !state.is_dead())
}
