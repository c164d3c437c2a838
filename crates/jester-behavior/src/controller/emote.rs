//! Emote reactions.
//!
//! On every unhandled emote the beast first tries its matched emote sound,
//! then rolls the reaction branches in order. Each branch is an independent
//! roll and the first success wins, so the fall branch only fires when the
//! honk roll failed: its effective chance is `(1 - giggle) * knock`.

use jester_types::ChatChannel;
use tracing::debug;

use super::{BeastController, Services};
use crate::effects::MessageOptions;
use crate::events::EmoteEvent;
use crate::profile::Probability;

/// Chat verb sent when the beast honks.
pub const HONK_VERB: &str = "honks";

/// Chat verb sent when the beast falls over.
pub const SPASM_VERB: &str = "spasms";

/// Which extra reaction fired after an emote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionBranch {
    /// Honk sound and "honks" message.
    Giggle,
    /// Fall sound, paralysis, and "spasms" message.
    Knock,
}

/// What the emote handler did with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmoteOutcome {
    /// An earlier handler had already handled the event.
    AlreadyHandled,
    /// The beast reacted.
    Reacted {
        /// Whether the emote sound profile had a sound for this emote.
        matched_sound: bool,
        /// The extra branch that fired, if any.
        branch: Option<ReactionBranch>,
    },
}

impl BeastController {
    /// React to the beast performing an emote.
    pub fn on_emote(&self, event: &mut EmoteEvent, services: &mut Services<'_>) -> EmoteOutcome {
        if event.handled {
            return EmoteOutcome::AlreadyHandled;
        }

        let actor = self.actor;
        let matched_sound = services.effects.try_play_matched_emote_sound(
            actor,
            self.emote_sounds.as_ref(),
            &event.emote,
        );
        if matched_sound {
            event.handled = true;
        }

        let branch = self.roll_branch(services);
        match branch {
            Some(ReactionBranch::Giggle) => {
                services.effects.play_sound_at(&self.profile.spawn_sound, actor);
                services.effects.send_expressive_message(
                    actor,
                    HONK_VERB,
                    ChatChannel::Emote,
                    MessageOptions::default(),
                );
            }
            Some(ReactionBranch::Knock) => {
                services.effects.play_sound_at(&self.profile.knock_sound, actor);
                services
                    .effects
                    .apply_incapacitation(actor, self.profile.paralyze_duration, true);
                services.effects.send_expressive_message(
                    actor,
                    SPASM_VERB,
                    ChatChannel::Emote,
                    MessageOptions::default(),
                );
            }
            None => {}
        }

        debug!(%actor, emote = %event.emote, matched_sound, ?branch, "Beast reacted to emote");
        EmoteOutcome::Reacted {
            matched_sound,
            branch,
        }
    }

    /// Roll the branches in order; the first success wins.
    fn roll_branch(&self, services: &mut Services<'_>) -> Option<ReactionBranch> {
        let branches: [(Probability, ReactionBranch); 2] = [
            (self.profile.giggle_chance, ReactionBranch::Giggle),
            (self.profile.knock_chance, ReactionBranch::Knock),
        ];
        branches
            .into_iter()
            .find(|(chance, _)| services.random.bernoulli(*chance))
            .map(|(_, branch)| branch)
    }
}
