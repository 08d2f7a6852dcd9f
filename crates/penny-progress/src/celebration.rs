//! Celebration messages shown when the user claims a milestone.
//!
//! This is the only randomized part of the crate. It is never called from
//! `calculate_progress`; the frontend invokes it on a claim event.

use crate::catalog::{find_definition, Category};
use rand::seq::SliceRandom;
use rand::Rng;

const ONBOARDING: &[&str] = &[
    "{title}! Penny just got a little smarter about your money.",
    "Setup step done: {title}. Off to a great start!",
    "{title} complete. Every journey starts somewhere.",
];

const DATA: &[&str] = &[
    "{title}! More data, sharper insights.",
    "Your history grows: {title} unlocked.",
    "{title}. Penny is crunching the numbers already.",
];

const ANALYSIS: &[&str] = &[
    "{title}! You are reading your finances like a pro.",
    "Analysis unlocked: {title}. Patterns are starting to show.",
    "{title}. Plans meet reality, and you are in charge.",
];

const MASTERY: &[&str] = &[
    "{title}! This is what mastery looks like.",
    "Legendary move: {title}.",
    "{title}. Penny bows to your financial wisdom.",
];

const TOOLS: &[&str] = &[
    "{title}! You know your way around the toolbox.",
    "Tool time: {title} unlocked.",
    "{title}. Efficient and precise.",
];

const LONGTERM: &[&str] = &[
    "{title}! Consistency pays off.",
    "Time in the market, time in the ledger: {title}.",
    "{title}. Your future self says thanks.",
];

const GENERIC: &[&str] = &[
    "Milestone reached! Keep it up.",
    "Nice work, another step forward.",
];

/// Message templates for a category. `{title}` is replaced by the milestone title.
pub fn celebration_messages(category: Category) -> &'static [&'static str] {
    match category {
        Category::Onboarding => ONBOARDING,
        Category::Data => DATA,
        Category::Analysis => ANALYSIS,
        Category::Mastery => MASTERY,
        Category::Tools => TOOLS,
        Category::Longterm => LONGTERM,
    }
}

/// Random celebration message for a milestone id
pub fn random_celebration_message(milestone_id: &str) -> String {
    random_celebration_message_with(milestone_id, &mut rand::thread_rng())
}

/// Same as `random_celebration_message` with a caller-provided RNG
pub fn random_celebration_message_with<R: Rng + ?Sized>(milestone_id: &str, rng: &mut R) -> String {
    match find_definition(milestone_id) {
        Some(def) => {
            let template = celebration_messages(def.category)
                .choose(rng)
                .copied()
                .unwrap_or(GENERIC[0]);
            template.replace("{title}", def.title)
        }
        None => GENERIC.choose(rng).copied().unwrap_or(GENERIC[0]).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MilestoneId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_message_mentions_title() {
        for id in MilestoneId::ALL {
            let def = id.definition();
            let msg = random_celebration_message(def.id);
            assert!(msg.contains(def.title), "{} -> {}", def.id, msg);
            assert!(!msg.contains("{title}"));
        }
    }

    #[test]
    fn test_unknown_id_uses_generic() {
        let msg = random_celebration_message("mystery");
        assert!(GENERIC.contains(&msg.as_str()));
    }

    #[test]
    fn test_seeded_rng_is_repeatable() {
        let a = random_celebration_message_with("month_12", &mut StdRng::seed_from_u64(7));
        let b = random_celebration_message_with("month_12", &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_template_has_placeholder() {
        for category in Category::ALL {
            for template in celebration_messages(*category) {
                assert!(template.contains("{title}"), "{}", template);
            }
        }
    }
}
