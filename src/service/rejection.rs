//! Flavor text for users who already participated this month.

use crate::service::random::RandomSource;

/// Number of distinct rejection messages.
pub const REJECTION_VARIANTS: usize = 13;

/// What a rejection message may refer to.
#[derive(Debug, Clone)]
pub struct RejectionContext<'a> {
    /// Mention markup of the rejected user.
    pub mention: &'a str,
    /// Draw title, e.g. "giveaway".
    pub title: &'a str,
    /// Calendar days since the last participation, when known.
    pub days_since_last: Option<i64>,
}

/// Picks a rejection message uniformly at random.
pub fn random_rejection(context: &RejectionContext<'_>, rng: &dyn RandomSource) -> String {
    rejection(context, rng.next_index(REJECTION_VARIANTS) + 1)
}

/// Renders rejection message `choice` (1-based).
///
/// Out-of-range choices fall back to the first message.
pub fn rejection(context: &RejectionContext<'_>, choice: usize) -> String {
    let mention = context.mention;
    let title = context.title;
    let suffix = format!("You have already participated in this month's {title}");

    match choice {
        2 => format!(
            "Do not try and bend the spoon. That's impossible. Instead... only try to realize the truth.\n\nWhat truth?\n\nThat {} {mention}.",
            suffix.to_lowercase()
        ),
        3 => format!("Beep beep boop? :face_with_monocle:\n\n({suffix} {mention})"),
        4 => format!(
            "Toto, I've a feeling that {mention} has already participated in this month's {title}."
        ),
        5 => format!(
            "A strange game. The only winning move is not to play.\n\n({suffix} {mention})"
        ),
        6 => {
            let days = context.days_since_last.unwrap_or_else(|| {
                tracing::error!("Rejecting {} without a last participation time", mention);
                0
            });
            let unit = if days == 1 { "day" } else { "days" };
            format!("It's been ~~84 years~~ {days} {unit}.\n\n({suffix} {mention})")
        }
        7 => format!(
            "We've had one, yes. What about second dice roll?\n\n({suffix} {mention})"
        ),
        8 => format!("Ha ha ha ha ha ha. You have no power here.\n\n({suffix} {mention})"),
        9 => format!(
            "How can you do this? This is outrageous! It's unfair!\n\n({suffix} {mention})"
        ),
        10 => format!(
            "{mention}, stop trying to make ~~fetch~~ second dice roll happen. It's not going to happen.\n\n({suffix})"
        ),
        11 => format!(
            "Hello. My name is Inigo Montoya. {suffix}. Prepare to die.\n\n({mention})"
        ),
        12 => format!(
            "It's time for you to look inward, and start asking yourself the big questions. Who are you? And have you already participated in the {title} this month?\n\n(Yes, yes you have {mention})"
        ),
        13 => format!("That's rough buddy.\n\n({suffix} {mention})"),
        _ => {
            if choice != 1 {
                tracing::error!("Rejection choice {} out of range, using default", choice);
            }
            format!("I'm sorry {mention}, I'm afraid I can't do that.\n\n({suffix})")
        }
    }
}

/// Lists every rejection message, numbered, for previewing.
pub fn all_rejections(context: &RejectionContext<'_>) -> String {
    let mut text = String::from("All possible responses:");
    for choice in 1..=REJECTION_VARIANTS {
        text.push_str(&format!("\n\n{choice}: {}", rejection(context, choice)));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::random::ScriptedRandom;

    fn context(days_since_last: Option<i64>) -> RejectionContext<'static> {
        RejectionContext {
            mention: "<@42>",
            title: "giveaway",
            days_since_last,
        }
    }

    #[test]
    fn every_variant_mentions_the_user() {
        let context = context(Some(3));

        for choice in 1..=REJECTION_VARIANTS {
            assert!(
                rejection(&context, choice).contains("<@42>"),
                "variant {choice} should mention the user"
            );
        }
    }

    #[test]
    fn variants_are_distinct() {
        let context = context(Some(3));
        let mut texts: Vec<String> = (1..=REJECTION_VARIANTS)
            .map(|choice| rejection(&context, choice))
            .collect();
        texts.sort();
        texts.dedup();

        assert_eq!(texts.len(), REJECTION_VARIANTS);
    }

    #[test]
    fn first_variant_is_the_default() {
        assert_eq!(
            rejection(&context(None), 1),
            "I'm sorry <@42>, I'm afraid I can't do that.\n\n(You have already participated in this month's giveaway)"
        );
        assert_eq!(rejection(&context(None), 99), rejection(&context(None), 1));
    }

    #[test]
    fn reports_days_since_last_participation() {
        assert_eq!(
            rejection(&context(Some(1)), 6),
            "It's been ~~84 years~~ 1 day.\n\n(You have already participated in this month's giveaway <@42>)"
        );
        assert!(rejection(&context(Some(12)), 6).contains("~~84 years~~ 12 days."));
    }

    #[test]
    fn uses_the_draw_title() {
        let context = RejectionContext {
            mention: "<@42>",
            title: "lottery",
            days_since_last: None,
        };

        assert!(rejection(&context, 4).ends_with("this month's lottery."));
    }

    #[test]
    fn random_choice_covers_first_and_last_variant() {
        let rng = ScriptedRandom::new([0.0, 0.999]);

        assert_eq!(random_rejection(&context(None), &rng), rejection(&context(None), 1));
        assert_eq!(random_rejection(&context(None), &rng), rejection(&context(None), 13));
    }

    #[test]
    fn lists_all_variants() {
        let text = all_rejections(&context(Some(2)));

        assert!(text.starts_with("All possible responses:\n\n1: I'm sorry"));
        assert!(text.contains("\n\n13: That's rough buddy."));
    }
}
