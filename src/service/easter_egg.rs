//! Canned joke replies that take precedence over normal command handling.

use std::sync::Arc;

use crate::{
    error::config::ConfigError,
    model::command::Author,
    service::{drop_table::DropTable, random::RandomSource},
};

/// Role names (lowercase) that count as moderators for the mod roll joke.
const MOD_ROLES: &[&str] = &[
    "mod team",
    "mod +",
    "moderator",
    "officer",
    "commander",
    "brigadier",
    "deputy owner",
    "leader",
];

const BLUE_LIGHT: &str = "<a:blue_light:760254835202850839>";
const RED_LIGHT: &str = "<a:red_light:760254836016676894>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModResponse {
    NoPower,
    ModAbuse,
    Overflow,
}

impl ModResponse {
    fn render(self, mention: &str) -> String {
        match self {
            Self::NoPower => format!("Ha ha ha ha ha ha. You have no power here {mention}."),
            Self::ModAbuse => format!(
                "{BLUE_LIGHT} {RED_LIGHT} MOD ABUSE MOD ABUSE {BLUE_LIGHT} {RED_LIGHT}\n\n({mention})"
            ),
            Self::Overflow => format!(
                "Sure, why not. You're such a good mod, you can have a free roll.\n\n\
                 **Roll #1**: Congratulations, you win 1,000,000,000 gold. Incredible!\n\n\
                 **Roll #2**: Congratulations, you win 1,000,000,000 gold. Wow!\n\n\
                 **Roll #3**: Congratulations, you win 147,483,647 gold. Amazing!\n\n\
                 **Roll #4** Congratulations, you win 1 gold. Outstanding!\n\n\
                 Total winnings: -2,147,483,648 gold. Please report to the Corrupted Gauntlet immediately to repay your debt {mention}."
            ),
        }
    }
}

/// What an easter egg may look at besides the message text.
pub struct EasterEggContext<'a> {
    pub author: &'a Author,
    pub is_admin: bool,
    /// Whether the giveaway is enabled in the channel the message was sent in.
    pub giveaway_enabled: bool,
}

pub struct EasterEggs {
    mod_responses: DropTable<ModResponse>,
    rng: Arc<dyn RandomSource>,
}

impl EasterEggs {
    pub fn new(rng: Arc<dyn RandomSource>) -> Result<Self, ConfigError> {
        let mod_responses = DropTable::from_outcomes(vec![
            (0.6, ModResponse::NoPower),
            (0.2, ModResponse::ModAbuse),
            (0.2, ModResponse::Overflow),
        ])?;

        Ok(Self { mod_responses, rng })
    }

    /// Returns a joke reply if the message triggers one.
    pub fn respond(&self, content: &str, context: &EasterEggContext<'_>) -> Option<String> {
        let content = content.to_lowercase();
        let mention = &context.author.mention;

        if content.starts_with("!make me a sandwich") {
            Some("What? Make it yourself.".to_string())
        } else if content.starts_with("!sudo make me a sandwich") {
            Some("Okay.".to_string())
        } else if content == "!sudo" || content.starts_with("!sudo ") {
            Some(format!(
                "{mention} is not in the sudoers file. This incident will be reported."
            ))
        } else if context.giveaway_enabled && is_special_mod_roll(&content) {
            Some(self.mod_roll(context))
        } else if content == "!ban" || content.starts_with("!ban ") {
            Some(format!("Instructions unclear. {mention} is now banned."))
        } else if content == "!reroll" || content.starts_with("!reroll ") {
            Some("Haha no.".to_string())
        } else {
            None
        }
    }

    fn mod_roll(&self, context: &EasterEggContext<'_>) -> String {
        let mention = &context.author.mention;

        if !is_mod(context) {
            return format!(
                "Hello. My name is Inigo Montoya. You are not authorized to use that command. Prepare to die.\n\n({mention})"
            );
        }

        self.mod_responses
            .roll(self.rng.as_ref())
            .render(mention)
    }
}

/// A giveaway request asking for special treatment, e.g. "!roll mod edition".
fn is_special_mod_roll(content: &str) -> bool {
    let giveawayish = ["roll", "participate", "giveaway", "gimmegimmegimme"]
        .iter()
        .any(|word| content.contains(word));
    let special = ["mod", "special", "admin"]
        .iter()
        .any(|word| content.contains(word));

    giveawayish && special
}

fn is_mod(context: &EasterEggContext<'_>) -> bool {
    context.is_admin
        || context
            .author
            .role_names
            .iter()
            .any(|role| MOD_ROLES.contains(&role.to_lowercase().as_str()))
}
