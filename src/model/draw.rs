//! Monthly draw configuration data.
//!
//! A draw (the giveaway, the lottery) is described entirely by data: its activity key,
//! number of rolls, prize catalog and weighted prize table. The built-in definitions below
//! are used unless the bot configuration file overrides them.

use serde::Deserialize;

/// Activity key of the monthly giveaway.
pub const GIVEAWAY_ACTIVITY: &str = "monthly_giveaway";
/// Activity key of the monthly lottery.
pub const LOTTERY_ACTIVITY: &str = "monthly_lottery";
/// Prize id representing an empty roll.
pub const NO_PRIZE: &str = "no_prize";

const NOOT_LIKE_THIS: &str = "<:nootLikeThis:748245017679888484>";
const NOT_LIKE_DUCK: &str = "<:notlikeduck:631902811579219973>";
const EVIL_KERMIT: &str = "<:evil_Kermit:626526532256661524>";
const DOG_DANCE: &str = "<a:dogdance:628401377508458516>";
const CRAB_RAVE: &str = "<a:crab_rave:628404069718949892>";

/// Serializable description of a monthly draw.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DrawSpec {
    /// Key under which participation is recorded.
    pub activity: String,
    /// Name shown to users, e.g. "giveaway".
    pub title: String,
    /// Number of table rolls per participation.
    pub rolls: usize,
    /// Prize id that means "nothing won".
    #[serde(default = "default_no_prize")]
    pub no_prize: String,
    /// Emojis appended to the last line when nothing at all was won.
    #[serde(default)]
    pub consolation_emojis: Vec<String>,
    /// User-facing description of each prize, in display order.
    pub prizes: Vec<PrizeSpec>,
    /// Weighted prize table.
    pub table: Vec<WeightedEntrySpec>,
}

/// Description of a single prize.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrizeSpec {
    pub id: String,
    pub description: String,
}

/// A weighted table entry: `{"weight": 0.95, "prize": "no_prize"}` or
/// `{"weight": 0.05, "table": [...]}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeightedEntrySpec {
    pub weight: f64,
    #[serde(flatten)]
    pub outcome: OutcomeSpec,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeSpec {
    Prize(String),
    Table(Vec<WeightedEntrySpec>),
}

fn default_no_prize() -> String {
    NO_PRIZE.to_string()
}

fn prize(weight: f64, id: &str) -> WeightedEntrySpec {
    WeightedEntrySpec {
        weight,
        outcome: OutcomeSpec::Prize(id.to_string()),
    }
}

fn table(weight: f64, entries: Vec<WeightedEntrySpec>) -> WeightedEntrySpec {
    WeightedEntrySpec {
        weight,
        outcome: OutcomeSpec::Table(entries),
    }
}

fn describe(id: &str, description: impl Into<String>) -> PrizeSpec {
    PrizeSpec {
        id: id.to_string(),
        description: description.into(),
    }
}

/// The monthly giveaway: 4 rolls at a 5% prize rate.
pub fn default_giveaway() -> DrawSpec {
    DrawSpec {
        activity: GIVEAWAY_ACTIVITY.to_string(),
        title: "giveaway".to_string(),
        rolls: 4,
        no_prize: NO_PRIZE.to_string(),
        consolation_emojis: vec![NOOT_LIKE_THIS.to_string(), NOT_LIKE_DUCK.to_string()],
        prizes: vec![
            describe("goodybag", "Congratulations, you win a goodybag draw! :partying_face:\n\n(Please DM a mod to claim.)"),
            describe("gp_2m", "Congratulations, you win 2M gold. Nice! :tada:\n\n(Please DM a mod to claim.)"),
            describe("gp_5m", format!("Congratulations, you win 5M gold. Very nice! {DOG_DANCE}\n\n(Please DM a mod to claim.)")),
            describe("gp_10m", format!("Congratulations, you win 10M gold. Incredible! {CRAB_RAVE}\n\n(Please DM a mod to claim.)")),
            describe("custom_rank", "Congratulations, you win a custom rank for a week :sunglasses:\n\n(Please DM a deputy owner+ to claim.)"),
            describe("custom_rank_plusplus", format!("Congratulations, you win a super-special custom rank for a week! It's just like the normal custom rank, but you also get to choose who receives it {EVIL_KERMIT}\n\n(Note: the recipient may opt-out, and you may choose yourself if you wish. Please DM a deputy owner+ to claim.)")),
        ],
        table: vec![
            prize(0.95, NO_PRIZE),
            table(
                0.05,
                vec![
                    prize(0.33, "goodybag"),
                    table(
                        0.33,
                        vec![prize(0.80, "gp_2m"), prize(0.18, "gp_5m"), prize(0.02, "gp_10m")],
                    ),
                    table(
                        0.34,
                        vec![prize(0.90, "custom_rank"), prize(0.10, "custom_rank_plusplus")],
                    ),
                ],
            ),
        ],
    }
}

/// The monthly lottery: 4 rolls at a 6.25% prize rate with a flat 30/30/30/10 split.
pub fn default_lottery() -> DrawSpec {
    DrawSpec {
        activity: LOTTERY_ACTIVITY.to_string(),
        title: "lottery".to_string(),
        rolls: 4,
        no_prize: NO_PRIZE.to_string(),
        consolation_emojis: Vec::new(),
        prizes: vec![
            describe("goodybag", "Congratulations, you win a goodybag draw!"),
            describe("gp_2m", "Congratulations, you win 2M gold. Nice!"),
            describe("custom_rank", "Congratulations, you win a custom rank for a week!"),
            describe("custom_rank_plusplus", format!("Congratulations, you win a super-special custom rank for a week! It's like the normal custom rank, but you may also choose who receives it {EVIL_KERMIT}\n\n(Note: the recipient is allowed to opt-out, and you can choose yourself.)")),
        ],
        table: vec![
            prize(0.9375, NO_PRIZE),
            table(
                0.0625,
                vec![
                    prize(0.3, "goodybag"),
                    prize(0.3, "gp_2m"),
                    prize(0.3, "custom_rank"),
                    prize(0.1, "custom_rank_plusplus"),
                ],
            ),
        ],
    }
}
