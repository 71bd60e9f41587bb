//! `!diceroll` / `!roll MIN-MAX`.

use std::sync::Arc;

use serenity::async_trait;

use crate::{
    model::command::{CommandRequest, CommandResult},
    service::{command::Command, random::RandomSource},
};

const DEFAULT_MIN: u64 = 1;
const DEFAULT_MAX: u64 = 20;

pub const USAGE: &str = "Usage: `!roll` or `!roll MIN-MAX`.";
pub const REVERSED_BOUNDS: &str =
    "You've gotta ask yourself one question: \"Do I feel lucky?\". Well do ya, punk?";

/// Rolls a uniform integer between two inclusive bounds.
pub struct DiceRollCommand {
    rng: Arc<dyn RandomSource>,
}

impl DiceRollCommand {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }
}

/// Parses `MIN-MAX` where both bounds are plain decimal digits.
fn parse_bounds(arg: &str) -> Option<(u64, u64)> {
    let (min, max) = arg.split_once('-')?;
    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_number(min) || !is_number(max) {
        return None;
    }

    Some((min.parse().ok()?, max.parse().ok()?))
}

#[async_trait]
impl Command for DiceRollCommand {
    async fn execute(&self, request: &CommandRequest) -> CommandResult {
        let (min, max) = match request.argv.as_slice() {
            [_] => (DEFAULT_MIN, DEFAULT_MAX),
            [_, bounds] => match parse_bounds(bounds) {
                Some(bounds) => bounds,
                None => return CommandResult::invalid_argument(USAGE),
            },
            _ => return CommandResult::invalid_argument(USAGE),
        };

        if min > max {
            return CommandResult::invalid_argument(REVERSED_BOUNDS);
        }

        let roll = self.rng.next_in_range(min, max);

        CommandResult::ok(format!(
            "{} is rolling between {min} and {max} and gets: **{roll}**",
            request.author.mention
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::command::CommandStatus,
        service::{command::test::request, random::ScriptedRandom},
    };

    fn command(values: &[f64]) -> DiceRollCommand {
        DiceRollCommand::new(Arc::new(ScriptedRandom::new(values.iter().copied())))
    }

    #[tokio::test]
    async fn rolls_one_to_twenty_by_default() {
        let result = command(&[0.999]).execute(&request("!roll")).await;

        assert_eq!(result.status, CommandStatus::Ok);
        assert_eq!(
            result.response,
            "<@42> is rolling between 1 and 20 and gets: **20**"
        );
    }

    #[tokio::test]
    async fn rolls_within_requested_bounds() {
        let result = command(&[0.0]).execute(&request("!roll 5-10")).await;

        assert_eq!(
            result.response,
            "<@42> is rolling between 5 and 10 and gets: **5**"
        );
    }

    #[tokio::test]
    async fn equal_bounds_are_allowed() {
        let result = command(&[0.5]).execute(&request("!diceroll 7-7")).await;

        assert!(result.response.ends_with("gets: **7**"));
    }

    #[tokio::test]
    async fn reversed_bounds_are_refused() {
        let result = command(&[]).execute(&request("!roll 10-5")).await;

        assert_eq!(result.status, CommandStatus::InvalidArgument);
        assert_eq!(result.response, REVERSED_BOUNDS);
    }

    #[tokio::test]
    async fn malformed_arguments_print_usage() {
        for content in ["!roll d20", "!roll -5-10", "!roll 1-", "!roll 1-2 3-4"] {
            let result = command(&[]).execute(&request(content)).await;

            assert_eq!(result.status, CommandStatus::InvalidArgument, "{content}");
            assert_eq!(result.response, USAGE);
        }
    }

    #[test]
    fn parses_bounds() {
        assert_eq!(parse_bounds("1-100"), Some((1, 100)));
        assert_eq!(parse_bounds("+1-100"), None);
        assert_eq!(parse_bounds("99999999999999999999999-1"), None);
    }
}
