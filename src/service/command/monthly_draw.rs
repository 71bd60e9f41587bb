//! Monthly draw command shared by the giveaway and the lottery.

use std::sync::Arc;

use serenity::async_trait;

use crate::{
    config::BotEnv,
    error::AppError,
    model::{
        command::{CommandRequest, CommandResult},
        participation::ParticipationKey,
    },
    service::{
        command::Command,
        draw::DrawDefinition,
        participation::{
            eligibility::days_between, ParticipationOutcome, ParticipationRequest,
            ParticipationService,
        },
        random::RandomSource,
        rejection::{all_rejections, random_rejection, RejectionContext},
    },
};

const PRINT_RESPONSES: &str = "--print_responses";
const PRINT_TABLE: &str = "--print_table";
const PRINT_PRIZES: &str = "--print_prizes";
const PRINT_NO_PRIZES: &str = "--print_no_prizes";
const FORCE: &str = "--force";

/// Lets each user participate once per calendar month in one draw.
///
/// Positional arguments are ignored so users can add a message ("!giveaway good luck all").
/// Flags are strict: anything starting with `--` that is not understood is rejected.
pub struct MonthlyDrawCommand {
    draw: Arc<DrawDefinition>,
    participation: ParticipationService,
    rng: Arc<dyn RandomSource>,
    env: BotEnv,
}

impl MonthlyDrawCommand {
    pub fn new(
        draw: Arc<DrawDefinition>,
        participation: ParticipationService,
        rng: Arc<dyn RandomSource>,
        env: BotEnv,
    ) -> Self {
        Self {
            draw,
            participation,
            rng,
            env,
        }
    }

    fn flag_denied(request: &CommandRequest) -> CommandResult {
        CommandResult::permission_denied(format!(
            "I'm sorry {}, I'm afraid I can't do that.\n\n(You are not authorized to use that flag.)",
            request.author.mention
        ))
    }

    fn key(&self, request: &CommandRequest) -> ParticipationKey {
        ParticipationKey::new(self.draw.activity(), request.author.id)
    }

    /// Handles the admin-only preview flags, if any is present.
    async fn preview(&self, request: &CommandRequest) -> Option<Result<CommandResult, AppError>> {
        let flag = [PRINT_RESPONSES, PRINT_TABLE, PRINT_PRIZES, PRINT_NO_PRIZES]
            .into_iter()
            .find(|flag| request.has_flag(flag))?;

        if !request.is_admin {
            return Some(Ok(Self::flag_denied(request)));
        }

        let result = match flag {
            PRINT_RESPONSES => {
                let last = match self.participation.last_participation(&self.key(request)).await {
                    Ok(last) => last,
                    Err(err) => return Some(Err(err)),
                };
                let days = last
                    .and_then(|last| days_between(last, request.timestamp_micros))
                    .unwrap_or(0);

                CommandResult::ok(all_rejections(&RejectionContext {
                    mention: &request.author.mention,
                    title: self.draw.title(),
                    days_since_last: Some(days),
                }))
            }
            PRINT_TABLE => CommandResult::ok(format!(
                "\n```\n{}\n```",
                self.draw.table().to_string().trim_end()
            )),
            PRINT_PRIZES => CommandResult::ok(
                self.draw
                    .render_prizes(&self.draw.all_prizes(), self.rng.as_ref()),
            ),
            _ => {
                let no_prizes = vec![self.draw.no_prize().to_string(); self.draw.rolls()];
                CommandResult::ok(self.draw.render_prizes(&no_prizes, self.rng.as_ref()))
            }
        };

        Some(Ok(result))
    }

    async fn participate(&self, request: &CommandRequest) -> Result<CommandResult, AppError> {
        if let Some(result) = self.preview(request).await {
            return result;
        }

        let mut force = false;
        for arg in request.argv.iter().skip(1) {
            if arg == FORCE {
                if self.env.is_prod() || !request.is_admin {
                    return Ok(Self::flag_denied(request));
                }
                force = true;
            } else if arg.starts_with("--") {
                return Ok(CommandResult::invalid_argument(format!(
                    "Unrecognized flag: {arg}"
                )));
            }
        }

        let header = self
            .draw
            .render_header(&request.author.mention, request.timestamp_micros)?;

        let outcome = self
            .participation
            .participate(
                ParticipationRequest {
                    key: self.key(request),
                    user_name: request.author.name.clone(),
                    now_micros: request.timestamp_micros,
                    is_admin: request.is_admin,
                    force,
                },
                || self.draw.roll_all(self.rng.as_ref()),
            )
            .await?;

        match outcome {
            ParticipationOutcome::Rejected {
                last_participation_micros,
            } => {
                let context = RejectionContext {
                    mention: &request.author.mention,
                    title: self.draw.title(),
                    days_since_last: days_between(
                        last_participation_micros,
                        request.timestamp_micros,
                    ),
                };

                Ok(CommandResult::permission_denied(random_rejection(
                    &context,
                    self.rng.as_ref(),
                )))
            }
            ParticipationOutcome::Participated { prizes, .. } => {
                tracing::info!(
                    "{} rolled {:?} in the {}",
                    request.author.name,
                    prizes,
                    self.draw.title()
                );

                Ok(CommandResult::ok(
                    header + &self.draw.render_prizes(&prizes, self.rng.as_ref()),
                ))
            }
        }
    }
}

#[async_trait]
impl Command for MonthlyDrawCommand {
    async fn execute(&self, request: &CommandRequest) -> CommandResult {
        self.participate(request)
            .await
            .unwrap_or_else(CommandResult::from)
    }
}
