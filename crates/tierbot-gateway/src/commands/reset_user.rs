//! `/resetuser user: amount?:`

use serenity::all::{CommandInteraction, Context, CreateEmbed};
use tierbot_common::{AppError, AppResult};
use tierbot_service::{ResetReport, TierService};
use tracing::info;

use super::{integer_option, parse_amount, user_option};
use crate::embeds;
use crate::events::snowflake;
use crate::server::BotState;

/// Clear all (or `amount` randomly chosen) reactions, then reconcile
pub async fn run(
    _ctx: &Context,
    command: &CommandInteraction,
    state: &BotState,
) -> AppResult<CreateEmbed> {
    if command.guild_id != Some(state.guild_id()) {
        return Err(AppError::NotInGuild);
    }

    let options = command.data.options();
    let target =
        user_option(&options, "user").ok_or_else(|| AppError::invalid_input("user is required"))?;
    let amount = parse_amount(integer_option(&options, "amount"))?;

    let (reset, outcome) = TierService::new(state.service_context())
        .reset_member(snowflake(target.id), amount)
        .await?;

    info!(
        user_id = %target.id,
        invoked_by = %command.user.id,
        removed = reset.removed,
        remaining = reset.remaining,
        "Reset requested"
    );

    Ok(embeds::reset(
        &ResetReport::new(reset, &outcome),
        &target.tag(),
        &command.user.tag(),
    ))
}
