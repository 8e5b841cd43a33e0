//! `/checktier user?:`

use serenity::all::{CommandInteraction, Context, CreateEmbed};
use tierbot_common::{AppError, AppResult};
use tierbot_service::{TierCheckReport, TierService};

use super::user_option;
use crate::embeds;
use crate::events::snowflake;
use crate::server::BotState;

/// Force a reconciliation for the target (defaults to the invoker)
pub async fn run(
    _ctx: &Context,
    command: &CommandInteraction,
    state: &BotState,
) -> AppResult<CreateEmbed> {
    if command.guild_id != Some(state.guild_id()) {
        return Err(AppError::NotInGuild);
    }

    let options = command.data.options();
    let target = user_option(&options, "user").unwrap_or(&command.user);

    let outcome = TierService::new(state.service_context())
        .reconcile(snowflake(target.id))
        .await?;

    Ok(embeds::tier_check(
        &TierCheckReport::from(&outcome),
        &target.tag(),
        &target.face(),
        &command.user.tag(),
    ))
}
