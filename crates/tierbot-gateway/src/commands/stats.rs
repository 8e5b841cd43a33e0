//! `/stats`

use serenity::all::{CommandInteraction, Context, CreateEmbed};
use tierbot_common::AppResult;
use tierbot_service::StatsService;

use crate::embeds;
use crate::events::snowflake;
use crate::server::BotState;

/// Show the invoker's progress; never changes roles
pub async fn run(
    _ctx: &Context,
    command: &CommandInteraction,
    state: &BotState,
) -> AppResult<CreateEmbed> {
    let user = &command.user;
    let report = StatsService::new(state.service_context())
        .report(snowflake(user.id))
        .await;

    Ok(embeds::stats(
        &report,
        &user.tag(),
        &user.face(),
        state.track_emoji_display(),
    ))
}
