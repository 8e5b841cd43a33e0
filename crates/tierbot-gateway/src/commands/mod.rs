//! Slash commands
//!
//! Definitions registered on the guild plus one executor per command. Each
//! executor returns the reply embed or an [`AppError`] which the interaction
//! handler turns into a failure embed.

mod check_tier;
mod reset_user;
mod start_reaction;
mod stats;

use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, Permissions, ResolvedOption,
    ResolvedValue, User,
};
use tierbot_common::{AppError, AppResult};
use tierbot_core::Snowflake;

pub use check_tier::run as check_tier;
pub use reset_user::run as reset_user;
pub use start_reaction::run as start_reaction;
pub use stats::run as stats;

pub const START_REACTION: &str = "startreaction";
pub const STATS: &str = "stats";
pub const CHECK_TIER: &str = "checktier";
pub const RESET_USER: &str = "resetuser";

/// Largest accepted `amount` for a partial reset
pub const MAX_RESET_AMOUNT: i64 = 10_000;

/// Commands understood by the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    StartReaction,
    Stats,
    CheckTier,
    ResetUser,
}

impl BotCommand {
    /// Look up a command by its registered name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            START_REACTION => Some(Self::StartReaction),
            STATS => Some(Self::Stats),
            CHECK_TIER => Some(Self::CheckTier),
            RESET_USER => Some(Self::ResetUser),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::StartReaction => START_REACTION,
            Self::Stats => STATS,
            Self::CheckTier => CHECK_TIER,
            Self::ResetUser => RESET_USER,
        }
    }

    /// Commands that call the Discord API or write the ledger reply late
    pub fn defers(self) -> bool {
        !matches!(self, Self::Stats)
    }

    /// Title of the failure embed
    pub fn failure_title(self) -> &'static str {
        match self {
            Self::StartReaction => "Tracking Failed",
            Self::Stats => "Stats Unavailable",
            Self::CheckTier => "Tier Check Failed",
            Self::ResetUser => "Reset Failed",
        }
    }
}

/// Command definitions registered on the guild
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(START_REACTION)
            .description(
                "Starts tracking a message for the tier system and reacts with the tracking emoji.",
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "messageid",
                    "The ID of the message to start tracking.",
                )
                .required(true),
            )
            .default_member_permissions(Permissions::MANAGE_ROLES),
        CreateCommand::new(STATS).description("Shows your current tier progress."),
        CreateCommand::new(CHECK_TIER)
            .description("Manually checks and updates a user's current tier role.")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::User,
                    "user",
                    "The user to check (defaults to you).",
                )
                .required(false),
            )
            .default_member_permissions(Permissions::MANAGE_ROLES),
        CreateCommand::new(RESET_USER)
            .description("Clears a user's tracked reactions and updates their tier role.")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to reset.")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "amount",
                    "How many reactions to remove (defaults to all).",
                )
                .min_int_value(0)
                .max_int_value(MAX_RESET_AMOUNT as u64)
                .required(false),
            )
            .default_member_permissions(Permissions::MANAGE_ROLES),
    ]
}

pub(crate) fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find(|o| o.name == name).and_then(|o| match o.value {
        ResolvedValue::String(value) => Some(value),
        _ => None,
    })
}

pub(crate) fn user_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a User> {
    options.iter().find(|o| o.name == name).and_then(|o| match o.value {
        ResolvedValue::User(user, _) => Some(user),
        _ => None,
    })
}

pub(crate) fn integer_option(options: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    options.iter().find(|o| o.name == name).and_then(|o| match o.value {
        ResolvedValue::Integer(value) => Some(value),
        _ => None,
    })
}

/// Parse a message id typed by the invoker
pub fn parse_message_id(raw: &str) -> AppResult<Snowflake> {
    Snowflake::parse(raw).map_err(|_| AppError::invalid_input(format!("not a message id: {raw}")))
}

/// Validate the optional reset amount
pub fn parse_amount(raw: Option<i64>) -> AppResult<Option<usize>> {
    match raw {
        None => Ok(None),
        Some(value) if (0..=MAX_RESET_AMOUNT).contains(&value) => Ok(Some(value as usize)),
        Some(value) => Err(AppError::invalid_input(format!("amount out of range: {value}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names_round_trip() {
        for command in [
            BotCommand::StartReaction,
            BotCommand::Stats,
            BotCommand::CheckTier,
            BotCommand::ResetUser,
        ] {
            assert_eq!(BotCommand::from_name(command.name()), Some(command));
        }
        assert_eq!(BotCommand::from_name("ping"), None);
    }

    #[test]
    fn test_only_stats_replies_immediately() {
        assert!(!BotCommand::Stats.defers());
        assert!(BotCommand::StartReaction.defers());
        assert!(BotCommand::CheckTier.defers());
        assert!(BotCommand::ResetUser.defers());
    }

    #[test]
    fn test_definitions_permissions() {
        let defs = serde_json::to_value(definitions()).unwrap();
        let defs = defs.as_array().unwrap();
        assert_eq!(defs.len(), 4);

        for def in defs {
            let name = def["name"].as_str().unwrap();
            let restricted = !def["default_member_permissions"].is_null();
            assert_eq!(restricted, name != STATS, "{name}");
        }
    }

    #[test]
    fn test_parse_message_id() {
        assert_eq!(
            parse_message_id(" 1187654321098765432 ").unwrap(),
            Snowflake::new(1_187_654_321_098_765_432)
        );
        assert!(parse_message_id("https://discord.com/x").is_err());
        assert!(parse_message_id("0").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(None).unwrap(), None);
        assert_eq!(parse_amount(Some(0)).unwrap(), Some(0));
        assert_eq!(parse_amount(Some(3)).unwrap(), Some(3));
        assert!(parse_amount(Some(-1)).is_err());
        assert!(parse_amount(Some(MAX_RESET_AMOUNT + 1)).is_err());
    }
}
