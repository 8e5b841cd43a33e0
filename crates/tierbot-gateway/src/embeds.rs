//! Reply embeds
//!
//! Pure builders over the service reports; nothing here talks to Discord.

use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};
use tierbot_service::dto::RoleStatus;
use tierbot_service::{ResetReport, StatsReport, TierCheckReport, TrackingReport};

pub const GREEN: u32 = 0x00FF00;
pub const YELLOW: u32 = 0xFFFF00;
pub const RED: u32 = 0xFF0000;
pub const BLUE: u32 = 0x0099FF;

/// Tracking started (or was already active) on a message
pub fn tracking_started(report: &TrackingReport, channel_id: u64, emoji: &str) -> CreateEmbed {
    let description = if report.newly_tracked {
        format!(
            "Reactions on message `{}` in <#{channel_id}> are now being tracked for the tier system.",
            report.message_id
        )
    } else {
        format!(
            "Message `{}` in <#{channel_id}> was already being tracked.",
            report.message_id
        )
    };

    CreateEmbed::new()
        .color(GREEN)
        .title("✅ Tracking Started")
        .description(description)
        .field("Tracking Emoji", emoji, true)
        .field("Target Message ID", format!("`{}`", report.message_id), true)
        .field("Tracked Messages", report.tracked_total.to_string(), true)
        .timestamp(Timestamp::now())
}

/// Tracking could not start
pub fn tracking_failed(message_id: &str, reason: &str) -> CreateEmbed {
    CreateEmbed::new()
        .color(RED)
        .title("❌ Tracking Failed")
        .description(format!("Could not start tracking for message ID `{message_id}`."))
        .field("Reason", reason, false)
        .timestamp(Timestamp::now())
}

/// Progress checklist for the invoking user
pub fn stats(report: &StatsReport, user_tag: &str, avatar_url: &str, emoji: &str) -> CreateEmbed {
    let mut description = format!(
        "You currently have **{}** unique reactions across tracked messages.\n\n",
        report.unique_count
    );
    for tier in &report.tiers {
        description.push_str(&format!(
            "- **{}** ({} reactions): {}\n",
            tier.name,
            tier.threshold,
            if tier.achieved { "✅" } else { "❌" }
        ));
    }

    let next_goal = match &report.next {
        Some(next) => format!(
            "Next Tier: **{}** requires **{}** more unique reactions.",
            next.name, next.remaining
        ),
        None => "You have achieved the highest tier! 🎉".to_string(),
    };

    CreateEmbed::new()
        .color(BLUE)
        .title(format!("{user_tag}'s Tier Progress"))
        .description(description)
        .field("Next Goal", next_goal, false)
        .thumbnail(avatar_url)
        .footer(CreateEmbedFooter::new(format!("Tracking reactions with {emoji}")))
        .timestamp(Timestamp::now())
}

fn status_color(status: RoleStatus) -> u32 {
    match status {
        RoleStatus::Updated => GREEN,
        RoleStatus::Correct | RoleStatus::Skipped => YELLOW,
        RoleStatus::Failed => RED,
    }
}

/// Result of a forced tier check
pub fn tier_check(
    report: &TierCheckReport,
    target_tag: &str,
    avatar_url: &str,
    checked_by: &str,
) -> CreateEmbed {
    let description = match report.status {
        RoleStatus::Updated => "Roles were successfully updated based on their current reaction count.",
        RoleStatus::Correct => "The user's current role is correct, or no change was needed.",
        RoleStatus::Failed => {
            "Roles need to change but the bot could not update them. Check that its role is above the tier roles."
        }
        RoleStatus::Skipped => "The user's roles could not be read, so they were not updated.",
    };

    CreateEmbed::new()
        .color(status_color(report.status))
        .title(format!("✅ Tier Check for {target_tag}"))
        .description(description)
        .field("Unique Reactions", report.unique_count.to_string(), true)
        .field("Current Tier Achieved", &report.tier, true)
        .field("Role Status", report.status.as_str(), true)
        .thumbnail(avatar_url)
        .footer(CreateEmbedFooter::new(format!("Checked by {checked_by}")))
        .timestamp(Timestamp::now())
}

/// Result of resetting a user's reactions
pub fn reset(report: &ResetReport, target_tag: &str, reset_by: &str) -> CreateEmbed {
    let mut description = if report.full_reset {
        format!("All tracked reactions for {target_tag} were cleared.")
    } else {
        format!(
            "Removed {} tracked reactions from {target_tag}; the removed entries were chosen at random.",
            report.removed
        )
    };
    if report.status == RoleStatus::Skipped {
        description.push_str(" Roles were not updated because the user's roles could not be read, for example after they left the server.");
    }

    CreateEmbed::new()
        .color(status_color(report.status))
        .title(format!("♻️ Reactions Reset for {target_tag}"))
        .description(description)
        .field("Removed", report.removed.to_string(), true)
        .field("Remaining", report.remaining.to_string(), true)
        .field("Current Tier Achieved", &report.tier, true)
        .field("Role Status", report.status.as_str(), true)
        .footer(CreateEmbedFooter::new(format!("Reset by {reset_by}")))
        .timestamp(Timestamp::now())
}

/// Generic failure reply
pub fn failure(title: &str, reason: &str) -> CreateEmbed {
    CreateEmbed::new()
        .color(RED)
        .title(format!("❌ {title}"))
        .description(reason)
        .timestamp(Timestamp::now())
}
