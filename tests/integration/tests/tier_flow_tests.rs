//! End-to-end tier flow tests
//!
//! Reactions flow through the real services into a JSON ledger on disk and
//! out to a fake guild's roles.
//!
//! Run with: cargo test -p integration-tests --test tier_flow_tests

use integration_tests::{
    message, star, TestBot, BRONZE, GOLD, SILVER,
};
use tierbot_core::{LedgerStore, ReactionKind, Snowflake};
use tierbot_service::dto::RoleStatus;
use tierbot_service::{ResetReport, StatsService, TierCheckReport, TierService};

const ALICE: Snowflake = Snowflake::new(1);
const BOB: Snowflake = Snowflake::new(2);
const OUTSIDER: Snowflake = Snowflake::new(3);
const NITRO: Snowflake = Snowflake::new(77);

// ============================================================================
// Tier progression
// ============================================================================

#[tokio::test]
async fn test_member_climbs_through_every_tier() {
    let bot = TestBot::new();
    bot.track(60).await;
    bot.guild.join(ALICE, &[NITRO]);

    bot.react_to(ALICE, 4).await;
    assert_eq!(bot.guild.roles_of(ALICE), [NITRO].into_iter().collect());

    bot.react_to(ALICE, 5).await;
    assert_eq!(bot.guild.roles_of(ALICE), [NITRO, BRONZE].into_iter().collect());

    bot.react_to(ALICE, 20).await;
    assert_eq!(bot.guild.roles_of(ALICE), [NITRO, SILVER].into_iter().collect());

    bot.react_to(ALICE, 50).await;
    assert_eq!(bot.guild.roles_of(ALICE), [NITRO, GOLD].into_iter().collect());
    assert_eq!(bot.persisted_count(ALICE).await, 50);
}

#[tokio::test]
async fn test_removing_reactions_drops_tier() {
    let bot = TestBot::new();
    bot.track(20).await;
    bot.guild.join(ALICE, &[]);
    bot.react_to(ALICE, 20).await;
    assert!(bot.guild.roles_of(ALICE).contains(&SILVER));

    let tiers = TierService::new(&bot.ctx);
    let outcome = tiers
        .handle_reaction(&star(ReactionKind::Removed, ALICE, message(1)))
        .await
        .unwrap()
        .expect("tracked removal reconciles");

    assert_eq!(outcome.unique_count, 19);
    assert_eq!(outcome.tier_name(), "Bronze");
    assert_eq!(bot.guild.roles_of(ALICE), [BRONZE].into_iter().collect());
}

#[tokio::test]
async fn test_reactions_are_counted_per_member() {
    let bot = TestBot::new();
    bot.track(10).await;
    bot.guild.join(ALICE, &[]);
    bot.guild.join(BOB, &[]);

    bot.react_to(ALICE, 10).await;
    bot.react_to(BOB, 3).await;

    assert_eq!(bot.persisted_count(ALICE).await, 10);
    assert_eq!(bot.persisted_count(BOB).await, 3);
    assert!(bot.guild.roles_of(BOB).is_empty());
}

// ============================================================================
// Ignored reactions
// ============================================================================

#[tokio::test]
async fn test_untracked_and_repeated_reactions_do_not_count() {
    let bot = TestBot::new();
    bot.track(1).await;
    bot.guild.join(ALICE, &[]);
    let tiers = TierService::new(&bot.ctx);

    let untracked = star(ReactionKind::Added, ALICE, Snowflake::new(42));
    assert!(tiers.handle_reaction(&untracked).await.unwrap().is_none());

    let first = star(ReactionKind::Added, ALICE, message(1));
    assert!(tiers.handle_reaction(&first).await.unwrap().is_some());
    assert!(tiers.handle_reaction(&first).await.unwrap().is_none());

    assert_eq!(bot.persisted_count(ALICE).await, 1);
}

#[tokio::test]
async fn test_foreign_emoji_guild_and_bots_are_ignored() {
    let bot = TestBot::new();
    bot.track(1).await;
    bot.guild.join(ALICE, &[]);
    let tiers = TierService::new(&bot.ctx);

    let mut other_emoji = star(ReactionKind::Added, ALICE, message(1));
    other_emoji.emoji = "👍".to_string();
    let mut other_guild = star(ReactionKind::Added, ALICE, message(1));
    other_guild.guild_id = Some(Snowflake::new(1));
    let from_bot = star(ReactionKind::Added, ALICE, message(1)).with_bot(true);

    for event in [other_emoji, other_guild, from_bot] {
        assert!(tiers.handle_reaction(&event).await.unwrap().is_none());
    }
    assert_eq!(bot.persisted_count(ALICE).await, 0);
    assert_eq!(bot.guild.mutations(), 0);
}

// ============================================================================
// Reconciliation
// ============================================================================

#[tokio::test]
async fn test_check_tier_is_idempotent() {
    let bot = TestBot::new();
    bot.track(5).await;
    bot.guild.join(ALICE, &[]);
    bot.react_to(ALICE, 5).await;
    let mutations = bot.guild.mutations();

    let outcome = TierService::new(&bot.ctx).reconcile(ALICE).await.unwrap();
    let report = TierCheckReport::from(&outcome);

    assert_eq!(report.status, RoleStatus::Correct);
    assert_eq!(report.tier, "Bronze");
    assert_eq!(bot.guild.mutations(), mutations);
}

#[tokio::test]
async fn test_check_tier_repairs_stray_tier_roles() {
    let bot = TestBot::new();
    bot.track(5).await;
    bot.guild.join(ALICE, &[GOLD, SILVER, NITRO]);
    bot.react_to(ALICE, 5).await;

    assert_eq!(bot.guild.roles_of(ALICE), [BRONZE, NITRO].into_iter().collect());
}

#[tokio::test]
async fn test_check_tier_unknown_member() {
    let bot = TestBot::new();

    let err = TierService::new(&bot.ctx).reconcile(OUTSIDER).await.unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_MEMBER");
}

#[tokio::test]
async fn test_denied_role_changes_are_reported_not_fatal() {
    let bot = TestBot::new();
    bot.track(5).await;
    bot.guild.join(ALICE, &[]);
    bot.guild.deny_mutations();

    bot.react_to(ALICE, 5).await;
    assert_eq!(bot.persisted_count(ALICE).await, 5);

    let outcome = TierService::new(&bot.ctx).reconcile(ALICE).await.unwrap();
    assert_eq!(RoleStatus::from(&outcome), RoleStatus::Failed);
    assert!(bot.guild.roles_of(ALICE).is_empty());
}

// ============================================================================
// Reset
// ============================================================================

#[tokio::test]
async fn test_full_reset_strips_tier() {
    let bot = TestBot::new();
    bot.track(20).await;
    bot.guild.join(ALICE, &[NITRO]);
    bot.react_to(ALICE, 20).await;

    let (reset, outcome) = TierService::new(&bot.ctx)
        .reset_member(ALICE, None)
        .await
        .unwrap();
    let report = ResetReport::new(reset, &outcome);

    assert_eq!(report.removed, 20);
    assert_eq!(report.remaining, 0);
    assert!(report.full_reset);
    assert_eq!(report.tier, "None");
    assert_eq!(report.status, RoleStatus::Updated);
    assert_eq!(bot.guild.roles_of(ALICE), [NITRO].into_iter().collect());
    assert!(bot.store.load().await.reactions_of(ALICE).is_none());
}

#[tokio::test]
async fn test_partial_reset_lowers_tier() {
    let bot = TestBot::new();
    bot.track(20).await;
    bot.guild.join(ALICE, &[]);
    bot.react_to(ALICE, 20).await;

    let (reset, outcome) = TierService::new(&bot.ctx)
        .reset_member(ALICE, Some(16))
        .await
        .unwrap();

    assert_eq!(reset.removed, 16);
    assert_eq!(reset.remaining, 4);
    assert_eq!(outcome.tier_name(), "None");
    assert!(bot.guild.roles_of(ALICE).is_empty());
    assert_eq!(bot.persisted_count(ALICE).await, 4);
}

#[tokio::test]
async fn test_reset_unknown_user_changes_nothing() {
    let bot = TestBot::new();
    bot.guild.join(BOB, &[]);

    let (reset, outcome) = TierService::new(&bot.ctx)
        .reset_member(BOB, Some(3))
        .await
        .unwrap();

    assert_eq!(reset.removed, 0);
    assert_eq!(RoleStatus::from(&outcome), RoleStatus::Correct);
}

#[tokio::test]
async fn test_reset_member_who_left_still_clears_ledger() {
    let bot = TestBot::new();
    bot.track(7).await;
    bot.guild.join(ALICE, &[]);
    bot.react_to(ALICE, 7).await;
    bot.guild.leave(ALICE);
    let before = bot.guild.mutations();

    let (reset, outcome) = TierService::new(&bot.ctx)
        .reset_member(ALICE, None)
        .await
        .unwrap();
    let report = ResetReport::new(reset, &outcome);

    assert_eq!(report.removed, 7);
    assert!(report.full_reset);
    assert_eq!(report.status, RoleStatus::Skipped);
    assert_eq!(bot.guild.mutations(), before);
    assert!(bot.store.load().await.reactions_of(ALICE).is_none());
}

// ============================================================================
// Persistence
// ============================================================================

#[tokio::test]
async fn test_ledger_survives_restart() {
    let bot = TestBot::new();
    bot.track(6).await;
    bot.guild.join(ALICE, &[]);
    bot.react_to(ALICE, 6).await;

    let TestBot { dir, .. } = bot;
    let restarted = TestBot::in_dir(dir);
    restarted.guild.join(ALICE, &[]);

    let ledger = restarted.store.load().await;
    assert_eq!(ledger.tracked_messages().len(), 6);
    assert_eq!(ledger.unique_count(ALICE), 6);

    let outcome = TierService::new(&restarted.ctx).reconcile(ALICE).await.unwrap();
    assert_eq!(outcome.added, Some(BRONZE));
}

#[tokio::test]
async fn test_ledger_file_layout() {
    let bot = TestBot::new();
    bot.track(1).await;
    bot.guild.join(ALICE, &[]);
    bot.react_to(ALICE, 1).await;

    let raw = std::fs::read_to_string(bot.dir.ledger_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "tracked_messages": ["10001"],
            "1": { "10001": true }
        })
    );
    assert!(raw.contains("\n    \"tracked_messages\""));
}

#[tokio::test]
async fn test_missing_ledger_file_starts_empty() {
    let bot = TestBot::new();
    assert!(!bot.dir.ledger_path().exists());

    let report = StatsService::new(&bot.ctx).report(ALICE).await;
    assert_eq!(report.unique_count, 0);
    assert_eq!(report.current_tier, None);
    assert_eq!(report.next.as_ref().map(|n| n.remaining), Some(5));
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_reactions_are_all_recorded() {
    let bot = std::sync::Arc::new(TestBot::new());
    bot.track(30).await;
    for user in 1..=5 {
        bot.guild.join(Snowflake::new(user), &[]);
    }

    let mut handles = Vec::new();
    for user in 1..=5 {
        let bot = bot.clone();
        handles.push(tokio::spawn(async move {
            bot.react_to(Snowflake::new(user), 30).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    for user in 1..=5 {
        let user = Snowflake::new(user);
        assert_eq!(bot.persisted_count(user).await, 30);
        assert_eq!(bot.guild.roles_of(user), [SILVER].into_iter().collect());
    }
}
