//! Test helpers
//!
//! Builds service contexts over a temporary ledger file and spawns the
//! keep-alive HTTP server on an ephemeral port.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response};
use tierbot_api::{create_app, AppState};
use tierbot_core::{LedgerStore, ReactionKind, Snowflake};
use tierbot_service::{LedgerService, ServiceContext, ServiceContextBuilder, TierService};
use tierbot_store::JsonLedgerStore;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{message, standard_tiers, star, FakeGuild, GUILD, TRACK_EMOJI};

/// A temporary directory removed on drop
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("tierbot-it-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.path.join("reactions.json")
    }
}

impl Default for TempDir {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.path).ok();
    }
}

/// Services wired to a JSON ledger file and a fake guild
pub struct TestBot {
    pub ctx: ServiceContext,
    pub store: Arc<JsonLedgerStore>,
    pub guild: Arc<FakeGuild>,
    pub dir: TempDir,
}

impl TestBot {
    /// Bot over a fresh, empty ledger
    pub fn new() -> Self {
        Self::in_dir(TempDir::new())
    }

    /// Bot over whatever ledger file already exists in `dir`
    pub fn in_dir(dir: TempDir) -> Self {
        let store = Arc::new(JsonLedgerStore::new(dir.ledger_path()));
        let guild = Arc::new(FakeGuild::default());
        let ctx = ServiceContextBuilder::new()
            .store(store.clone())
            .roles(guild.clone())
            .tiers(standard_tiers())
            .guild_id(GUILD)
            .track_emoji(TRACK_EMOJI)
            .build()
            .expect("complete service context");

        Self {
            ctx,
            store,
            guild,
            dir,
        }
    }

    /// Track messages `1..=n`
    pub async fn track(&self, n: u64) {
        let ledger = LedgerService::new(&self.ctx);
        for i in 1..=n {
            ledger.start_tracking(message(i)).await.expect("tracking");
        }
    }

    /// `user` reacts to tracked messages `1..=n`, reconciling after each
    pub async fn react_to(&self, user: Snowflake, n: u64) {
        let tiers = TierService::new(&self.ctx);
        for i in 1..=n {
            tiers
                .handle_reaction(&star(ReactionKind::Added, user, message(i)))
                .await
                .expect("reaction");
        }
    }

    /// Unique count as persisted on disk
    pub async fn persisted_count(&self, user: Snowflake) -> u64 {
        self.store.load().await.unique_count(user)
    }
}

impl Default for TestBot {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep-alive server bound to an ephemeral local port
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(ctx: ServiceContext) -> Result<Self> {
        let app = create_app(AppState::new(ctx));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }
}
