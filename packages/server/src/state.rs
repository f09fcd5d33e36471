use axum::extract::ws::Message;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tracing::debug;
use undercover::{Event, Session, SetupForm};

use crate::models::config::DebugConfig;
use crate::services::store::LocalStore;
use crate::services::word_service::WordSource;

/// The setup screen and the game in progress. One per host.
#[derive(Debug, Default)]
pub struct Table {
    pub setup: SetupForm,
    pub session: Session,
}

#[derive(Clone)]
pub struct AppState {
    pub table: Arc<Mutex<Table>>,
    pub channel: broadcast::Sender<Message>,
    pub words: Arc<WordSource>,
    pub store: Arc<Mutex<LocalStore>>,
    pub rng: Arc<Mutex<StdRng>>,
    pub debug_config: Arc<DebugConfig>,
}

impl AppState {
    pub fn new(debug_config: DebugConfig, words: WordSource, store: LocalStore) -> Self {
        let rng = match debug_config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let table = Table {
            setup: store.setup_form(),
            session: Session::new(),
        };
        let (tx, _) = broadcast::channel(1000);

        AppState {
            table: Arc::new(Mutex::new(table)),
            channel: tx,
            words: Arc::new(words),
            store: Arc::new(Mutex::new(store)),
            rng: Arc::new(Mutex::new(rng)),
            debug_config: Arc::new(debug_config),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.channel.subscribe()
    }

    /// Pushes every transition to the connected renderers.
    pub fn broadcast_events(&self, events: &[Event]) {
        for event in events {
            self.notify(serde_json::json!({
                "message_type": "state_change",
                "event": event,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }));
        }
    }

    pub fn broadcast_setup_change(&self, setup: &SetupForm) {
        self.notify(serde_json::json!({
            "message_type": "setup_change",
            "setup": setup,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));
    }

    // having nobody listening is fine
    fn notify(&self, notification: serde_json::Value) {
        if self
            .channel
            .send(Message::Text(notification.to_string()))
            .is_err()
        {
            debug!("no listeners for {}", notification["message_type"]);
        }
    }
}
