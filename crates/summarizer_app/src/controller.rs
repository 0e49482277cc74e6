use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use engine_logging::{engine_debug, engine_info};
use serde::Serialize;
use summarizer_core::{update, AppState, AppViewModel, Msg};
use tokio::sync::{mpsc, watch, Mutex};
use tokio_util::sync::CancellationToken;

use crate::effects::{EffectRunner, RunnerStats};

/// A view model together with the revision it was taken at.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub revision: u64,
    #[serde(flatten)]
    pub view: AppViewModel,
}

struct SharedState {
    state: AppState,
    revision: u64,
}

/// Owns one view's state. Messages are applied by a single dispatcher task,
/// so `update` never runs concurrently for the same view.
#[derive(Clone)]
pub struct ViewController {
    shared: Arc<Mutex<SharedState>>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    revision_rx: watch::Receiver<u64>,
    mounted: Arc<AtomicBool>,
    stats: Arc<RunnerStats>,
}

impl ViewController {
    /// Spawns the dispatcher task. Must be called inside a tokio runtime.
    pub fn spawn(initial: AppState, runner: EffectRunner, shutdown: CancellationToken) -> Self {
        let variant = initial.variant();
        let shared = Arc::new(Mutex::new(SharedState {
            state: initial,
            revision: 0,
        }));
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Msg>();
        let (revision_tx, revision_rx) = watch::channel(0u64);
        let stats = runner.stats();

        let dispatcher_shared = shared.clone();
        let dispatcher_tx = msg_tx.clone();
        tokio::spawn(async move {
            loop {
                let msg = tokio::select! {
                    _ = shutdown.cancelled() => break,
                    msg = msg_rx.recv() => match msg {
                        Some(msg) => msg,
                        None => break,
                    },
                };
                engine_debug!("{:?} view <- {}", variant, msg_label(&msg));

                let effects = {
                    let mut guard = dispatcher_shared.lock().await;
                    let state = std::mem::take(&mut guard.state);
                    let was_running = state.processing().running;
                    let (mut state, effects) = update(state, msg);
                    match (was_running, state.processing().running) {
                        (false, true) => engine_info!(
                            "Simulated run started over {} companies",
                            state.companies().len()
                        ),
                        (true, false) => engine_info!("Simulated run finished"),
                        _ => {}
                    }
                    if state.consume_dirty() {
                        guard.revision += 1;
                        let _ = revision_tx.send(guard.revision);
                    }
                    guard.state = state;
                    effects
                };
                runner.enqueue(effects, &dispatcher_tx);
            }
            engine_info!("{:?} view dispatcher stopped", variant);
        });

        Self {
            shared,
            msg_tx,
            revision_rx,
            mounted: Arc::new(AtomicBool::new(false)),
            stats,
        }
    }

    pub fn dispatch(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }

    /// Sends `Mounted` the first time only.
    pub fn mount(&self) {
        if !self.mounted.swap(true, Ordering::SeqCst) {
            self.dispatch(Msg::Mounted);
        }
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        let guard = self.shared.lock().await;
        ViewSnapshot {
            revision: guard.revision,
            view: guard.state.view(),
        }
    }

    /// Receives the revision number every time the view changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_rx.clone()
    }

    pub fn stats(&self) -> &RunnerStats {
        &self.stats
    }
}

fn msg_label(msg: &Msg) -> String {
    match msg {
        Msg::CompaniesLoaded(companies) => format!("CompaniesLoaded({} rows)", companies.len()),
        other => format!("{other:?}"),
    }
}
