use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use engine_logging::{engine_debug, engine_info, engine_warn};
use summarizer_core::{Effect, Msg};
use summarizer_engine::CompanySource;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

/// Counters for effects that were actually carried out.
#[derive(Debug, Default)]
pub struct RunnerStats {
    fetches: AtomicU64,
    steps: AtomicU64,
}

impl RunnerStats {
    pub fn fetches(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }

    pub fn steps(&self) -> u64 {
        self.steps.load(Ordering::Relaxed)
    }
}

/// Executes effects from the core on the tokio runtime and feeds results back as messages.
#[derive(Clone)]
pub struct EffectRunner {
    source: Option<Arc<dyn CompanySource>>,
    shutdown: CancellationToken,
    stats: Arc<RunnerStats>,
}

impl EffectRunner {
    pub fn new(source: Option<Arc<dyn CompanySource>>, shutdown: CancellationToken) -> Self {
        Self {
            source,
            shutdown,
            stats: Arc::new(RunnerStats::default()),
        }
    }

    pub fn stats(&self) -> Arc<RunnerStats> {
        self.stats.clone()
    }

    pub fn enqueue(&self, effects: Vec<Effect>, msg_tx: &UnboundedSender<Msg>) {
        for effect in effects {
            match effect {
                Effect::FetchCompanies => self.spawn_fetch(msg_tx.clone()),
                Effect::ScheduleStep { index, delay } => {
                    engine_debug!("ScheduleStep index={} delay_ms={}", index, delay.as_millis());
                    let shutdown = self.shutdown.clone();
                    let stats = self.stats.clone();
                    let msg_tx = msg_tx.clone();
                    tokio::spawn(async move {
                        tokio::select! {
                            _ = shutdown.cancelled() => {}
                            _ = tokio::time::sleep(delay) => {
                                stats.steps.fetch_add(1, Ordering::Relaxed);
                                let _ = msg_tx.send(Msg::StepElapsed { index });
                            }
                        }
                    });
                }
            }
        }
    }

    fn spawn_fetch(&self, msg_tx: UnboundedSender<Msg>) {
        let Some(source) = self.source.clone() else {
            engine_warn!("FetchCompanies requested but no data provider is configured");
            let _ = msg_tx.send(Msg::FetchFailed("no data provider configured".to_string()));
            return;
        };
        let shutdown = self.shutdown.clone();
        let stats = self.stats.clone();
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = shutdown.cancelled() => return,
                result = source.fetch_companies() => result,
            };
            stats.fetches.fetch_add(1, Ordering::Relaxed);
            let msg = match result {
                Ok(companies) => {
                    engine_info!("FetchCompanies loaded {} companies", companies.len());
                    Msg::CompaniesLoaded(companies)
                }
                Err(err) => {
                    engine_warn!("FetchCompanies failed: {}", err);
                    Msg::FetchFailed(err.to_string())
                }
            };
            let _ = msg_tx.send(msg);
        });
    }
}
