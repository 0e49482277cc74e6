use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use engine_logging::{engine_error, engine_info};
use summarizer_core::{AppState, Msg};
use summarizer_engine::{CompaniesClient, CompanySource, SheetSource, SheetsClient};
use tokio_util::sync::CancellationToken;

use crate::controller::ViewController;
use crate::effects::EffectRunner;
use crate::provider::list_companies;
use crate::ui::PageRenderer;
use crate::{logging, AppConfig};

/// Everything the HTTP handlers share.
#[derive(Clone)]
pub struct AppContext {
    pub sheets: Arc<dyn SheetSource>,
    pub live: ViewController,
    pub sample: ViewController,
    pub pages: Arc<PageRenderer>,
}

impl AppContext {
    /// Wires both views. Must be called inside a tokio runtime.
    pub fn new(
        sheets: Arc<dyn SheetSource>,
        companies: Arc<dyn CompanySource>,
        sample_state: AppState,
        shutdown: CancellationToken,
    ) -> anyhow::Result<Self> {
        let live = ViewController::spawn(
            AppState::new(),
            EffectRunner::new(Some(companies), shutdown.clone()),
            shutdown.clone(),
        );
        let sample = ViewController::spawn(
            sample_state,
            EffectRunner::new(None, shutdown.clone()),
            shutdown,
        );
        let pages = PageRenderer::new().context("registering page templates")?;
        Ok(Self {
            sheets,
            live,
            sample,
            pages: Arc::new(pages),
        })
    }

    fn from_config(
        config: &AppConfig,
        local_addr: SocketAddr,
        shutdown: CancellationToken,
    ) -> anyhow::Result<Self> {
        let companies =
            CompaniesClient::new(config.companies_url(local_addr), config.fetch_settings());
        engine_info!("Live view reads from {}", companies.url());
        Self::new(
            Arc::new(SheetsClient::new(config.sheets_settings())),
            Arc::new(companies),
            AppState::sample(config.step_delay()),
            shutdown,
        )
    }
}

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(live_page))
        .route("/refresh", post(refresh))
        .route("/sample", get(sample_page))
        .route("/sample/run", post(run_sample))
        .route("/sample/reset", post(reset_sample))
        .route("/api/companies", get(list_companies))
        .route("/api/view", get(live_view))
        .route("/api/sample/view", get(sample_view))
        .with_state(ctx)
}

pub async fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    logging::initialize(&config);
    if config.spreadsheet_id.is_none() {
        engine_info!("No SPREADSHEET_ID configured; /api/companies will report failures");
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    let local_addr = listener.local_addr().context("reading bound address")?;

    let shutdown = CancellationToken::new();
    let ctx = AppContext::from_config(&config, local_addr, shutdown.clone())?;
    // The listener is already bound, so the live view's first fetch of our own endpoint queues.
    ctx.live.mount();

    engine_info!("Company summarizer listening on http://{}", local_addr);
    axum::serve(listener, router(ctx.clone()))
        .with_graceful_shutdown(shutdown_signal(shutdown.clone()))
        .await
        .context("serving http")?;

    engine_info!(
        "Shut down after {} fetches and {} simulated steps",
        ctx.live.stats().fetches(),
        ctx.sample.stats().steps()
    );
    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        engine_error!("Failed to listen for Ctrl-C: {}", err);
    }
    shutdown.cancel();
}

async fn render_page(ctx: &AppContext, view: &ViewController) -> Response {
    let snapshot = view.snapshot().await;
    match ctx.pages.render(&snapshot) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            engine_error!("Failed to render page: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

async fn live_page(State(ctx): State<AppContext>) -> Response {
    ctx.live.mount();
    render_page(&ctx, &ctx.live).await
}

async fn sample_page(State(ctx): State<AppContext>) -> Response {
    render_page(&ctx, &ctx.sample).await
}

async fn refresh(State(ctx): State<AppContext>) -> Redirect {
    ctx.live.mount();
    ctx.live.dispatch(Msg::RefreshClicked);
    Redirect::to("/")
}

async fn run_sample(State(ctx): State<AppContext>) -> Redirect {
    ctx.sample.dispatch(Msg::RunClicked);
    Redirect::to("/sample")
}

async fn reset_sample(State(ctx): State<AppContext>) -> Redirect {
    ctx.sample.dispatch(Msg::ResetSample);
    Redirect::to("/sample")
}

async fn live_view(State(ctx): State<AppContext>) -> Response {
    ctx.live.mount();
    Json(ctx.live.snapshot().await).into_response()
}

async fn sample_view(State(ctx): State<AppContext>) -> Response {
    Json(ctx.sample.snapshot().await).into_response()
}
