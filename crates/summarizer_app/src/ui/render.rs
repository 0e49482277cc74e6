use chrono::Utc;
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use summarizer_core::{AppViewModel, ViewVariant};

use super::templates::{PAGE, PAGE_TEMPLATE, PARTIALS};
use crate::controller::ViewSnapshot;

#[derive(Serialize)]
struct PageData<'a> {
    title: &'static str,
    subtitle: &'static str,
    notice_title: &'static str,
    notice_body: &'static str,
    action_path: &'static str,
    action_label: &'static str,
    action_disabled: bool,
    reset_path: Option<&'static str>,
    auto_refresh: bool,
    revision: u64,
    rendered_at: String,
    view: &'a AppViewModel,
}

/// Renders view snapshots into the dashboard page.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(PAGE_TEMPLATE, PAGE)?;
        for (name, partial) in PARTIALS {
            registry.register_partial(name, partial)?;
        }
        Ok(Self { registry })
    }

    pub fn render(&self, snapshot: &ViewSnapshot) -> Result<String, RenderError> {
        let view = &snapshot.view;
        let data = match view.variant {
            ViewVariant::Live => PageData {
                title: "Company Summarizer",
                subtitle: "AI-powered analysis sourced from your Google Sheet",
                notice_title: "Live Data Mode",
                notice_body:
                    "This view pulls AI-generated summaries directly from your live Google Sheet.",
                action_path: "/refresh",
                action_label: "Refresh",
                action_disabled: view.loading,
                reset_path: None,
                auto_refresh: false,
                revision: snapshot.revision,
                rendered_at: rendered_at(),
                view,
            },
            ViewVariant::Sample => PageData {
                title: "Company Summarizer (Sample)",
                subtitle: "Simulated analysis over built-in sample companies",
                notice_title: "Sample Data Mode",
                notice_body: "Summaries here are canned; Run walks the list one company at a time. \
                              The highlighted row is being summarized and counts as pending until it completes.",
                action_path: "/sample/run",
                action_label: if view.is_running { "Processing..." } else { "Run Analysis" },
                action_disabled: view.is_running,
                reset_path: Some("/sample/reset"),
                auto_refresh: view.is_running,
                revision: snapshot.revision,
                rendered_at: rendered_at(),
                view,
            },
        };
        self.registry.render(PAGE_TEMPLATE, &data)
    }
}

fn rendered_at() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
