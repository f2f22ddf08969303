//! The "AJAX-CALL" walkthrough run by the `evhub` binary.
//!
//! Two independent UI components, a button and a link, both need to fire
//! the same request. Neither knows who performs it: each emits
//! `AJAX-CALL` on a shared hub and the parent component subscribes once.

use anyhow::Result;
use evhub_core::{args, Args, DynHub, HubConfig, Listener, ListenerResult};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Event name shared by the components in the walkthrough.
pub const AJAX_CALL: &str = "AJAX-CALL";

/// Request payload carried as the first argument of `AJAX-CALL`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AjaxRequest {
    pub url: String,
    pub source: String,
}

/// Component that emits on click
pub struct Button {
    hub: Arc<DynHub>,
}

impl Button {
    pub fn new(hub: Arc<DynHub>) -> Self {
        Self { hub }
    }

    pub fn handle_click(&self) -> Result<()> {
        let request = AjaxRequest {
            url: "/api/button".to_string(),
            source: "button".to_string(),
        };
        self.hub.emit(AJAX_CALL, &args![request]?)?;
        Ok(())
    }
}

/// Component that emits its target on click
pub struct Link {
    hub: Arc<DynHub>,
}

impl Link {
    pub fn new(hub: Arc<DynHub>) -> Self {
        Self { hub }
    }

    pub fn handle_click(&self, href: &str) -> Result<()> {
        let request = AjaxRequest {
            url: href.to_string(),
            source: "link".to_string(),
        };
        self.hub.emit(AJAX_CALL, &args![request]?)?;
        Ok(())
    }
}

/// What the walkthrough observed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Requests served by the parent's handler, in order.
    pub served: Vec<AjaxRequest>,
    /// Source of the first request, seen by a once listener.
    pub first_source: Option<String>,
    /// Listeners left on `AJAX-CALL` after the run.
    pub remaining_listeners: usize,
}

fn request_of(args: &Args) -> std::result::Result<AjaxRequest, &'static str> {
    args.get(0).ok_or("AJAX-CALL expects a request payload")
}

/// Run the walkthrough on a fresh hub
pub fn run(config: HubConfig) -> Result<DemoReport> {
    let hub = Arc::new(DynHub::with_config(config));
    let served = Arc::new(Mutex::new(Vec::new()));
    let first_source = Arc::new(Mutex::new(None));

    let log = served.clone();
    let handler = Listener::new(move |args: &Args| -> ListenerResult {
        let request = request_of(args)?;
        tracing::info!("Performing request {} for {}", request.url, request.source);
        log.lock().push(request);
        Ok(())
    });
    hub.on(AJAX_CALL, handler.clone());

    let first = first_source.clone();
    hub.once(
        AJAX_CALL,
        Listener::new(move |args: &Args| -> ListenerResult {
            let request = request_of(args)?;
            *first.lock() = Some(request.source);
            Ok(())
        }),
    );

    let button = Button::new(hub.clone());
    let link = Link::new(hub.clone());

    button.handle_click()?;
    link.handle_click("/api/link")?;

    hub.off(AJAX_CALL, &handler);
    button.handle_click()?;

    let report = DemoReport {
        served: served.lock().clone(),
        first_source: first_source.lock().clone(),
        remaining_listeners: hub.listener_count(AJAX_CALL),
    };
    Ok(report)
}
