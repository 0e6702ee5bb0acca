// Allow non-snake_case names to keep field and function naming aligned with the JSON view
#![allow(non_snake_case)]

pub mod commands;
pub mod confirm;
pub mod filter;
pub mod form;
pub mod models;
pub mod notify;
pub mod render;
pub mod store;
pub mod ui;

use std::sync::Arc;

use confirm::ConfirmService;
use form::FormController;
use notify::Notifier;
use store::StoreState;

/// Shared application context: the store plus its injected collaborators
pub struct App {
    pub store: StoreState,
    pub notifier: Arc<Notifier>,
    pub confirm: Arc<dyn ConfirmService>,
    pub form: FormController,
}

impl App {
    pub fn new(store: StoreState, notifier: Arc<Notifier>, confirm: Arc<dyn ConfirmService>) -> Self {
        let form = FormController::new(store.clone(), notifier.clone());
        Self {
            store,
            notifier,
            confirm,
            form,
        }
    }
}

/// Build the app with its terminal collaborators and run the interactive loop
pub async fn run() {
    tracing_subscriber::fmt::init();
    tracing::info!("taskpad starting");

    let app = Arc::new(App::new(
        store::initStore(),
        Notifier::new(),
        Arc::new(ui::StdinConfirm),
    ));

    // The line loop blocks on stdin; keep it off the async workers so the
    // notifier's dismissal timers stay responsive
    let loopHandle = tokio::task::spawn_blocking(move || ui::runLoop(&app));
    if let Err(e) = loopHandle.await {
        tracing::error!("ui loop failed: {}", e);
    }

    tracing::info!("taskpad exiting");
}
