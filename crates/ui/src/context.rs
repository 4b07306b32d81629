use std::sync::Arc;

use roadmap_core::Locale;
use services::ProgressService;

pub trait UiApp: Send + Sync {
    fn locale(&self) -> Locale;
    fn progress_service(&self) -> Arc<ProgressService>;
}

#[derive(Clone)]
pub struct AppContext {
    locale: Locale,
    window_title: String,
    progress_service: Arc<ProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let progress_service = app.progress_service();
        let window_title = progress_service.roadmap().title().to_string();

        Self {
            locale: app.locale(),
            window_title,
            progress_service,
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    #[must_use]
    pub fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress_service)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
