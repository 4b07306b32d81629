use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use roadmap_core::{Locale, ProgressMap};
use roadmap_core::model::Roadmap;
use services::ProgressService;
use storage::repository::{InMemoryRepository, ProgressRepository};

use crate::context::{UiApp, build_app_context};
use crate::views::{RoadmapTestHandles, RoadmapView};
use crate::vm::{RoadmapIntent, RoadmapVm};

struct TestApp {
    locale: Locale,
    progress_service: Arc<ProgressService>,
}

impl UiApp for TestApp {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress_service)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: RoadmapTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn RoadmapHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { RoadmapView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: RoadmapTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Keep polling spawned tasks until `duration` of wall time has passed.
    pub async fn drive_for(&mut self, duration: std::time::Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        while tokio::time::Instant::now() < deadline {
            self.drive_async().await;
        }
    }

    /// Rebuild, then let the startup resource settle.
    pub async fn start(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: RoadmapIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn vm(&self) -> Signal<Option<RoadmapVm>> {
        self.handles.vm()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(locale: Locale) -> ViewHarness {
    setup_view_harness_with_repo(locale, Arc::new(InMemoryRepository::new()))
}

pub fn setup_view_harness_with_progress(locale: Locale, saved: ProgressMap) -> ViewHarness {
    setup_view_harness_with_repo(locale, Arc::new(InMemoryRepository::with_progress(saved)))
}

pub fn setup_view_harness_with_repo(
    locale: Locale,
    repo: Arc<dyn ProgressRepository>,
) -> ViewHarness {
    let roadmap = Arc::new(Roadmap::builtin().expect("builtin roadmap"));
    let progress_service = Arc::new(ProgressService::new(roadmap, repo));
    let app = Arc::new(TestApp {
        locale,
        progress_service,
    });
    let handles = RoadmapTestHandles::default();
    let dom = VirtualDom::new_with_props(
        RoadmapHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
