use dioxus::document::eval;
use roadmap_core::layout::ScrollMetrics;
use roadmap_core::model::PhaseId;

pub(super) fn phase_metrics_script(phase: PhaseId) -> String {
    format!(
        r#"return (function() {{
                    const card = document.getElementById("phase-{phase}");
                    if (!card) {{
                        return null;
                    }}
                    const header = document.querySelector(".header");
                    const nav = document.querySelector(".nav-bar");
                    return {{
                        card_top: card.offsetTop,
                        header_height: header ? header.offsetHeight : 0,
                        nav_height: nav ? nav.offsetHeight : 0,
                    }};
                }})()"#
    )
}

pub(super) fn scroll_to_script(top: f64) -> String {
    format!("window.scrollTo({{ top: {top}, behavior: \"smooth\" }});")
}

pub(super) fn body_scroll_script(locked: bool) -> &'static str {
    if locked {
        "document.body.style.overflow = \"hidden\";"
    } else {
        "document.body.style.overflow = \"\";"
    }
}

pub(super) const FOCUS_ROOT_SCRIPT: &str = "document.getElementById(\"roadmap-root\")?.focus();";

/// Measure the card of `phase`; `None` when it is not mounted or no webview answers.
pub(super) async fn measure_phase(phase: PhaseId) -> Option<ScrollMetrics> {
    eval(&phase_metrics_script(phase))
        .join::<Option<ScrollMetrics>>()
        .await
        .ok()
        .flatten()
}

pub(super) fn scroll_window_to(top: f64) {
    let _ = eval(&scroll_to_script(top));
}

pub(super) fn lock_body_scroll(locked: bool) {
    let _ = eval(body_scroll_script(locked));
}
