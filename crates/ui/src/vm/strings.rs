use roadmap_core::Locale;
use roadmap_core::progress::FrameworkProgress;

/// Fixed user-facing strings for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct UiText {
    pub progress_heading: &'static str,
    pub completed_label: &'static str,
    pub total_label: &'static str,
    pub frameworks_heading: &'static str,
    pub filter_all: &'static str,
    pub filter_python: &'static str,
    pub filter_rust: &'static str,
    pub filter_frameworks: &'static str,
    pub phase_prefix: &'static str,
    pub compare_button: &'static str,
    pub close_button: &'static str,
    pub reset_button: &'static str,
    pub reset_prompt: &'static str,
    pub reset_confirm: &'static str,
    pub reset_cancel: &'static str,
    pub save_failed: &'static str,
}

const EN: UiText = UiText {
    progress_heading: "Your progress",
    completed_label: "Completed",
    total_label: "Total",
    frameworks_heading: "Frameworks",
    filter_all: "All",
    filter_python: "Python",
    filter_rust: "Rust",
    filter_frameworks: "Frameworks",
    phase_prefix: "Phase",
    compare_button: "Compare Python & Rust",
    close_button: "Close",
    reset_button: "Reset progress",
    reset_prompt: "Are you sure you want to reset all progress?",
    reset_confirm: "Reset",
    reset_cancel: "Cancel",
    save_failed: "Progress could not be saved.",
};

const RU: UiText = UiText {
    progress_heading: "Ваш прогресс",
    completed_label: "Выполнено",
    total_label: "Всего",
    frameworks_heading: "Фреймворки",
    filter_all: "Все",
    filter_python: "Python",
    filter_rust: "Rust",
    filter_frameworks: "Фреймворки",
    phase_prefix: "Этап",
    compare_button: "Сравнить Python и Rust",
    close_button: "Закрыть",
    reset_button: "Сбросить прогресс",
    reset_prompt: "Вы уверены, что хотите сбросить весь прогресс?",
    reset_confirm: "Сбросить",
    reset_cancel: "Отмена",
    save_failed: "Не удалось сохранить прогресс.",
};

impl UiText {
    #[must_use]
    pub fn for_locale(locale: Locale) -> &'static UiText {
        match locale {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

/// "X of Y completed" in the given locale.
#[must_use]
pub fn framework_count_label(locale: Locale, progress: FrameworkProgress) -> String {
    let FrameworkProgress { completed, total } = progress;
    match locale {
        Locale::En => format!("{completed} of {total} completed"),
        Locale::Ru => format!("{completed} из {total} изучено"),
    }
}
