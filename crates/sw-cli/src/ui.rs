use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs {
        progress: progress_enabled(flags, std::io::stderr().is_terminal()),
    });
}

const fn progress_enabled(flags: &GlobalFlags, is_tty: bool) -> bool {
    is_tty && !flags.quiet && !matches!(flags.format, OutputFormat::Json | OutputFormat::Raw)
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { progress: false })
}
