#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! Test helpers for the recast workspace.
//!
//! `setup()` installs a colored stderr logger and the color-eyre report hook.
//! `#[recast_testhelpers::test]` calls it for you and lets the test body use `?`.
//!
//! The log level is read from `RECAST_LOG` (`off`, `error`, `warn`, `info`,
//! `debug`, `trace`) and defaults to `trace`.

pub use color_eyre::eyre;
pub use recast_testhelpers_macros::test;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::{OwoColorize, Style};
use std::io::Write;
use std::sync::Once;

/// Environment variable holding the log level used by tests
pub const LOG_ENV: &str = "RECAST_LOG";

struct TestLogger;

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_style = match record.level() {
            Level::Error => Style::new().fg_rgb::<243, 139, 168>(),
            Level::Warn => Style::new().fg_rgb::<249, 226, 175>(),
            Level::Info => Style::new().fg_rgb::<166, 227, 161>(),
            Level::Debug => Style::new().fg_rgb::<137, 180, 250>(),
            Level::Trace => Style::new().fg_rgb::<148, 226, 213>(),
        };

        eprintln!(
            "{} - {}: {}",
            record.level().style(level_style),
            record.target().style(Style::new().dimmed()),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Reads the test log level from [`LOG_ENV`], falling back to `trace`
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Trace)
}

/// Installs color-eyre (except on miri) and the test logger. Safe to call from every test.
pub fn setup() {
    static SETUP: Once = Once::new();

    SETUP.call_once(|| {
        #[cfg(not(miri))]
        install_eyre_hook();

        if log::set_boxed_logger(Box::new(TestLogger)).is_ok() {
            log::set_max_level(level_from_env());
        }
    });
}

#[cfg(not(miri))]
fn install_eyre_hook() {
    use color_eyre::config::HookBuilder;
    use regex::Regex;
    use std::sync::LazyLock;

    /// Panic machinery and test-runner frames, hidden from error reports
    static IGNORE_FRAMES: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^(std::panic|core::panic|test::run_test|std::sys::(pal|backtrace)|std::thread::Builder|core::ops::function|test::__rust_begin_short_backtrace|<alloc::boxed::Box<F,A> as core::ops::function::FnOnce<Args>>::call_once)")
            .expect("frame filter regex is valid")
    });

    let filter = move |frames: &mut Vec<&color_eyre::config::Frame>| {
        frames.retain(|frame| {
            frame
                .name
                .as_ref()
                .map(|name| !IGNORE_FRAMES.is_match(&name.to_string()))
                .unwrap_or(true)
        });
    };

    // another test harness may have installed a hook already
    let _ = HookBuilder::default()
        .add_frame_filter(Box::new(filter))
        .install();
}
