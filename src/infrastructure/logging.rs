//! Logging setup and the process-wide panic observer

use std::any::Any;
use std::panic::Location;

/// Initialize the tracing subscriber. `RUST_LOG` refines the default `info` level.
pub fn init() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();
}

/// Logs every panic through tracing. Panics inside gateway event tasks
/// only end that task, so the process keeps running. Panics later caught
/// with `catch_unwind`, such as a failing handler module factory, are
/// logged here as well before the caller reports them.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("{}", panic_report(info.location(), info.payload()));
    }));
}

fn panic_report(location: Option<&Location<'_>>, payload: &(dyn Any + Send)) -> String {
    let location = location
        .map(|l| format!("{}:{}", l.file(), l.line()))
        .unwrap_or_else(|| "unknown".to_string());
    format!("Panic at {}: {}", location, panic_message(payload))
}

/// Best-effort text of a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
