// Panic Guard
//
// 全局 panic hook：把未捕获的 panic 交给 UncaughtErrorReporter，
// 策略为 Terminate 时以退出码 1 结束进程

use std::any::Any;
use std::panic::Location;
use std::sync::Arc;

use crate::modules::update::{ErrorDisposition, UncaughtErrorReporter};

pub fn install(reporter: Arc<UncaughtErrorReporter>) {
    tracing::debug!("Installing panic hook with policy {:?}", reporter.policy());

    std::panic::set_hook(Box::new(move |info| {
        let message = describe(info.payload(), info.location());
        if reporter.report(&message) == ErrorDisposition::Terminate {
            std::process::exit(1);
        }
    }));
}

fn describe(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());

    match location {
        Some(location) => format!("{} ({}:{})", message, location.file(), location.line()),
        None => message,
    }
}
