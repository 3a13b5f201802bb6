// Logging
//
// RUST_LOG 优先；否则生产模式 info，开发模式 debug

use tracing_subscriber::EnvFilter;

use crate::shared::RuntimeMode;

pub fn default_directive(mode: RuntimeMode) -> &'static str {
    match mode {
        RuntimeMode::Development => "debug",
        RuntimeMode::Production => "info",
    }
}

pub fn init(mode: RuntimeMode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(mode)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_by_mode() {
        assert_eq!(default_directive(RuntimeMode::Production), "info");
        assert_eq!(default_directive(RuntimeMode::Development), "debug");
    }
}
