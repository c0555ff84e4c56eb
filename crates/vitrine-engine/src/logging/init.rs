use std::sync::Once;

// wgpu's internals log per-frame under some backends; mute them so the
// animation loop stays readable at the default level.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are no-ops.
///
/// A `RUST_LOG` value replaces the default filter entirely, using the
/// `env_logger` filter syntax (e.g. "vitrine_engine=debug,wgpu_core=warn").
/// Intended usage is early in `main`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

        env_logger::Builder::new().parse_filters(&filter).init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging();
        init_logging();
    }
}
