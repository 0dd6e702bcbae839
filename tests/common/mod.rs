use std::sync::Once;

static INIT: Once = Once::new();

/// Install a tracing subscriber once for the whole test binary, honoring
/// `RUST_LOG` so materialization traces can be inspected on demand.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
