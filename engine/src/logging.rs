/// Install `env_logger` as the `log` backend.
///
/// `RUST_LOG` overrides `default_filter`. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init();
}
