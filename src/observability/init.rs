use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "Quotebook";
const TRACE_FILE: &str = "quotebook-otlp.json";

/// Installs the global subscriber that exports spans to
/// `<config.data_dir>/quotebook-otlp.json`.
///
/// `config.trace_level` is an `EnvFilter` directive such as `"debug"` or
/// `"quotebook::storage=trace"`. An invalid directive falls back to `info`.
///
/// Tracing is optional: if the data directory cannot be created nothing is
/// installed. Later calls are no-ops once a subscriber is set.
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider =
        tracer::create_tracer_provider(config.data_dir.join(TRACE_FILE), resource, SERVICE_NAME);
    let layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    if tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
    {
        tracing::info!(level = %config.trace_level, "tracing initialized");
    }
}
