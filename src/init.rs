use crate::layer::ServiceLoggerLayer;
use crate::logger::ServiceLogger;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Configuration of the `tracing` bridge.
///
/// **Fields**
/// - `min_level`: events less severe than this are dropped before they
///   reach the logger.
/// - `include_target`: if `true`, each record gets a `target` field with
///   the event's module target.
#[derive(Clone, Debug)]
pub struct LayerConfig {
    pub min_level: tracing::Level,
    pub include_target: bool,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            min_level: tracing::Level::TRACE,
            include_target: false,
        }
    }
}

/// Build the [`ServiceLoggerLayer`] described by `config`.
pub fn layer_with_config(logger: ServiceLogger, config: LayerConfig) -> ServiceLoggerLayer {
    ServiceLoggerLayer::new(logger)
        .with_min_level(config.min_level)
        .with_target(config.include_target)
}

/// Install a global `tracing` subscriber that forwards every event to
/// `logger`.
///
/// **Parameters**
/// - `logger`: the [`ServiceLogger`] receiving the events, including its
///   derived fields.
/// - `config`: [`LayerConfig`] controlling filtering.
///
/// **Returns**
/// - `Err(..)` if a global subscriber was already installed.
pub fn init_tracing_with_config(
    logger: ServiceLogger,
    config: LayerConfig,
) -> Result<(), SetGlobalDefaultError> {
    let subscriber = Registry::default().with(layer_with_config(logger, config));
    tracing::subscriber::set_global_default(subscriber)
}

/// Initialize the `tracing` bridge with [`LayerConfig::default`].
pub fn init_tracing(logger: ServiceLogger) -> Result<(), SetGlobalDefaultError> {
    init_tracing_with_config(logger, LayerConfig::default())
}
