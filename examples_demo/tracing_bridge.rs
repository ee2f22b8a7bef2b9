use service_logger::config::LoggerConfig;
use service_logger::init::init_tracing;
use service_logger::{fields, ServiceLogger};
use tracing::{error, info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logger = ServiceLogger::with_config("auth", LoggerConfig::from_env());
    init_tracing(logger.with(fields!["source" => "tracing"]))?;

    info!("starting service");
    warn!(pool_size = 2, "connection pool nearly exhausted");
    error!(user_id = 42, reason = "invalid password", "authentication failed");

    logger.stage_msg("direct calls still work alongside the bridge")?;
    Ok(())
}
