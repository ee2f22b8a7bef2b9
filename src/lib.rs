//! Leveled key-value logging for services.
//!
//! ```no_run
//! use service_logger::{fields, ServiceLogger};
//!
//! let logger = ServiceLogger::new("auth");
//! logger.info(fields!["user_id" => 42, "msg" => "login"])?;
//!
//! let db = logger.with(fields!["component" => "db"]);
//! db.warn_msg("slow query")?;
//! # Ok::<(), service_logger::EmitError>(())
//! ```

pub mod caller;
pub mod color;
pub mod config;
pub mod env;
pub mod error;
pub mod field;
pub mod format;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;
pub mod timestamp;

pub mod memory_sink;
pub mod noop_sink;
pub mod writer_sink;

pub mod init;
pub mod layer;

pub use error::EmitError;
pub use field::{Field, Value};
pub use level::Level;
pub use logger::ServiceLogger;
