//! Configuration management for the tack application.
//!
//! This crate handles loading, validating, and persisting configuration.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`logging`]: Log level and log file settings
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Command line (`--config <path>`, `--data-dir <path>`), applied by the
//!    binary
//! 2. Local config (`./tack.json5` or `./tack.json`)
//! 3. User config (`~/.config/tack/config.json5` or `~/.config/tack/config.json`)
//! 4. Built-in defaults
//!
//! # Format
//!
//! ```json5
//! {
//!   storage: { data_dir: "/home/me/Sync/tack" },
//!   logging: { level: "debug", file: "/tmp/tack.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use tack_config::Config;
//!
//! # fn example() -> tack_config::Result<()> {
//! let config = Config::load()?;
//! println!("Logging at {} to {}", config.logging.level, config.log_file()?.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::{Config, StorageConfig};
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
