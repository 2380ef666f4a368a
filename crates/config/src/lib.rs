//! CDP Configuration
//!
//! Settings, secret-aware configurable values, loading, and startup logging
//! for the CDP SDK.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	ApiSettings, LogFormat, LoggingSettings, RpcSettings, Settings, TimeoutSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown};
