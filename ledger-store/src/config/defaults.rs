//! Default configuration values - single source of truth

/// Default database schema that tables live in
pub const SCHEMA: &str = "public";

/// Base name of the optional config file looked up by `StoreConfig::load`
pub const CONFIG_FILE: &str = "ledger-store";

/// Prefix of environment variable overrides (`LEDGER_DATABASE__SCHEMA`, ...)
pub const ENV_PREFIX: &str = "LEDGER";
