//! ytree-util constants.

/// Decimal places used by `fround` when the caller has no preference.
pub const DEFAULT_DECIMALS: i32 = 0;

/// Bytes read per block by the text block reader.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Line separator used by the text block reader.
pub const DEFAULT_SEPARATOR: u8 = b'\n';

/// Number of decimals halo catalogs use when printing redshifts into file names.
pub const REDSHIFT_PRECISION: usize = 3;

/// Environment variable overriding the test data directory.
pub const TEST_DATA_DIR_ENV: &str = "YTREE_TEST_DATA_DIR";

/// Environment variable naming the configuration directory.
pub const CONFIG_DIR_ENV: &str = "XDG_CONFIG_HOME";

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "ytreerc";

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "YTREE_LOG";

/// Name printed at the start of every log line.
pub const LOGGER_NAME: &str = "ytree";
