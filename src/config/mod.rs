mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{Config, DEFAULT_INCLUDE, DEFAULT_ROOT, RulesConfig, ScannerConfig};
