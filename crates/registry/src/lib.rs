pub mod config;
pub mod error;
pub mod registry;
pub mod snapshot;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use registry::Registry;
pub use snapshot::SharedRegistry;
