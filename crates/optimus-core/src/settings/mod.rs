mod environment_config;
pub use self::environment_config::*;
mod optimus_config;
pub use self::optimus_config::*;
