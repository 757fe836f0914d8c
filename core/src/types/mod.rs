pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, SearchSettings, SiteConfig};

pub(crate) mod post;
pub use post::{PostEntry, PostEntryError, PostName, PostNameError, PostPath, PostPathError};
