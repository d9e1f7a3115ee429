pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{storage::LocalStorage, CliConfig};

pub use crate::core::interact::Interactions;
pub use crate::core::loader::{FileSource, HttpSource};
pub use crate::core::orchestrator::{Phase, SiteEngine, ERROR_NOTICE};
pub use crate::core::page::{Element, NodeId, Page};
pub use crate::domain::model::{Description, Portfolio};
pub use crate::domain::ports::{ConfigProvider, DataSource, Storage};
pub use crate::utils::error::{DataLoadError, PortfolioError, Result};
