pub mod interact;
pub mod loader;
pub mod orchestrator;
pub mod page;
pub mod render;

pub use crate::domain::model::{Description, Portfolio};
pub use crate::domain::ports::{ConfigProvider, DataSource, Storage};
pub use crate::utils::error::Result;
