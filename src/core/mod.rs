pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{District, Neighborhood, Province, ScrapeResult, ScrapeSummary};
pub use crate::domain::ports::{Pipeline, Storage, Transport};
pub use crate::utils::error::Result;
