pub mod aggregate;
pub mod etl;
pub mod extractor;
pub mod pipeline;
pub mod resolver;
pub mod slug;
pub mod writer;

pub use crate::domain::model::{Card, RecommendationSet, ResultDocument, SynergyEntry};
pub use crate::domain::ports::{
    CardDatabase, ConfigProvider, MissingCommanderPolicy, Pipeline, RecommendationSource, Storage,
};
pub use crate::utils::error::Result;
