pub mod catalog;
pub mod ranking;
pub mod recommendations;

pub use catalog::{CatalogError, CatalogIndex, ItemPositionIndex};
pub use ranking::{rank_similar, top_similar, RankingError, ScoredIndex};
pub use recommendations::recommend;
