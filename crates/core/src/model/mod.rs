mod category;
mod format;
mod ids;
mod item;
mod pool;
mod result;

pub use category::{Category, CategoryError};
pub use format::{CategoryQuotas, CategoryThresholds, ExamFormat, FormatError};
pub use ids::{ItemId, ParseIdError};
pub use item::{Difficulty, Item, ItemDraft, ItemError};
pub use pool::{ItemPool, PoolError};
pub use result::{CategoryScore, ExamResult, ResultError};
