pub mod accumulate;
pub mod common;
pub mod config;
pub mod deflate;
pub mod engine;
pub mod normalize;
pub mod provider;
pub mod result;
pub mod series;

pub use common::enums::Outcome;
pub use common::error::{RealReturnError, SeriesKind};
pub use common::period::Period;
pub use config::engine_config::EngineConfig;
pub use engine::engine::{compute_real_return, RealReturnEngine};
pub use result::assembler::RealReturnResult;
pub use series::point::{InflationPoint, PricePoint};
