use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Qualitative classification of a real-return outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    RealGain,
    RealLoss,
    BreakEven,
}
