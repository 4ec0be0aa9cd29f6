/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// |total_real_pct| below this classifies as BREAK_EVEN.
    pub break_even_tolerance: f64,
    /// When true, non-positive or non-finite prices are dropped with a
    /// warning; when false they abort the computation.
    pub drop_invalid_prices: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            break_even_tolerance: 1e-9,
            drop_invalid_prices: true,
        }
    }
}
