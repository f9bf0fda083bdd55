//! Escape-risk and binding-strength estimation.
//!
//! Positional entropy enters the model through the conservation proxy (see
//! `conservation`); the combination step itself is a function of the
//! conservation score and GC content only. That structure is what makes the
//! core invariant hold by construction: for fixed GC content, escape
//! probability is monotonically non-increasing in conservation score.

use crate::conservation::RUN_FREE_LIMIT;

/// Center of the biologically typical GC band, on the 0-100 scale.
pub const GC_OPTIMUM: f64 = 50.0;

/// Combination weights for the escape probability.
pub const ESCAPE_WEIGHT_CONSERVATION: f64 = 0.7;
pub const ESCAPE_WEIGHT_GC_BAND: f64 = 0.3;

/// Combination weights for the binding-strength estimate.
pub const BIND_WEIGHT_GC: f64 = 0.3;
pub const BIND_WEIGHT_RUN: f64 = 0.2;
const BIND_RUN_STEP: f64 = 0.1;

/// Estimated probability that mutation at the target site defeats
/// recognition over time, in [0, 1]. Penalizes GC content away from the
/// typical ~40-60% band; higher conservation lowers the estimate.
pub fn escape_probability(conservation_score: f64, gc_percent: f64) -> f64 {
    let gc_band = (1.0 - (gc_percent - GC_OPTIMUM).abs() / GC_OPTIMUM).clamp(0.0, 1.0);
    let escape =
        1.0 - (ESCAPE_WEIGHT_CONSERVATION * conservation_score + ESCAPE_WEIGHT_GC_BAND * gc_band);
    escape.clamp(0.0, 1.0)
}

/// Binding-strength estimate in [0, 1]: a complementary function of GC
/// content and absence of homopolymer runs, independent of escape
/// probability.
pub fn binding_strength(gc_percent: f64, longest_run: usize) -> f64 {
    let gc_penalty = ((gc_percent - GC_OPTIMUM).abs() / GC_OPTIMUM).clamp(0.0, 1.0);
    let run_excess =
        (BIND_RUN_STEP * longest_run.saturating_sub(RUN_FREE_LIMIT) as f64).min(1.0);
    (1.0 - BIND_WEIGHT_GC * gc_penalty - BIND_WEIGHT_RUN * run_excess).clamp(0.0, 1.0)
}
