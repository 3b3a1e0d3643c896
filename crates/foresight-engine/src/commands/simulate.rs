//! Scenario simulation command
//!
//! Every call builds its own `StdRng`, so concurrent callers never share a
//! random source. The seed is either supplied (reproducible runs) or drawn
//! fresh and reported back so any run can be replayed.

use crate::commands::elapsed_ms;
use crate::errors::{command_error, Result};
use foresight_core::config::SimulationConfig;
use foresight_core::{log_op_end, log_op_error, log_op_start};
use foresight_core::{ScenarioBatch, ScenarioGenerator};
use foresight_core_types::schema::OP_SIMULATE;
use foresight_core_types::RequestContext;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// What the caller asked for
#[derive(Debug, Clone, Default)]
pub struct SimulateRequest {
    /// Number of scenarios; `None` uses the configured default
    pub count: Option<i64>,
    /// Seed override; takes precedence over the configured seed
    pub seed: Option<u64>,
}

/// A ranked batch plus the seed that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    pub seed: u64,
    pub scenarios: ScenarioBatch,
}

/// Generate a ranked scenario batch
///
/// # Errors
///
/// - `InvalidArgument`: count is not positive, or the configured
///   distributions cannot be sampled
pub fn simulate(
    ctx: &RequestContext,
    config: &SimulationConfig,
    request: &SimulateRequest,
) -> Result<SimulationOutcome> {
    let count = request
        .count
        .unwrap_or_else(|| i64::from(config.default_count));
    let seed = request
        .seed
        .or(config.seed)
        .unwrap_or_else(|| rand::thread_rng().gen());

    log_op_start!(OP_SIMULATE, ctx, scenario_count = count, seed = seed);
    let start = std::time::Instant::now();

    let result = config
        .generator()
        .and_then(|generator| generator.generate(&mut StdRng::seed_from_u64(seed), count))
        .map_err(|e| {
            let err = command_error(OP_SIMULATE, ctx, e);
            log_op_error!(OP_SIMULATE, ctx, err.clone(), duration_ms = elapsed_ms(start));
            err
        })?;

    log_op_end!(
        OP_SIMULATE,
        ctx,
        duration_ms = elapsed_ms(start),
        scenario_count = result.len() as u64
    );

    Ok(SimulationOutcome {
        seed,
        scenarios: result,
    })
}

/// Generate a ranked batch from a caller-owned random source
///
/// For callers that manage their own RNG (simulation harnesses, tests).
///
/// # Errors
///
/// - `InvalidArgument`: count is not positive
pub fn simulate_with_rng<R: Rng + ?Sized>(
    ctx: &RequestContext,
    generator: &ScenarioGenerator,
    rng: &mut R,
    count: i64,
) -> Result<ScenarioBatch> {
    log_op_start!(OP_SIMULATE, ctx, scenario_count = count);
    let start = std::time::Instant::now();

    let batch = generator.generate(rng, count).map_err(|e| {
        let err = command_error(OP_SIMULATE, ctx, e);
        log_op_error!(OP_SIMULATE, ctx, err.clone(), duration_ms = elapsed_ms(start));
        err
    })?;

    log_op_end!(
        OP_SIMULATE,
        ctx,
        duration_ms = elapsed_ms(start),
        scenario_count = batch.len() as u64
    );

    Ok(batch)
}
