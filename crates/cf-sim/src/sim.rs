//! Grid-driven simulation runner and result recording.

use crate::error::SimResult;
use crate::grid::TimeGrid;
use crate::integrator::Integrator;
use crate::model::TransientModel;

/// Record of simulation results.
#[derive(Clone, Debug)]
pub struct SimRecord<S> {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// State snapshots
    pub x: Vec<S>,
}

impl<S> SimRecord<S> {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Integrate `model` across every sample of `grid`, recording each state.
///
/// Step `i` advances from `t[i-1]` using the spacing `t[i] - t[i-1]`, so the
/// record is aligned one-to-one with the grid and starts at the initial state.
pub fn run_on_grid<M, I>(
    model: &mut M,
    integrator: &I,
    grid: &TimeGrid,
) -> SimResult<SimRecord<M::State>>
where
    M: TransientModel,
    I: Integrator,
{
    let t = grid.samples();
    let mut x = model.initial_state();
    let mut x_record = Vec::with_capacity(t.len());
    x_record.push(x.clone());

    for i in 1..t.len() {
        x = integrator.step(model, t[i - 1], &x, grid.step(i))?;
        x_record.push(x.clone());
    }

    Ok(SimRecord {
        t: t.to_vec(),
        x: x_record,
    })
}
