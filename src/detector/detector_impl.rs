use crate::error::MatrixError;
use crate::matrix::{Exponentiator, Matrix};
use crate::pipeline::Multiplier;

/// Result of one cycle analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleAnalysis {
    adjacency: Matrix,
    walks: Matrix,
    power: usize,
    trace: i64,
}

impl CycleAnalysis {
    /// The matrix that was analysed.
    pub fn adjacency(&self) -> &Matrix {
        &self.adjacency
    }

    /// `A^n`, the closed-walk counts.
    pub fn walks(&self) -> &Matrix {
        &self.walks
    }

    pub fn power(&self) -> usize {
        self.power
    }

    pub fn trace(&self) -> i64 {
        self.trace
    }

    pub fn is_cyclic(&self) -> bool {
        self.trace != 0
    }
}

/// Detects cycles by exponentiating adjacency matrices.
pub struct CycleDetector {
    multiplier: Multiplier,
    analysis: Option<CycleAnalysis>,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    /// Create a detector that uses one pipeline worker per available core.
    pub fn new() -> Self {
        Self::with_multiplier(Multiplier::default())
    }

    pub fn with_workers(workers: usize) -> Self {
        Self::with_multiplier(Multiplier::new(workers))
    }

    pub fn with_multiplier(multiplier: Multiplier) -> Self {
        Self {
            multiplier,
            analysis: None,
        }
    }

    pub fn workers(&self) -> usize {
        self.multiplier.workers()
    }

    /// Analyse `adjacency`, which should be square.
    ///
    /// A non-square matrix fails on the first multiplication with
    /// [`MatrixError::IncompatibleDimensions`]. A single-node matrix needs no
    /// multiplication at all.
    pub fn detect_cycles(&mut self, adjacency: &Matrix) -> Result<(), MatrixError> {
        self.detect_cycles_with_progress(adjacency, |_, _| {})
    }

    /// Like [`Self::detect_cycles`], calling `on_step(done, total)` after each
    /// multiplication.
    pub fn detect_cycles_with_progress<F>(
        &mut self,
        adjacency: &Matrix,
        on_step: F,
    ) -> Result<(), MatrixError>
    where
        F: FnMut(usize, usize),
    {
        self.analysis = None;

        let power = adjacency.rows();
        let exponent = i64::try_from(power)
            .map_err(|_| MatrixError::InvalidPower { power: i64::MAX })?;
        let walks = Exponentiator::new(&self.multiplier).raise_with_progress(
            adjacency,
            exponent,
            on_step,
        )?;
        let trace = walks.trace();

        self.analysis = Some(CycleAnalysis {
            adjacency: adjacency.clone(),
            walks,
            power,
            trace,
        });
        Ok(())
    }

    pub fn analysis(&self) -> Option<&CycleAnalysis> {
        self.analysis.as_ref()
    }

    /// Whether the last analysis found a cycle. `false` before any analysis.
    pub fn has_cycles(&self) -> bool {
        self.analysis.as_ref().is_some_and(CycleAnalysis::is_cyclic)
    }

    /// Nodes that lie on a closed walk of length `n`, i.e. the nonzero
    /// diagonal positions of `A^n`.
    pub fn cyclic_nodes(&self) -> Vec<usize> {
        let Some(analysis) = &self.analysis else {
            return Vec::new();
        };

        (0..analysis.walks.rows().min(analysis.walks.columns()))
            .filter(|&i| analysis.walks.get(i, i).is_some_and(|v| v != 0))
            .collect()
    }
}

/// `true` when the graph encoded by `adjacency` has a closed walk of length
/// `n`, where `n` is the number of nodes.
pub fn is_cyclic(adjacency: &Matrix) -> Result<bool, MatrixError> {
    let mut detector = CycleDetector::new();
    detector.detect_cycles(adjacency)?;
    Ok(detector.has_cycles())
}
