//! Pre-allocated workspace buffers for Monte Carlo simulation.
//!
//! [`PathWorkspace`] owns the three buffers of one simulation batch, all in
//! row-major contiguous layout:
//!
//! - `randoms`: n_paths x n_steps antithetic standard-normal draws
//! - `paths`: n_paths x n_steps simulated prices (the initial spot is not
//!   stored; entry 0 of a row is the price after the first step)
//! - `payoffs`: one scalar per path
//!
//! Buffers are allocated once and reused across pricing calls; the batch
//! itself is transient and overwritten on the next call, bounding peak
//! memory at `O(num_simulations * n_steps)` doubles.

/// Pre-allocated workspace for one simulation batch.
///
/// # Examples
///
/// ```rust
/// use engine_pricing::mc::PathWorkspace;
///
/// let mut workspace = PathWorkspace::new(1000, 252);
/// assert_eq!(workspace.randoms_mut().len(), 1000 * 252);
/// ```
pub struct PathWorkspace {
    /// Random normal samples (n_paths x n_steps).
    randoms: Vec<f64>,
    /// Simulated prices (n_paths x n_steps).
    paths: Vec<f64>,
    /// Payoff values per path (n_paths).
    payoffs: Vec<f64>,
    /// Current capacity for the path dimension.
    capacity_paths: usize,
    /// Current capacity for the step dimension.
    capacity_steps: usize,
    /// Logical size for the path dimension.
    size_paths: usize,
    /// Logical size for the step dimension.
    size_steps: usize,
}

impl PathWorkspace {
    /// Creates a workspace sized for `n_paths` paths of `n_steps` steps.
    pub fn new(n_paths: usize, n_steps: usize) -> Self {
        let matrix_size = n_paths * n_steps;

        Self {
            randoms: vec![0.0; matrix_size],
            paths: vec![0.0; matrix_size],
            payoffs: vec![0.0; n_paths],
            capacity_paths: n_paths,
            capacity_steps: n_steps,
            size_paths: n_paths,
            size_steps: n_steps,
        }
    }

    /// Ensures capacity for the given dimensions, growing with a doubling
    /// strategy. Never shrinks, so alternating simulation sizes do not
    /// reallocate repeatedly.
    pub fn ensure_capacity(&mut self, n_paths: usize, n_steps: usize) {
        let needs_growth = n_paths > self.capacity_paths || n_steps > self.capacity_steps;

        if needs_growth {
            let new_capacity_paths = n_paths.max(self.capacity_paths * 2);
            let new_capacity_steps = n_steps.max(self.capacity_steps * 2);
            let matrix_size = new_capacity_paths * new_capacity_steps;

            self.randoms.resize(matrix_size, 0.0);
            self.paths.resize(matrix_size, 0.0);
            self.payoffs.resize(new_capacity_paths, 0.0);

            self.capacity_paths = new_capacity_paths;
            self.capacity_steps = new_capacity_steps;
        }

        self.size_paths = n_paths;
        self.size_steps = n_steps;
    }

    /// Returns the current path capacity.
    #[inline]
    pub fn capacity_paths(&self) -> usize {
        self.capacity_paths
    }

    /// Returns the current step capacity.
    #[inline]
    pub fn capacity_steps(&self) -> usize {
        self.capacity_steps
    }

    /// Returns the random sample matrix for the logical batch size.
    #[inline]
    pub fn randoms(&self) -> &[f64] {
        &self.randoms[..self.size_paths * self.size_steps]
    }

    /// Returns the mutable random sample matrix for the logical batch size.
    #[inline]
    pub fn randoms_mut(&mut self) -> &mut [f64] {
        let len = self.size_paths * self.size_steps;
        &mut self.randoms[..len]
    }

    /// Returns the simulated price matrix for the logical batch size.
    #[inline]
    pub fn paths(&self) -> &[f64] {
        &self.paths[..self.size_paths * self.size_steps]
    }

    /// Returns the mutable price matrix together with the random matrix.
    ///
    /// Split borrow so path generation can read randoms while writing paths.
    #[inline]
    pub fn paths_mut_and_randoms(&mut self) -> (&mut [f64], &[f64]) {
        let len = self.size_paths * self.size_steps;
        (&mut self.paths[..len], &self.randoms[..len])
    }

    /// Returns the payoff vector for the logical batch size.
    #[inline]
    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs[..self.size_paths]
    }

    /// Returns the mutable payoff vector together with the price matrix.
    #[inline]
    pub fn payoffs_mut_and_paths(&mut self) -> (&mut [f64], &[f64]) {
        let matrix_len = self.size_paths * self.size_steps;
        (
            &mut self.payoffs[..self.size_paths],
            &self.paths[..matrix_len],
        )
    }

    /// Returns total memory held by the buffers in bytes.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        (self.randoms.capacity() + self.paths.capacity() + self.payoffs.capacity())
            * std::mem::size_of::<f64>()
    }
}
