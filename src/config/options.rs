//! API options for the divide-and-conquer multiply.

/// Strassen multiply parameters.
#[derive(Debug, Clone, Copy)]
pub struct StrassenOptions {
    /// Subproblem size at which recursion defers to the naive multiply.
    /// Must be at least 2.
    pub crossover: usize,
}

impl Default for StrassenOptions {
    fn default() -> Self {
        // below this size the seven-product recursion costs more than it saves
        Self { crossover: 64 }
    }
}
