/*!
 * Progress reporting while the document is written
 */

/// Trait for receiving progress updates as a percentage in `0..=100`
pub trait ProgressReporter {
    /// Called after each file has been fully written
    fn report(&mut self, percent: u8);
}

// Implement ProgressReporter for closures
impl<F> ProgressReporter for F
where
    F: FnMut(u8),
{
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

/// Reporter that discards every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _percent: u8) {}
}

/// Completed-file counter for one run
#[derive(Debug, Clone)]
pub struct Progress {
    /// Number of files to write
    pub total: usize,
    /// Number of files fully written
    pub completed: usize,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self { total, completed: 0 }
    }

    /// Record one written file and return the new percentage
    pub fn advance(&mut self) -> u8 {
        self.completed += 1;
        self.percentage()
    }

    /// Get the progress percentage, capped at 100
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }

        ((self.completed * 100) / self.total).min(100) as u8
    }
}
