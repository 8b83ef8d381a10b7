//! Module that contains utility functions for fault injection in test code

/// Decides when a [`Fault`] triggers, counted in successful entropy draws
#[derive(Debug, Clone)]
pub enum When {
    Always,
    Never,
    /// Succeed this many times, then fail every following draw
    After(usize),
}

/// A fault is an error that is returned based on the [`When`]
#[derive(Clone, Debug)]
pub struct Fault {
    pub when: When,
}

impl Fault {
    /// Returns true if the draw that follows `completed` successful ones must fail
    pub fn triggers(&self, completed: usize) -> bool {
        match self.when {
            When::Always => true,
            When::Never => false,
            When::After(n) => completed >= n,
        }
    }
}

impl Default for Fault {
    fn default() -> Self {
        Self { when: When::Never }
    }
}
