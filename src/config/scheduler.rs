/// Schedulers, for analysis of recent reasons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduler {
    /// Analyse the batch of recent reasons every `conflict` conflicts.
    ///
    /// `None` (or `Some(0)`) disables scheduled analysis.
    pub conflict: Option<u32>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Scheduler {
            conflict: Some(50_000),
        }
    }
}
