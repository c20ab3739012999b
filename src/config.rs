/// Knobs for [`Solver`](crate::solver::Solver). The default runs the plain
/// search: no closed set, boards may be expanded more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Remember expanded boards per track and never expand one twice.
    /// Trades memory for fewer expansions; the move count is unchanged.
    pub closed_set: bool,
}

impl SolverConfig {
    pub fn with_closed_set(mut self, enabled: bool) -> Self {
        self.closed_set = enabled;
        self
    }
}
