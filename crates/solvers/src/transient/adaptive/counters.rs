/// Running tallies of controller activity.
///
/// Counters start at zero for every run and only ever increase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Attempted steps, including rejected and rolled-back ones.
    pub steps: usize,

    /// Committed steps.
    pub accepted: usize,

    /// Step-size halvings, from error rejections and arc-length rollbacks.
    pub rejected: usize,

    /// Step-size doublings after a grow verdict.
    pub doubled: usize,
}
