/// Loop-Carried Dependency Feature
///
/// Pairs array writes against reads of the same array and reports the pairs
/// whose index expressions may refer to the same element in different
/// iterations.
///
/// ## Algorithm
/// 1. Extract loops and array accesses (extraction feature)
/// 2. Group accesses by array name, first-seen order
/// 3. Test every (write, read) pair with `indices_can_overlap`
/// 4. Estimate the symbolic overlap iteration with `calculate_overlap_point`
///
/// ## Note
/// The overlap test is a textual heuristic. It is intentionally not sound and
/// must stay reproducible: callers depend on its exact three-way distance.
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
