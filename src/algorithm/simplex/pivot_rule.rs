//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis. The leaving row is always chosen by
//! the ratio test of the tableau, independent of the strategy.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::{OrderedField, OrderedFieldRef};

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotRule<F> {
    /// Create a new instance, used for a single phase.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A column with a negative relative cost, `None` if there is none and the tableau is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<usize>;

    /// Called after every pivot.
    fn after_basis_update(&mut self, _was_degenerate: bool) {
    }
}

/// Simply pivot on the first column which has a negative relative cost.
///
/// Together with the ratio test of the tableau, this is Bland's rule, so it never cycles.
#[derive(Copy, Clone, Debug, Default)]
pub struct FirstProfitable;

impl<F: OrderedField> PivotRule<F> for FirstProfitable
where
    for<'r> &'r F: OrderedFieldRef<F>,
{
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        (0..tableau.nr_columns())
            .find(|&column| *tableau.relative_cost(column) < F::zero())
    }
}

/// Number of consecutive degenerate pivots after which `SteepestDescentAlongVariable` falls back
/// to `FirstProfitable`.
const DEGENERATE_PIVOT_LIMIT: usize = 8;

/// Pivot on the column with the most negative relative cost.
///
/// This tends to need fewer pivots, but it may cycle on degenerate problems. After a streak of
/// degenerate pivots, columns are selected as `FirstProfitable` does until the basic solution
/// changes again.
#[derive(Copy, Clone, Debug, Default)]
pub struct SteepestDescentAlongVariable {
    degenerate_streak: usize,
}

impl<F: OrderedField> PivotRule<F> for SteepestDescentAlongVariable
where
    for<'r> &'r F: OrderedFieldRef<F>,
{
    fn new() -> Self {
        Self { degenerate_streak: 0 }
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        if self.degenerate_streak >= DEGENERATE_PIVOT_LIMIT {
            return <FirstProfitable as PivotRule<F>>::new().select_primal_pivot_column(tableau);
        }

        (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|(_, cost)| **cost < F::zero())
            // Ties go to the lowest column index
            .min_by(|(left, left_cost), (right, right_cost)| left_cost.cmp(right_cost).then(left.cmp(right)))
            .map(|(column, _)| column)
    }

    fn after_basis_update(&mut self, was_degenerate: bool) {
        if was_degenerate {
            self.degenerate_streak += 1;
        } else {
            self.degenerate_streak = 0;
        }
    }
}
