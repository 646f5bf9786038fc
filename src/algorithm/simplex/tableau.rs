//! # Tableau
//!
//! Dense simplex tableau over the columns of a program in standard form, extended with slack,
//! surplus and artificial columns. Every row is kept in terms of the current basis, so the
//! constraint matrix always contains an identity submatrix at the basic columns.
use std::ops::Range;

use enum_map::{Enum, EnumMap};
use log::trace;
use num_traits::Zero;

use crate::algorithm::simplex::standard_form::StandardForm;
use crate::data::linear_program::elements::ConstraintRelation;
use crate::data::number_types::{OrderedField, OrderedFieldRef};

/// Origin of a tableau column.
#[derive(Copy, Clone, Debug, Enum, Eq, PartialEq)]
pub enum ColumnType {
    /// Column of the program in standard form.
    Structural,
    /// Added to a `<=` row.
    Slack,
    /// Subtracted from a `>=` row.
    Surplus,
    /// Initial basic column of a `>=` or `==` row, only present during phase one.
    Artificial,
}

/// Simplex tableau with a basic feasible solution.
#[derive(Clone, Debug)]
pub struct Tableau<F> {
    /// One dense row per constraint, in terms of the current basis.
    rows: Vec<Vec<F>>,
    /// Values of the basic variables.
    right_hand_side: Vec<F>,
    /// The column that is basic in each row.
    basis: Vec<usize>,
    /// Relative cost per column for the current cost function.
    relative_cost: Vec<F>,
    /// Value of the current cost function in the current basic solution.
    objective_value: F,
    columns: EnumMap<ColumnType, Range<usize>>,
}

/// The ratio test found no row to pivot on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Unbounded;

impl<F: OrderedField> Tableau<F>
where
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Create a tableau with a basis of slack and artificial columns.
    ///
    /// The cost function is zero until `set_cost` or `set_artificial_cost` is called.
    pub(super) fn new(form: &StandardForm<F>) -> Self {
        let count = |relation: ConstraintRelation| form.rows.iter().filter(|row| row.relation == relation).count();
        let nr_less = count(ConstraintRelation::Less);
        let nr_greater = count(ConstraintRelation::Greater);
        let nr_equal = count(ConstraintRelation::Equal);

        let structural_end = form.nr_columns();
        let slack_end = structural_end + nr_less;
        let surplus_end = slack_end + nr_greater;
        let artificial_end = surplus_end + nr_greater + nr_equal;
        let columns = EnumMap::from_fn(|column_type: ColumnType| match column_type {
            ColumnType::Structural => 0..structural_end,
            ColumnType::Slack => structural_end..slack_end,
            ColumnType::Surplus => slack_end..surplus_end,
            ColumnType::Artificial => surplus_end..artificial_end,
        });

        let mut next = EnumMap::from_fn(|column_type: ColumnType| columns[column_type].start);
        let mut take = |column_type: ColumnType| {
            next[column_type] += 1;
            next[column_type] - 1
        };

        let mut rows = Vec::with_capacity(form.rows.len());
        let mut basis = Vec::with_capacity(form.rows.len());
        for row in &form.rows {
            let mut dense = vec![F::zero(); artificial_end];
            for (column, value) in &row.coefficients {
                dense[*column] = value.clone();
            }

            let basic = match row.relation {
                ConstraintRelation::Less => take(ColumnType::Slack),
                ConstraintRelation::Greater => {
                    dense[take(ColumnType::Surplus)] = -F::one();
                    take(ColumnType::Artificial)
                },
                ConstraintRelation::Equal => take(ColumnType::Artificial),
            };
            dense[basic] = F::one();

            rows.push(dense);
            basis.push(basic);
        }

        Self {
            rows,
            right_hand_side: form.rows.iter().map(|row| row.right_hand_side.clone()).collect(),
            basis,
            relative_cost: vec![F::zero(); artificial_end],
            objective_value: F::zero(),
            columns,
        }
    }

    /// Minimize the sum of the artificial variables.
    pub(super) fn set_artificial_cost(&mut self) {
        let cost = (0..self.nr_columns())
            .map(|column| if self.is_artificial(column) { F::one() } else { F::zero() })
            .collect();
        self.set_cost(cost);
    }

    /// Replace the cost function, computing the relative costs with respect to the current basis.
    ///
    /// Columns beyond the length of `cost` have zero cost.
    pub(super) fn set_cost(&mut self, mut cost: Vec<F>) {
        debug_assert!(cost.len() <= self.nr_columns());
        cost.resize(self.nr_columns(), F::zero());

        let mut objective_value = F::zero();
        for (row, &basic) in self.basis.iter().enumerate() {
            let basic_cost = cost[basic].clone();
            if basic_cost.is_zero() {
                continue;
            }

            for (value, coefficient) in cost.iter_mut().zip(&self.rows[row]) {
                *value = &*value - &(&basic_cost * coefficient);
            }
            objective_value = objective_value + &basic_cost * &self.right_hand_side[row];
        }

        self.relative_cost = cost;
        self.objective_value = objective_value;
    }

    /// Leaving row for a column entering the basis.
    ///
    /// Among the rows attaining the minimum ratio, the one with the lowest basic column index is
    /// chosen.
    pub fn select_primal_pivot_row(&self, column: usize) -> Result<usize, Unbounded> {
        (0..self.nr_rows())
            .filter(|&row| self.rows[row][column] > F::zero())
            .map(|row| (row, &self.right_hand_side[row] / &self.rows[row][column]))
            .min_by(|(left, left_ratio), (right, right_ratio)| {
                left_ratio.cmp(right_ratio).then(self.basis[*left].cmp(&self.basis[*right]))
            })
            .map(|(row, _)| row)
            .ok_or(Unbounded)
    }

    /// Let `column` enter the basis in place of the variable basic in `row`.
    ///
    /// # Return value
    ///
    /// Whether the pivot was degenerate, that is, whether the basic solution stayed the same.
    pub fn pivot(&mut self, row: usize, column: usize) -> bool {
        debug_assert!(!self.rows[row][column].is_zero());
        trace!("Pivot on row {row}, column {column}, {} leaves the basis", self.basis[row]);

        let pivot = self.rows[row][column].clone();
        for value in &mut self.rows[row] {
            *value = &*value / &pivot;
        }
        self.right_hand_side[row] = &self.right_hand_side[row] / &pivot;

        let pivot_row = self.rows[row].clone();
        let pivot_value = self.right_hand_side[row].clone();
        for other in (0..self.nr_rows()).filter(|&other| other != row) {
            let factor = self.rows[other][column].clone();
            if factor.is_zero() {
                continue;
            }

            for (value, coefficient) in self.rows[other].iter_mut().zip(&pivot_row) {
                *value = &*value - &(&factor * coefficient);
            }
            self.right_hand_side[other] = &self.right_hand_side[other] - &(&factor * &pivot_value);
        }

        let factor = self.relative_cost[column].clone();
        if !factor.is_zero() {
            for (value, coefficient) in self.relative_cost.iter_mut().zip(&pivot_row) {
                *value = &*value - &(&factor * coefficient);
            }
            self.objective_value = &self.objective_value + &(&factor * &pivot_value);
        }

        self.basis[row] = column;

        pivot_value.is_zero()
    }

    /// Pivot artificial variables out of the basis after phase one, then delete their columns.
    ///
    /// Rows in which no other column can replace the artificial one are linear combinations of
    /// other rows, and they are deleted as well.
    ///
    /// Should only be called when the artificial variables are all zero.
    pub(super) fn remove_artificial(&mut self) {
        let artificial = self.columns[ColumnType::Artificial].clone();

        let mut row = 0;
        while row < self.nr_rows() {
            if artificial.contains(&self.basis[row]) {
                debug_assert!(self.right_hand_side[row].is_zero());

                let replacement = (0..artificial.start)
                    .find(|&column| !self.rows[row][column].is_zero());
                match replacement {
                    Some(column) => {
                        self.pivot(row, column);
                    },
                    None => {
                        trace!("Removing redundant row {row}");
                        self.rows.remove(row);
                        self.right_hand_side.remove(row);
                        self.basis.remove(row);
                        continue;
                    },
                }
            }
            row += 1;
        }

        for row in &mut self.rows {
            row.truncate(artificial.start);
        }
        self.relative_cost.truncate(artificial.start);
        self.columns[ColumnType::Artificial] = artificial.start..artificial.start;
    }

    /// Values of the structural columns in the current basic solution.
    pub(super) fn structural_values(&self) -> Vec<F> {
        let structural = self.columns[ColumnType::Structural].clone();

        let mut values = vec![F::zero(); structural.len()];
        for (row, &basic) in self.basis.iter().enumerate() {
            if structural.contains(&basic) {
                values[basic] = self.right_hand_side[row].clone();
            }
        }
        values
    }

    /// Relative cost of a column.
    pub fn relative_cost(&self, column: usize) -> &F {
        &self.relative_cost[column]
    }

    /// Value of the current cost function.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Whether a column is one of the artificial ones.
    pub fn is_artificial(&self, column: usize) -> bool {
        self.columns[ColumnType::Artificial].contains(&column)
    }

    /// Number of columns, artificial columns included while they exist.
    pub fn nr_columns(&self) -> usize {
        self.relative_cost.len()
    }

    /// Number of constraint rows.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns of a type.
    pub fn nr_columns_of_type(&self, column_type: ColumnType) -> usize {
        self.columns[column_type].len()
    }
}
