//! # Standard form
//!
//! The tableau works with programs of the form `min c^T y` subject to `A y (<=, ==, >=) b` with
//! `y >= 0` and `b >= 0`. This module rewrites a general linear program into that form and
//! translates solutions back.
use crate::data::linear_algebra::{normalize, SparseTupleVec};
use crate::data::linear_program::elements::{ConstraintRelation, Objective};
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::{OrderedField, OrderedFieldRef};

/// How an original variable `x` is expressed in nonnegative standard form columns.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Substitution<F> {
    /// `x = lower + y`
    Shifted { lower: F, column: usize },
    /// `x = upper - y`
    Flipped { upper: F, column: usize },
    /// `x = y+ - y-`
    Split { positive: usize, negative: usize },
}

/// A row of the standard form, over the structural columns only.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Row<F> {
    pub coefficients: SparseTupleVec<F>,
    pub relation: ConstraintRelation,
    /// Never negative.
    pub right_hand_side: F,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct StandardForm<F> {
    /// Minimized, one value per structural column.
    pub cost: Vec<F>,
    pub rows: Vec<Row<F>>,
    substitutions: Vec<Substitution<F>>,
}

impl<F: OrderedField> StandardForm<F>
where
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Rewrite a program.
    ///
    /// # Return value
    ///
    /// `None` if the bounds of some variable describe an empty interval.
    pub fn new(program: &LinearProgram<F>) -> Option<Self> {
        let mut substitutions = Vec::with_capacity(program.nr_variables());
        let mut bound_rows = Vec::new();
        let mut nr_columns = 0;

        for variable in program.variables() {
            let substitution = match (&variable.lower_bound, &variable.upper_bound) {
                (Some(lower), upper) => {
                    let column = nr_columns;
                    nr_columns += 1;
                    if let Some(upper) = upper {
                        if upper < lower {
                            return None;
                        }
                        bound_rows.push(Row {
                            coefficients: vec![(column, F::one())],
                            relation: ConstraintRelation::Less,
                            right_hand_side: upper - lower,
                        });
                    }
                    Substitution::Shifted { lower: lower.clone(), column }
                },
                (None, Some(upper)) => {
                    nr_columns += 1;
                    Substitution::Flipped { upper: upper.clone(), column: nr_columns - 1 }
                },
                (None, None) => {
                    nr_columns += 2;
                    Substitution::Split { positive: nr_columns - 2, negative: nr_columns - 1 }
                },
            };
            substitutions.push(substitution);
        }

        let mut form = Self { cost: vec![F::zero(); nr_columns], rows: Vec::new(), substitutions };

        let (cost, _) = form.substitute(program.cost());
        for (column, value) in cost {
            form.cost[column] = match program.objective() {
                Objective::Maximize => -value,
                Objective::Minimize => value,
            };
        }

        for constraint in program.constraints() {
            let (coefficients, shift) = form.substitute(&constraint.coefficients);
            let row = Row {
                coefficients,
                relation: constraint.relation,
                right_hand_side: &constraint.right_hand_side - &shift,
            };
            form.rows.push(row);
        }
        form.rows.extend(bound_rows);

        for row in &mut form.rows {
            if row.right_hand_side < F::zero() {
                for (_, value) in &mut row.coefficients {
                    *value = -&*value;
                }
                row.relation = row.relation.flipped();
                row.right_hand_side = -&row.right_hand_side;
            }
        }

        Some(form)
    }

    /// Express a linear function of the original variables in the structural columns.
    ///
    /// # Return value
    ///
    /// The coefficients and the constant part of the function.
    fn substitute(&self, tuples: &[(usize, F)]) -> (SparseTupleVec<F>, F) {
        let mut coefficients = Vec::with_capacity(tuples.len());
        let mut constant = F::zero();

        for (variable, value) in tuples {
            match &self.substitutions[*variable] {
                Substitution::Shifted { lower, column } => {
                    coefficients.push((*column, value.clone()));
                    constant = constant + value * lower;
                },
                Substitution::Flipped { upper, column } => {
                    coefficients.push((*column, -value));
                    constant = constant + value * upper;
                },
                Substitution::Split { positive, negative } => {
                    coefficients.push((*positive, value.clone()));
                    coefficients.push((*negative, -value));
                },
            }
        }

        (normalize(coefficients), constant)
    }

    pub fn nr_columns(&self) -> usize {
        self.cost.len()
    }

    /// Values of the original variables, given values of the structural columns.
    pub fn to_original(&self, columns: &[F]) -> Vec<F> {
        debug_assert_eq!(columns.len(), self.nr_columns());

        self.substitutions.iter()
            .map(|substitution| match substitution {
                Substitution::Shifted { lower, column } => lower + &columns[*column],
                Substitution::Flipped { upper, column } => upper - &columns[*column],
                Substitution::Split { positive, negative } => &columns[*positive] - &columns[*negative],
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use num::rational::Rational64;

    use crate::algorithm::simplex::standard_form::StandardForm;
    use crate::data::linear_program::elements::{ConstraintRelation, Objective};
    use crate::data::linear_program::{LinearProgram, Variable};

    fn r(value: i64) -> Rational64 {
        Rational64::from_integer(value)
    }

    #[test]
    fn substitutions() {
        let mut program = LinearProgram::new("substitutions");
        let shifted = program.add_variable(Variable::continuous("shifted").with_lower_bound(r(2)).with_upper_bound(r(5)));
        let flipped = program.add_variable(Variable::continuous("flipped").with_upper_bound(r(1)));
        let free = program.add_variable(Variable::continuous("free"));
        program.add_constraint(
            "row",
            vec![(shifted, r(1)), (flipped, r(1)), (free, r(1))],
            ConstraintRelation::Less,
            r(1),
        );
        program.set_objective(Objective::Maximize, vec![(shifted, r(1)), (free, r(3))]);

        let form = StandardForm::new(&program).unwrap();
        assert_eq!(form.nr_columns(), 4);
        assert_eq!(form.cost, vec![r(-1), r(0), r(-3), r(3)]);

        // 2 + y0 + 1 - y1 + y2 - y3 <= 1 becomes -y0 + y1 - y2 + y3 >= 2
        assert_eq!(form.rows[0].coefficients, vec![(0, r(-1)), (1, r(1)), (2, r(-1)), (3, r(1))]);
        assert_eq!(form.rows[0].relation, ConstraintRelation::Greater);
        assert_eq!(form.rows[0].right_hand_side, r(2));
        // Upper bound of the shifted variable
        assert_eq!(form.rows[1].coefficients, vec![(0, r(1))]);
        assert_eq!(form.rows[1].right_hand_side, r(3));

        assert_eq!(form.to_original(&[r(1), r(2), r(0), r(4)]), vec![r(3), r(-1), r(-4)]);
    }

    #[test]
    fn empty_domain() {
        let mut program = LinearProgram::new("empty");
        program.add_variable(Variable::integer("x").with_lower_bound(r(2)).with_upper_bound(r(1)));
        assert_eq!(StandardForm::new(&program), None);
    }
}
