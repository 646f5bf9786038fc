//! # Representing linear programs
//!
//! A `LinearProgram` is built incrementally: variables are created first, after which constraints
//! and an objective function can be expressed in terms of their indices. It is the representation
//! handed to the solvers in `algorithm`.
use std::fmt;

use itertools::Itertools;
use num_traits::Zero;

use crate::data::linear_algebra::{normalize, SparseTupleVec};
use crate::data::linear_program::elements::{BoundDirection, ConstraintRelation, Objective, VariableType};
use crate::data::number_types::{OrderedField, OrderedFieldRef};

pub mod elements;
pub mod solution;

/// A decision variable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Variable<F> {
    /// Name used when printing the program.
    pub name: String,
    /// Whether the variable may take fractional values.
    pub variable_type: VariableType,
    /// `None` means unbounded below.
    pub lower_bound: Option<F>,
    /// `None` means unbounded above.
    pub upper_bound: Option<F>,
}

impl<F> Variable<F> {
    /// A free continuous variable.
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variable_type: VariableType::Continuous,
            lower_bound: None,
            upper_bound: None,
        }
    }

    /// A free integer variable.
    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Integer,
            ..Self::continuous(name)
        }
    }

    /// Set the lower bound.
    #[must_use]
    pub fn with_lower_bound(mut self, bound: F) -> Self {
        self.lower_bound = Some(bound);
        self
    }

    /// Set the upper bound.
    #[must_use]
    pub fn with_upper_bound(mut self, bound: F) -> Self {
        self.upper_bound = Some(bound);
        self
    }
}

/// A linear (in)equality `<coefficients, x> relation right_hand_side`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint<F> {
    /// Name used when printing the program.
    pub name: String,
    /// Sorted by variable index, no zero values.
    pub coefficients: SparseTupleVec<F>,
    /// How the left-hand side relates to the right-hand side.
    pub relation: ConstraintRelation,
    /// Constant on the right.
    pub right_hand_side: F,
}

/// A linear program with named variables and constraints.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearProgram<F> {
    name: String,
    objective: Objective,
    /// Objective function coefficients, sorted by variable index.
    cost: SparseTupleVec<F>,
    variables: Vec<Variable<F>>,
    constraints: Vec<Constraint<F>>,
}

impl<F: OrderedField> LinearProgram<F>
where
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Create an empty program that minimizes the zero function.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objective: Objective::default(),
            cost: Vec::new(),
            variables: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Add a variable.
    ///
    /// # Return value
    ///
    /// The index by which constraints and the objective refer to this variable.
    pub fn add_variable(&mut self, variable: Variable<F>) -> usize {
        self.variables.push(variable);
        self.variables.len() - 1
    }

    /// Add a constraint.
    ///
    /// Duplicate variable indices in `coefficients` are summed, zero coefficients are dropped.
    ///
    /// # Return value
    ///
    /// The index of the new constraint.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        coefficients: SparseTupleVec<F>,
        relation: ConstraintRelation,
        right_hand_side: F,
    ) -> usize {
        let coefficients = normalize(coefficients);
        debug_assert!(coefficients.iter().all(|&(j, _)| j < self.nr_variables()));

        self.constraints.push(Constraint {
            name: name.into(),
            coefficients,
            relation,
            right_hand_side,
        });
        self.constraints.len() - 1
    }

    /// Set the objective function and the direction in which it is optimized.
    pub fn set_objective(&mut self, objective: Objective, cost: SparseTupleVec<F>) {
        let cost = normalize(cost);
        debug_assert!(cost.iter().all(|&(j, _)| j < self.nr_variables()));

        self.objective = objective;
        self.cost = cost;
    }

    /// Replace a bound of a variable.
    pub fn set_bound(&mut self, variable: usize, direction: BoundDirection, value: F) {
        let variable = &mut self.variables[variable];
        match direction {
            BoundDirection::Lower => variable.lower_bound = Some(value),
            BoundDirection::Upper => variable.upper_bound = Some(value),
        }
    }

    /// Value of the objective function at `values`.
    pub fn objective_value(&self, values: &[F]) -> F {
        debug_assert_eq!(values.len(), self.nr_variables());

        inner_product(&self.cost, values)
    }

    /// Whether `values` satisfies all bounds, integrality requirements and constraints.
    pub fn is_feasible(&self, values: &[F]) -> bool {
        if values.len() != self.nr_variables() {
            return false;
        }

        let within_domain = self.variables.iter().zip(values).all(|(variable, value)| {
            variable.lower_bound.as_ref().is_none_or(|bound| value >= bound)
                && variable.upper_bound.as_ref().is_none_or(|bound| value <= bound)
                && (variable.variable_type == VariableType::Continuous || value.is_integer())
        });

        within_domain && self.constraints.iter().all(|constraint| {
            let activation = inner_product(&constraint.coefficients, values);
            match constraint.relation {
                ConstraintRelation::Equal => activation == constraint.right_hand_side,
                ConstraintRelation::Greater => activation >= constraint.right_hand_side,
                ConstraintRelation::Less => activation <= constraint.right_hand_side,
            }
        })
    }

    /// Name of the program.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Objective function coefficients.
    pub fn cost(&self) -> &[(usize, F)] {
        &self.cost
    }

    /// All variables, by index.
    pub fn variables(&self) -> &[Variable<F>] {
        &self.variables
    }

    /// All constraints, by index.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Number of variables.
    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraints, bounds on variables excluded.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    fn write_expression(&self, f: &mut fmt::Formatter<'_>, tuples: &[(usize, F)]) -> fmt::Result {
        if tuples.is_empty() {
            return f.write_str("0");
        }

        let terms = tuples.iter()
            .map(|(j, value)| format!("{} {}", value, self.variables[*j].name))
            .join(" + ");
        f.write_str(&terms)
    }
}

fn inner_product<F: OrderedField>(tuples: &[(usize, F)], values: &[F]) -> F
where
    for<'r> &'r F: OrderedFieldRef<F>,
{
    tuples.iter()
        .fold(F::zero(), |total, (j, coefficient)| total + coefficient * &values[*j])
}

impl<F: OrderedField> fmt::Display for LinearProgram<F>
where
    for<'r> &'r F: OrderedFieldRef<F>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        match self.objective {
            Objective::Maximize => f.write_str("maximize ")?,
            Objective::Minimize => f.write_str("minimize ")?,
        }
        self.write_expression(f, &self.cost)?;
        writeln!(f)?;

        writeln!(f, "subject to")?;
        for constraint in &self.constraints {
            write!(f, "  {}: ", constraint.name)?;
            self.write_expression(f, &constraint.coefficients)?;
            writeln!(f, " {} {}", constraint.relation, constraint.right_hand_side)?;
        }

        writeln!(f, "bounds")?;
        for variable in &self.variables {
            let lower = variable.lower_bound.as_ref().map_or("-inf".to_string(), F::to_string);
            let upper = variable.upper_bound.as_ref().map_or("inf".to_string(), F::to_string);
            let kind = match variable.variable_type {
                VariableType::Continuous => "",
                VariableType::Integer => " integer",
            };
            writeln!(f, "  {} <= {} <= {}{}", lower, variable.name, upper, kind)?;
        }

        Ok(())
    }
}
