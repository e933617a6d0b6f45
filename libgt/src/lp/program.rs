use crate::lp::{LinearExpression, VariableId};

/// A continuous column together with its (possibly infinite) bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl VariableDefinition {
    pub fn free(name: String) -> VariableDefinition {
        VariableDefinition {
            name,
            lower: None,
            upper: None,
        }
    }

    pub fn bounded(name: String, lower: f64, upper: f64) -> VariableDefinition {
        VariableDefinition {
            name,
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// How far `value` lies outside of the bounds, 0 if it is within them.
    pub fn violation(&self, value: f64) -> f64 {
        let below = self.lower.map_or(0f64, |lower| lower - value);
        let above = self.upper.map_or(0f64, |upper| value - upper);
        below.max(above).max(0f64)
    }
}

/// Constraints are always normalized against zero: `expression == 0` or `expression >= 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Relation {
    Equal,
    GreaterOrEqual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub name: String,
    pub expression: LinearExpression,
    pub relation: Relation,
}

impl LinearConstraint {
    pub fn violation(&self, values: &[f64]) -> f64 {
        let lhs = self.expression.evaluate(values);
        match self.relation {
            Relation::Equal => lhs.abs(),
            Relation::GreaterOrEqual => (-lhs).max(0f64),
        }
    }
}

/// A maximization linear program over continuous variables.
#[derive(Debug, Clone, Default)]
pub struct LinearProgram {
    variables: Vec<VariableDefinition>,
    constraints: Vec<LinearConstraint>,
    objective: LinearExpression,
}

impl LinearProgram {
    pub fn new() -> LinearProgram {
        LinearProgram::default()
    }

    pub fn add_variable(&mut self, definition: VariableDefinition) -> VariableId {
        self.variables.push(definition);
        VariableId(self.variables.len() - 1)
    }

    pub fn add_constraint(&mut self, name: String, expression: LinearExpression, relation: Relation) {
        self.constraints.push(LinearConstraint {
            name,
            expression,
            relation,
        });
    }

    pub fn maximize(&mut self, objective: LinearExpression) {
        self.objective = objective;
    }

    pub fn variables(&self) -> &[VariableDefinition] {
        &self.variables
    }

    pub fn variable(&self, variable: VariableId) -> &VariableDefinition {
        &self.variables[variable.index()]
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn objective(&self) -> &LinearExpression {
        &self.objective
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Returns the name and amount of the largest bound or constraint violation of
    /// `values`, or `None` when `values` is feasible up to `tolerance`.
    pub fn worst_violation(&self, values: &[f64], tolerance: f64) -> Option<(String, f64)> {
        assert_eq!(values.len(), self.variables.len());
        let bound_violations = self
            .variables
            .iter()
            .zip(values.iter())
            .map(|(definition, &value)| (&definition.name, definition.violation(value)));
        let constraint_violations = self
            .constraints
            .iter()
            .map(|constraint| (&constraint.name, constraint.violation(values)));

        bound_violations
            .chain(constraint_violations)
            .filter(|(_, violation)| *violation > tolerance)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, violation)| (name.clone(), violation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    // max y s.t. 1 - x == 0, x - y >= 0, x in [0, 1], y free.
    fn tiny_program() -> (LinearProgram, VariableId, VariableId) {
        let mut program = LinearProgram::new();
        let x = program.add_variable(VariableDefinition::bounded("x".to_string(), 0.0, 1.0));
        let y = program.add_variable(VariableDefinition::free("y".to_string()));

        let mut fix = LinearExpression::constant(1.0);
        fix.add_term(x, -1.0);
        program.add_constraint("fix".to_string(), fix, Relation::Equal);

        let mut cap = LinearExpression::term(x, 1.0);
        cap.add_term(y, -1.0);
        program.add_constraint("cap".to_string(), cap, Relation::GreaterOrEqual);

        program.maximize(LinearExpression::term(y, 1.0));
        (program, x, y)
    }

    #[test]
    fn feasible_values_have_no_violation() {
        let (program, x, y) = tiny_program();
        assert_eq!(program.num_variables(), 2);
        assert_eq!(program.num_constraints(), 2);
        assert_eq!(program.variable(y).name, "y");
        assert_approx_eq!(program.objective().coefficient(y), 1.0);
        assert_approx_eq!(program.objective().coefficient(x), 0.0);
        assert_eq!(program.worst_violation(&[1.0, 1.0], 1e-9), None);
        assert_eq!(program.worst_violation(&[1.0, -3.0], 1e-9), None);
    }

    #[test]
    fn worst_violation_is_reported_by_name() {
        let (program, _, _) = tiny_program();
        let (name, amount) = program.worst_violation(&[1.0, 1.5], 1e-9).unwrap();
        assert_eq!(name, "cap");
        assert_approx_eq!(amount, 0.5);

    }

    #[test]
    fn bounds_violation() {
        let bounded = VariableDefinition::bounded("r".to_string(), 0.0, 1.0);
        assert_approx_eq!(bounded.violation(0.5), 0.0);
        assert_approx_eq!(bounded.violation(-0.25), 0.25);
        assert_approx_eq!(bounded.violation(3.0), 2.0);
        assert_approx_eq!(VariableDefinition::free("v".to_string()).violation(-1e9), 0.0);
    }
}
