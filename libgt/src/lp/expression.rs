use std::collections::BTreeMap;
use std::fmt;

/// Column index of a variable inside a `LinearProgram`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId(pub usize);

impl VariableId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Affine expression `constant + sum_i coeff_i * x_i`. Repeated terms on the same
/// variable are merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpression {
    terms: BTreeMap<VariableId, f64>,
    constant: f64,
}

impl LinearExpression {
    pub fn new() -> LinearExpression {
        LinearExpression::default()
    }

    pub fn constant(value: f64) -> LinearExpression {
        LinearExpression {
            terms: BTreeMap::new(),
            constant: value,
        }
    }

    pub fn term(variable: VariableId, coeff: f64) -> LinearExpression {
        let mut expression = LinearExpression::new();
        expression.add_term(variable, coeff);
        expression
    }

    pub fn add_term(&mut self, variable: VariableId, coeff: f64) {
        *self.terms.entry(variable).or_insert(0f64) += coeff;
    }

    pub fn add_constant(&mut self, value: f64) {
        self.constant += value;
    }

    pub fn terms(&self) -> impl Iterator<Item = (VariableId, f64)> + '_ {
        self.terms.iter().map(|(&variable, &coeff)| (variable, coeff))
    }

    pub fn coefficient(&self, variable: VariableId) -> f64 {
        self.terms.get(&variable).cloned().unwrap_or(0f64)
    }

    pub fn constant_term(&self) -> f64 {
        self.constant
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Evaluates the expression given one value per variable column.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|(variable, coeff)| coeff * values[variable.index()])
            .sum::<f64>()
            + self.constant
    }
}

impl fmt::Display for LinearExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.constant)?;
        for (variable, coeff) in self.terms.iter() {
            if *coeff < 0f64 {
                write!(f, " - {} {}", -coeff, variable)?;
            } else {
                write!(f, " + {} {}", coeff, variable)?;
            }
        }
        Ok(())
    }
}
