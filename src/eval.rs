use crate::gray::label_bit;
use crate::synth::{Expr, Literal, Term};

/// Evaluation under a complete variable assignment.
///
/// `assignment[i]` is the value of the variable at position `i`.
pub trait Eval {
    fn eval(&self, assignment: &[bool]) -> bool;
}

impl Eval for Literal {
    fn eval(&self, assignment: &[bool]) -> bool {
        assignment[self.position] == self.positive
    }
}

impl Eval for Term {
    fn eval(&self, assignment: &[bool]) -> bool {
        self.literals().iter().all(|lit| lit.eval(assignment))
    }
}

impl Eval for Expr {
    fn eval(&self, assignment: &[bool]) -> bool {
        match self {
            Expr::Zero => false,
            Expr::One => true,
            Expr::Sum(terms) => terms.iter().any(|term| term.eval(assignment)),
        }
    }
}

impl Expr {
    /// Truth-table rows (over `num_vars` variables) where the expression is true.
    ///
    /// # Panics
    ///
    /// Panics if `num_vars > 4`.
    pub fn minterms(&self, num_vars: usize) -> Vec<u32> {
        assert!(num_vars <= 4, "Expressions have at most 4 variables");
        (0..1u32 << num_vars)
            .filter(|&m| {
                let assignment: Vec<bool> = (0..num_vars).map(|p| label_bit(m as u8, p, num_vars)).collect();
                self.eval(&assignment)
            })
            .collect()
    }
}
