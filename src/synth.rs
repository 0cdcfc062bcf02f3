//! Expression synthesis: turns a cover into a sum of products.
//!
//! Each group becomes one product term. For every variable position, the Gray labels of
//! the group's cells are compared: a bit that is `1` everywhere yields the variable, a
//! bit that is `0` everywhere yields its complement, and a bit that varies is dropped.

use std::fmt::{self, Display, Write};

use crate::cover::Cover;
use crate::gray::label_bit;
use crate::grid::Grid;

/// Formatting options for [`Expr`].
///
/// # Examples
///
/// ```
/// use kmap_rs::kmap::KMap;
/// use kmap_rs::synth::ExprConfig;
///
/// let kmap = KMap::new(&[0, 1], &["A", "B"]).unwrap();
/// let config = ExprConfig {
///     complement: "~",
///     ..ExprConfig::default()
/// };
/// assert_eq!(kmap.minimize().to_string_with_config(&config), "A~");
/// ```
#[derive(Debug, Clone)]
pub struct ExprConfig {
    /// Suffix marking a complemented literal (default: "'")
    pub complement: &'static str,
    /// Separator between product terms (default: " + ")
    pub separator: &'static str,
    /// Rendering of the constant true function (default: "1")
    pub one: &'static str,
    /// Rendering of the constant false function (default: "0")
    pub zero: &'static str,
}

impl Default for ExprConfig {
    fn default() -> Self {
        Self {
            complement: "'",
            separator: " + ",
            one: "1",
            zero: "0",
        }
    }
}

/// A variable or its complement.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Literal {
    /// Variable name.
    pub name: char,
    /// Position of the variable, most significant first.
    pub position: usize,
    /// `false` for a complemented literal.
    pub positive: bool,
}

/// A conjunction of literals.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    pub fn new(literals: Vec<Literal>) -> Self {
        Term { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    fn write(&self, out: &mut impl Write, config: &ExprConfig) -> fmt::Result {
        for lit in &self.literals {
            out.write_char(lit.name)?;
            if !lit.positive {
                out.write_str(config.complement)?;
            }
        }
        Ok(())
    }
}

/// A minimized sum-of-products expression.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    /// Constant false: no minterms.
    Zero,
    /// Constant true: every minterm.
    One,
    /// Disjunction of product terms, in cover order.
    Sum(Vec<Term>),
}

impl Expr {
    /// Synthesizes the expression for `cover`, reading literals from `labels`.
    pub fn synthesize(cover: &Cover, labels: &Grid<u8>, variables: &[char]) -> Expr {
        if cover.is_empty() {
            return Expr::Zero;
        }
        if cover.covered().len() == cover.shape().len() {
            return Expr::One;
        }

        let num_vars = variables.len();
        let terms = cover
            .iter()
            .map(|group| {
                let covered: Vec<u8> = labels.cells(&group.region()).copied().collect();
                let literals = variables
                    .iter()
                    .enumerate()
                    .filter_map(|(position, &name)| {
                        let ones = covered.iter().filter(|&&l| label_bit(l, position, num_vars)).count();
                        if ones == covered.len() {
                            Some(Literal { name, position, positive: true })
                        } else if ones == 0 {
                            Some(Literal { name, position, positive: false })
                        } else {
                            None
                        }
                    })
                    .collect();
                Term::new(literals)
            })
            .collect();
        Expr::Sum(terms)
    }

    pub fn terms(&self) -> &[Term] {
        match self {
            Expr::Sum(terms) => terms,
            Expr::Zero | Expr::One => &[],
        }
    }

    /// Renders the expression using `config`.
    pub fn to_string_with_config(&self, config: &ExprConfig) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write(&mut out, config);
        out
    }

    fn write(&self, out: &mut impl Write, config: &ExprConfig) -> fmt::Result {
        match self {
            Expr::Zero => out.write_str(config.zero),
            Expr::One => out.write_str(config.one),
            Expr::Sum(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        out.write_str(config.separator)?;
                    }
                    term.write(out, config)?;
                }
                Ok(())
            }
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, &ExprConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn lit(name: char, position: usize, positive: bool) -> Literal {
        Literal { name, position, positive }
    }

    #[test]
    fn test_display_constants() {
        assert_eq!(Expr::Zero.to_string(), "0");
        assert_eq!(Expr::One.to_string(), "1");
    }

    #[test]
    fn test_display_sum() {
        let expr = Expr::Sum(vec![
            Term::new(vec![lit('A', 0, true), lit('B', 1, false)]),
            Term::new(vec![lit('A', 0, false), lit('C', 2, true)]),
        ]);
        assert_eq!(expr.to_string(), "AB' + A'C");
        assert_eq!(expr.terms().len(), 2);
    }

    #[test]
    fn test_custom_config() {
        let expr = Expr::Sum(vec![
            Term::new(vec![lit('x', 0, false)]),
            Term::new(vec![lit('y', 1, true)]),
        ]);
        let config = ExprConfig {
            complement: "!",
            separator: " | ",
            ..ExprConfig::default()
        };
        assert_eq!(expr.to_string_with_config(&config), "x! | y");

        let config = ExprConfig {
            one: "true",
            zero: "false",
            ..ExprConfig::default()
        };
        assert_eq!(Expr::One.to_string_with_config(&config), "true");
        assert_eq!(Expr::Zero.to_string_with_config(&config), "false");
    }
}
