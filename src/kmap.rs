//! Karnaugh maps built from minterm lists.

use std::collections::BTreeSet;

use log::debug;

use crate::cover::Cover;
use crate::error::{KMapError, Result};
use crate::gray::{self, grayify};
use crate::grid::Grid;
use crate::synth::Expr;
use crate::types::{Cell, Shape};

/// A validated Karnaugh map of a 2-4 variable Boolean function.
///
/// The map holds two parallel grids in Gray layout: the function values, and the
/// binary label of the minterm at each cell. Both are fixed at construction.
#[derive(Debug, Clone)]
pub struct KMap {
    variables: Vec<char>,
    values: Grid<bool>,
    labels: Grid<u8>,
}

impl KMap {
    /// Builds the map of the function that is `1` exactly on `minterms`.
    ///
    /// Variable `i` corresponds to bit `i` of a minterm, most significant first.
    ///
    /// # Errors
    ///
    /// Checks are applied in this order:
    ///
    /// - [`KMapError::MultiCharacterVariable`] if a variable name is not one character;
    /// - [`KMapError::MintermOutOfRange`] if a minterm is not below `2^n`;
    /// - [`KMapError::TooManyMinterms`] if more than `2^n` minterms are given;
    /// - [`KMapError::InvalidVariableCount`] if `n` is not 2, 3 or 4;
    /// - [`KMapError::DuplicateVariable`] if a name repeats.
    pub fn new<S: AsRef<str>>(minterms: &[u32], variables: &[S]) -> Result<Self> {
        let variables = validate(minterms, variables)?;
        let num_vars = variables.len();
        let shape = Shape::for_variables(num_vars).ok_or(KMapError::InvalidVariableCount { count: num_vars })?;

        let mut flat = vec![false; shape.len()];
        for &m in minterms {
            flat[m as usize] = true;
        }
        let mut values = Grid::from_row_major(flat, shape)?;
        grayify(&mut values, num_vars);
        let labels = gray::label_grid(shape, num_vars)?;

        debug!("new(minterms = {:?}, variables = {:?}) -> {} map", minterms, variables, shape);

        Ok(KMap {
            variables,
            values,
            labels,
        })
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn shape(&self) -> Shape {
        self.values.shape()
    }

    /// Function value at `(row, col)`, with wraparound.
    pub fn value(&self, row: usize, col: usize) -> bool {
        *self.values.get(row, col)
    }

    /// Minterm label at `(row, col)`, with wraparound.
    pub fn label(&self, row: usize, col: usize) -> u8 {
        *self.labels.get(row, col)
    }

    /// Cell where `minterm` is placed.
    pub fn cell_of(&self, minterm: u32) -> Cell {
        gray::cell_of(minterm as usize, self.shape(), self.variables.len())
    }

    /// Groups covering the 1-cells, without synthesizing an expression.
    pub fn cover(&self) -> Cover {
        Cover::find(&self.values)
    }

    /// Minimized sum-of-products expression of the map.
    pub fn minimize(&self) -> Expr {
        let cover = self.cover();
        let expr = Expr::synthesize(&cover, &self.labels, &self.variables);
        debug!("minimize: {} groups -> {}", cover.len(), expr);
        expr
    }
}

fn validate<S: AsRef<str>>(minterms: &[u32], variables: &[S]) -> Result<Vec<char>> {
    let mut names = Vec::with_capacity(variables.len());
    for v in variables {
        let v: &str = v.as_ref();
        let mut chars = v.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => names.push(c),
            _ => {
                return Err(KMapError::MultiCharacterVariable {
                    variable: v.to_string(),
                })
            }
        }
    }

    // `None` means every u32 fits.
    let limit = u32::try_from(names.len()).ok().and_then(|n| 1u64.checked_shl(n));
    if let Some(limit) = limit {
        if let Some(&minterm) = minterms.iter().find(|&&m| u64::from(m) >= limit) {
            return Err(KMapError::MintermOutOfRange { minterm, limit });
        }
        if minterms.len() as u64 > limit {
            return Err(KMapError::TooManyMinterms {
                count: minterms.len(),
                limit,
            });
        }
    }

    if !(2..=4).contains(&names.len()) {
        return Err(KMapError::InvalidVariableCount { count: names.len() });
    }

    let mut seen = BTreeSet::new();
    for &c in &names {
        if !seen.insert(c) {
            return Err(KMapError::DuplicateVariable { variable: c });
        }
    }

    Ok(names)
}

/// Minimizes the function with the given minterms and renders it with default settings.
///
/// ```
/// assert_eq!(kmap_rs::minimize(&[0, 1], &["A", "B"]).unwrap(), "A'");
/// ```
pub fn minimize<S: AsRef<str>>(minterms: &[u32], variables: &[S]) -> Result<String> {
    Ok(KMap::new(minterms, variables)?.minimize().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_scenarios_two_variables() {
        assert_eq!(minimize(&[0, 1, 2, 3], &["A", "B"]).unwrap(), "1");
        assert_eq!(minimize(&[], &["A", "B"]).unwrap(), "0");
        assert_eq!(minimize(&[0, 1], &["A", "B"]).unwrap(), "A'");
        assert_eq!(minimize(&[0, 2], &["A", "B"]).unwrap(), "B'");
    }

    #[test]
    fn test_layout() {
        let kmap = KMap::new(&[0, 1], &["A", "B"]).unwrap();
        assert_eq!(kmap.shape(), Shape::new(2, 2));
        assert_eq!(kmap.cell_of(0), Cell::new(0, 0));
        assert_eq!(kmap.cell_of(1), Cell::new(0, 1));
        assert_eq!(kmap.cell_of(2), Cell::new(1, 0));
        assert_eq!(kmap.cell_of(3), Cell::new(1, 1));
        assert!(kmap.value(0, 0));
        assert!(kmap.value(0, 1));
        assert!(!kmap.value(1, 0));
        assert!(kmap.value(2, 3)); // wraps to (0, 1)

        let kmap = KMap::new(&[2], &["A", "B", "C"]).unwrap();
        assert_eq!(kmap.cell_of(2), Cell::new(0, 3));
        assert!(kmap.value(0, 3));
        assert_eq!(kmap.label(0, 3), 2);
        assert_eq!(kmap.label(0, 2), 3);
    }

    #[test]
    fn test_multi_character_variable() {
        let err = KMap::new(&[0], &["AB", "C"]).unwrap_err();
        assert_eq!(
            err,
            KMapError::MultiCharacterVariable {
                variable: "AB".to_string()
            }
        );
        let err = KMap::new(&[0], &["", "C"]).unwrap_err();
        assert!(matches!(err, KMapError::MultiCharacterVariable { .. }));
    }

    #[test]
    fn test_minterm_out_of_range() {
        let err = KMap::new(&[8], &["A", "B", "C"]).unwrap_err();
        assert_eq!(err, KMapError::MintermOutOfRange { minterm: 8, limit: 8 });
    }

    #[test]
    fn test_too_many_minterms() {
        let err = KMap::new(&[0, 1, 2, 3, 0], &["A", "B"]).unwrap_err();
        assert_eq!(err, KMapError::TooManyMinterms { count: 5, limit: 4 });
    }

    #[test]
    fn test_invalid_variable_count() {
        let err = KMap::new(&[], &["A"]).unwrap_err();
        assert_eq!(err, KMapError::InvalidVariableCount { count: 1 });
        let err = KMap::new(&[], &["A", "B", "C", "D", "E"]).unwrap_err();
        assert_eq!(err, KMapError::InvalidVariableCount { count: 5 });
    }

    #[test]
    fn test_validation_order() {
        // Out-of-range is reported before the variable count.
        let err = KMap::new(&[2], &["A"]).unwrap_err();
        assert_eq!(err, KMapError::MintermOutOfRange { minterm: 2, limit: 2 });
        // Multi-character names are reported first of all.
        let err = KMap::new(&[99], &["AB"]).unwrap_err();
        assert!(matches!(err, KMapError::MultiCharacterVariable { .. }));
    }

    #[test]
    fn test_duplicate_variable() {
        let err = KMap::new(&[0], &["A", "A"]).unwrap_err();
        assert_eq!(err, KMapError::DuplicateVariable { variable: 'A' });
    }

    #[test]
    fn test_duplicate_minterms_allowed() {
        assert_eq!(minimize(&[1, 1], &["A", "B"]).unwrap(), "A'B");
    }
}
