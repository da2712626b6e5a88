//! Exhaustive satisfiability search.
//!
//! All `2^n` assignments of the `n` distinct variables of a formula are enumerated
//! by counting a bitmask down from `2^n - 1` to `0`. Bit `i` of the mask is the value
//! of the `i`-th variable in ascending identifier order. Each assignment is built
//! lazily, evaluated and dropped, so only the produced report lines accumulate.
//!
//! The running time is exponential in the number of distinct variables, which is
//! inherent to exhaustive search.

use log::{debug, trace};
use num_bigint::BigUint;

use crate::assignment::Assignment;
use crate::ast::Node;
use crate::error::Error;
use crate::eval::{Eval, EvalError};

/// Maximum number of distinct variables, bounded by the width of the `u64` counter.
pub const MAX_VARS: usize = 63;

/// What the report contains.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Mode {
    /// Only satisfying assignments.
    #[default]
    Normal,
    /// Every assignment, followed by the value of the formula.
    Debug,
}

/// Iterator over all assignments of a set of variables, from all-true down to all-false.
#[derive(Debug, Clone)]
pub struct Valuations<'a> {
    ids: Vec<&'a str>,
    next: Option<u64>,
}

impl<'a> Valuations<'a> {
    /// Creates the enumeration for the given identifiers, which must be sorted and distinct.
    ///
    /// With no identifiers, exactly one (empty) assignment is produced.
    pub fn new(ids: impl IntoIterator<Item = &'a str>) -> Result<Self, Error> {
        let ids: Vec<&str> = ids.into_iter().collect();
        if ids.len() > MAX_VARS {
            return Err(Error::TooManyVariables {
                count: ids.len(),
                max: MAX_VARS,
            });
        }
        let start = (1u64 << ids.len()) - 1;
        Ok(Self { ids, next: Some(start) })
    }

    pub fn num_vars(&self) -> usize {
        self.ids.len()
    }
}

impl Iterator for Valuations<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        let mask = self.next?;
        self.next = mask.checked_sub(1);
        Some(Assignment::from_mask(&self.ids, mask))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(Some(0), |mask| usize::try_from(mask).ok().and_then(|m| m.checked_add(1)));
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Renders the report line of one assignment.
///
/// In [`Mode::Normal`] the line is `id: value, ...` if the formula holds and empty otherwise.
/// In [`Mode::Debug`] the line always lists the assignment and ends with the formula value.
pub fn report_line(root: &Node, assignment: &Assignment, mode: Mode) -> Result<String, EvalError> {
    let result = root.eval(assignment)?;
    trace!("{{{}}} -> {}", assignment, result);
    let line = match mode {
        Mode::Normal if result => assignment.to_string(),
        Mode::Normal => String::new(),
        Mode::Debug if assignment.is_empty() => result.to_string(),
        Mode::Debug => format!("{}, {}", assignment, result),
    };
    Ok(line)
}

/// Lazily produces one report line per assignment, in enumeration order.
pub fn report_lines(root: &Node, mode: Mode) -> Result<impl Iterator<Item = Result<String, EvalError>> + '_, Error> {
    let valuations = Valuations::new(root.vars())?;
    debug!(
        "Enumerating {} assignments of {} variables",
        valuations.size_hint().0,
        valuations.num_vars()
    );
    Ok(valuations.map(move |assignment| report_line(root, &assignment, mode)))
}

/// Evaluates `root` under every assignment of its variables.
///
/// Returns exactly `2^n` lines in enumeration order; lines of non-satisfying
/// assignments are empty in [`Mode::Normal`].
///
/// ```
/// use bool_sat::parser::parse;
/// use bool_sat::sat::{exhaustive_search, Mode};
///
/// let ast = parse("a && !b").unwrap();
/// let lines = exhaustive_search(&ast, Mode::Normal).unwrap();
/// assert_eq!(lines, vec!["", "a: true, b: false", "", ""]);
/// ```
pub fn exhaustive_search(root: &Node, mode: Mode) -> Result<Vec<String>, Error> {
    let lines = report_lines(root, mode)?.collect::<Result<Vec<_>, _>>()?;
    debug!("Produced {} report lines", lines.len());
    Ok(lines)
}

impl Node {
    /// Returns the first satisfying assignment in enumeration order, if any exists.
    pub fn one_sat(&self) -> Result<Option<Assignment>, Error> {
        for assignment in Valuations::new(self.vars())? {
            if self.eval(&assignment)? {
                return Ok(Some(assignment));
            }
        }
        Ok(None)
    }

    pub fn is_satisfiable(&self) -> Result<bool, Error> {
        Ok(self.one_sat()?.is_some())
    }

    /// Whether the formula holds under every assignment.
    pub fn is_tautology(&self) -> Result<bool, Error> {
        for assignment in Valuations::new(self.vars())? {
            if !self.eval(&assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Number of satisfying assignments over the variables of the formula.
    pub fn sat_count(&self) -> Result<BigUint, Error> {
        let mut count = BigUint::ZERO;
        for assignment in Valuations::new(self.vars())? {
            if self.eval(&assignment)? {
                count += 1u32;
            }
        }
        Ok(count)
    }
}
