//! Positions addressing subterms and binder sites within a term
//!
//! A `Position` is a path from the root of a term to one of its subterms:
//! either the empty path, or a step followed by a tail. A `HeadPosition`
//! additionally records how many trailing arguments were chopped off to
//! reach a curried head.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error raised when an accessor is invoked on a value that does not carry
/// the requested structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMismatch {
    /// What the caller asked for
    pub queried: &'static str,
    /// What the value actually is
    pub found: &'static str,
}

impl fmt::Display for PatternMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queried {} on {}", self.queried, self.found)
    }
}

impl std::error::Error for PatternMismatch {}

/// A single step of a position path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Step into the i-th argument of an application, or the i-th component
    /// of a tuple (i ≥ 1; the two share representation)
    Argument(u32),
    /// Step into the body of an abstraction
    Lambda,
    /// Step into the i-th argument of a meta-variable application (i ≥ 1)
    Meta(u32),
}

impl Step {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Step::Argument(_) => "an argument step",
            Step::Lambda => "a lambda step",
            Step::Meta(_) => "a meta-application step",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Argument(i) => write!(f, "{}", i),
            Step::Lambda => write!(f, "0"),
            Step::Meta(i) => write!(f, "!{}", i),
        }
    }
}

/// A path to a subterm: the empty path (the root) or a step with a tail.
///
/// Positions are immutable values; equality is structural and distinguishes
/// step kinds, so an argument step never equals a lambda or meta step of the
/// same magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// The root position
    Empty,
    /// A step followed by the remaining path
    Cons(Step, Box<Position>),
}

impl Position {
    /// The empty (root) position.
    pub fn empty() -> Position {
        Position::Empty
    }

    /// A position descending into argument `index` (1-based).
    pub fn argument(index: u32, tail: Position) -> Position {
        debug_assert!(index >= 1, "argument indices are 1-based");
        Position::Cons(Step::Argument(index), Box::new(tail))
    }

    /// A position descending into the body of an abstraction.
    pub fn lambda(tail: Position) -> Position {
        Position::Cons(Step::Lambda, Box::new(tail))
    }

    /// A position descending into argument `index` of a meta-variable
    /// application (1-based).
    pub fn meta(index: u32, tail: Position) -> Position {
        debug_assert!(index >= 1, "meta argument indices are 1-based");
        Position::Cons(Step::Meta(index), Box::new(tail))
    }

    /// Build a position from a sequence of steps, outermost first.
    pub fn from_steps<I: IntoIterator<Item = Step>>(steps: I) -> Position {
        let collected: Vec<Step> = steps.into_iter().collect();
        let mut pos = Position::Empty;
        for step in collected.into_iter().rev() {
            pos = Position::Cons(step, Box::new(pos));
        }
        pos
    }

    /// Check whether this is the empty position.
    pub fn is_empty(&self) -> bool {
        matches!(self, Position::Empty)
    }

    /// Check whether the outermost step descends into an argument.
    pub fn is_argument(&self) -> bool {
        matches!(self, Position::Cons(Step::Argument(_), _))
    }

    /// Check whether the outermost step descends into a tuple component.
    /// Tuple components and arguments share representation.
    pub fn is_tuple(&self) -> bool {
        self.is_argument()
    }

    /// Check whether the outermost step descends into an abstraction body.
    pub fn is_lambda(&self) -> bool {
        matches!(self, Position::Cons(Step::Lambda, _))
    }

    /// Check whether the outermost step descends into a meta-variable
    /// application.
    pub fn is_meta(&self) -> bool {
        matches!(self, Position::Cons(Step::Meta(_), _))
    }

    fn describe(&self) -> &'static str {
        match self {
            Position::Empty => "the empty position",
            Position::Cons(step, _) => step.kind(),
        }
    }

    /// The argument index of the outermost step (1-based).
    pub fn query_argument_position(&self) -> Result<u32, PatternMismatch> {
        match self {
            Position::Cons(Step::Argument(i), _) => Ok(*i),
            other => Err(PatternMismatch {
                queried: "an argument position",
                found: other.describe(),
            }),
        }
    }

    /// The tuple component index of the outermost step (1-based); synonym of
    /// `query_argument_position`.
    pub fn query_component_position(&self) -> Result<u32, PatternMismatch> {
        match self {
            Position::Cons(Step::Argument(i), _) => Ok(*i),
            other => Err(PatternMismatch {
                queried: "a tuple component position",
                found: other.describe(),
            }),
        }
    }

    /// The meta-application argument index of the outermost step (1-based).
    pub fn query_meta_position(&self) -> Result<u32, PatternMismatch> {
        match self {
            Position::Cons(Step::Meta(i), _) => Ok(*i),
            other => Err(PatternMismatch {
                queried: "a meta-application position",
                found: other.describe(),
            }),
        }
    }

    /// The remaining position after stripping the outermost step.
    pub fn query_tail(&self) -> Result<&Position, PatternMismatch> {
        match self {
            Position::Cons(_, tail) => Ok(tail),
            Position::Empty => Err(PatternMismatch {
                queried: "a position tail",
                found: "the empty position",
            }),
        }
    }

    /// Iterate over the steps of this position, outermost first.
    pub fn steps(&self) -> Steps<'_> {
        Steps { current: self }
    }
}

/// Iterator over the steps of a position, outermost first.
pub struct Steps<'a> {
    current: &'a Position,
}

impl<'a> Iterator for Steps<'a> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match self.current {
            Position::Empty => None,
            Position::Cons(step, tail) => {
                self.current = tail;
                Some(*step)
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.steps() {
            write!(f, "{}.", step)?;
        }
        write!(f, "ε")
    }
}

/// A position together with a chop count: how many trailing arguments were
/// stripped from a fully applied term to reach a curried head.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeadPosition {
    position: Position,
    chop_count: u32,
}

impl HeadPosition {
    /// A head position with no chopped arguments.
    pub fn new(position: Position) -> HeadPosition {
        HeadPosition {
            position,
            chop_count: 0,
        }
    }

    /// A head position stripping `chop_count` trailing arguments.
    pub fn with_chop(position: Position, chop_count: u32) -> HeadPosition {
        HeadPosition {
            position,
            chop_count,
        }
    }

    /// The wrapped position.
    pub fn query_position(&self) -> &Position {
        &self.position
    }

    /// How many trailing arguments are stripped at the end of the path.
    pub fn query_chop_count(&self) -> u32 {
        self.chop_count
    }

    /// Check whether the wrapped position is empty. A chop-count-only head
    /// position is still an end position.
    pub fn is_end(&self) -> bool {
        self.position.is_empty()
    }

    /// Check whether there is at least one remaining step.
    pub fn is_argument(&self) -> bool {
        !self.is_end()
    }

    /// The argument index of the outermost step. Fails on an end head
    /// position regardless of the chop count.
    pub fn query_argument_position(&self) -> Result<u32, PatternMismatch> {
        if self.is_end() {
            return Err(PatternMismatch {
                queried: "an argument position",
                found: "an end head position",
            });
        }
        self.position.query_argument_position()
    }

    /// The meta-application argument index of the outermost step. Fails on
    /// an end head position regardless of the chop count.
    pub fn query_meta_position(&self) -> Result<u32, PatternMismatch> {
        if self.is_end() {
            return Err(PatternMismatch {
                queried: "a meta-application position",
                found: "an end head position",
            });
        }
        self.position.query_meta_position()
    }

    /// The head position after stripping the outermost step; the chop count
    /// is carried along. Fails on an end head position.
    pub fn query_tail(&self) -> Result<HeadPosition, PatternMismatch> {
        match &self.position {
            Position::Cons(_, tail) => Ok(HeadPosition {
                position: (**tail).clone(),
                chop_count: self.chop_count,
            }),
            Position::Empty => Err(PatternMismatch {
                queried: "a position tail",
                found: "an end head position",
            }),
        }
    }
}

impl fmt::Display for HeadPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.position.steps() {
            write!(f, "{}.", step)?;
        }
        if self.chop_count > 0 {
            write!(f, "☆{}", self.chop_count)
        } else {
            write!(f, "ε")
        }
    }
}
