use std::{ops::Index, slice};

use crate::State;

/// The ordered states produced by one integration run.
///
/// A trajectory is built once by a solver and never modified afterwards.
/// Index 0 holds the initial state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    states: Vec<State>,
}

impl Trajectory {
    /// Returns all states in order.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the number of states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the trajectory holds no states.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the initial state, if any.
    #[must_use]
    pub fn first(&self) -> Option<&State> {
        self.states.first()
    }

    /// Returns the final state, if any.
    #[must_use]
    pub fn last(&self) -> Option<&State> {
        self.states.last()
    }

    /// Returns the state at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&State> {
        self.states.get(index)
    }

    /// Iterates over the states.
    pub fn iter(&self) -> slice::Iter<'_, State> {
        self.states.iter()
    }

    /// Iterates over the independent variable `x`.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(|s| s.x)
    }

    /// Iterates over the solution values `y`.
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(|s| s.y)
    }

    /// Iterates over the derivatives `z = y'`.
    pub fn zs(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(|s| s.z)
    }

    /// Returns the `[x, y]` pairs of the trajectory.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.states.iter().map(State::point).collect()
    }

    /// Consumes the trajectory and returns its states.
    #[must_use]
    pub fn into_states(self) -> Vec<State> {
        self.states
    }
}

impl From<Vec<State>> for Trajectory {
    fn from(states: Vec<State>) -> Self {
        Self { states }
    }
}

impl Index<usize> for Trajectory {
    type Output = State;

    fn index(&self, index: usize) -> &State {
        &self.states[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a State;
    type IntoIter = slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
