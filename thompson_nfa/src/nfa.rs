use std::ops::Range;

use crate::alphabet::EPSILON_MARKER;

/// A state ID in the NFA
pub type StateId = usize;

/// The label on a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A lowercase letter in `a..=z`.
    Char(char),
    /// A transition taken without consuming input.
    Epsilon,
}

impl Symbol {
    /// Classify a pattern character as a symbol, if it is one.
    pub fn from_char(ch: char) -> Option<Symbol> {
        match ch {
            'a'..='z' => Some(Symbol::Char(ch)),
            EPSILON_MARKER => Some(Symbol::Epsilon),
            _ => None,
        }
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Char(ch) => write!(f, "{}", ch),
            Symbol::Epsilon => write!(f, "ε"),
        }
    }
}

/// A directed, labeled edge between two states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub symbol: Symbol,
}

impl Transition {
    pub fn new(from: StateId, to: StateId, symbol: Symbol) -> Self {
        Transition { from, to, symbol }
    }

    /// Create an epsilon transition
    pub fn epsilon(from: StateId, to: StateId) -> Self {
        Transition::new(from, to, Symbol::Epsilon)
    }

    /// The same transition with both endpoints moved up by `offset`.
    pub(crate) fn shift(self, offset: usize) -> Self {
        Transition::new(self.from + offset, self.to + offset, self.symbol)
    }
}

/// A Thompson NFA.
///
/// States are the contiguous range `0..state_count()`, the start state is
/// always `0` and there is exactly one final state. Automata are produced by
/// the builders in [`crate::builder`] and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NFA {
    state_count: usize,
    transitions: Vec<Transition>,
    final_state: StateId,
}

impl NFA {
    /// An automaton with no states and no transitions.
    pub fn empty() -> Self {
        NFA {
            state_count: 0,
            transitions: Vec::new(),
            final_state: 0,
        }
    }

    /// An automaton with `size` unconnected states whose last state is final.
    pub fn from_size(size: usize) -> Self {
        NFA {
            state_count: size,
            transitions: Vec::new(),
            final_state: size.saturating_sub(1),
        }
    }

    /// The two state automaton accepting exactly `symbol`.
    pub fn from_literal(symbol: Symbol) -> Self {
        let mut nfa = NFA::from_size(2);
        nfa.push(Transition::new(0, 1, symbol));
        nfa
    }

    /// The automaton for the epsilon literal. This is also what invalid input
    /// degrades to.
    pub fn epsilon() -> Self {
        NFA::from_literal(Symbol::Epsilon)
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// All state IDs in ascending order.
    pub fn states(&self) -> Range<StateId> {
        0..self.state_count
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn start(&self) -> StateId {
        0
    }

    pub fn final_state(&self) -> StateId {
        self.final_state
    }

    pub fn is_final(&self, id: StateId) -> bool {
        id == self.final_state
    }

    /// Number of transitions labeled with epsilon
    pub fn epsilon_count(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.symbol.is_epsilon())
            .count()
    }

    /// Verify the structural invariants: the final state and every
    /// transition endpoint are valid state IDs.
    pub fn check(&self) -> Result<(), String> {
        if self.state_count == 0 {
            return Err("automaton has no states".to_string());
        }
        if self.final_state >= self.state_count {
            return Err(format!(
                "final state {} out of range 0..{}",
                self.final_state, self.state_count
            ));
        }
        for t in &self.transitions {
            if t.from >= self.state_count || t.to >= self.state_count {
                return Err(format!(
                    "transition ({}, {}, {}) out of range 0..{}",
                    t.from, t.to, t.symbol, self.state_count
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn push(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Append `transitions`, each moved up by `offset`.
    pub(crate) fn extend_shifted(&mut self, transitions: Vec<Transition>, offset: usize) {
        self.transitions
            .extend(transitions.into_iter().map(|t| t.shift(offset)));
    }

    pub(crate) fn set_final(&mut self, id: StateId) {
        self.final_state = id;
    }

    pub(crate) fn into_transitions(self) -> Vec<Transition> {
        self.transitions
    }
}

impl Default for NFA {
    fn default() -> Self {
        Self::empty()
    }
}
