//! Views of a compiled automaton.
//!
//! Nothing here keeps state between calls: every view is built from the
//! automaton it is given and returned to the caller.

use std::fmt::{self, Write};

use crate::nfa::NFA;

/// Lists the final state followed by one `(from, 'symbol', to)` line per
/// transition.
impl fmt::Display for NFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final State: {}", self.final_state())?;
        for t in self.transitions() {
            writeln!(f, "({}, '{}', {})", t.from, t.symbol, t.to)?;
        }
        Ok(())
    }
}

/// Render `nfa` as a Graphviz digraph.
///
/// Every state becomes a node and every transition a labeled edge. The final
/// state is drawn as a double circle, and an invisible entry node points at
/// the start state.
pub fn to_dot(nfa: &NFA) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dot(&mut out, nfa);
    out
}

/// Write the Graphviz form of `nfa` into any formatter sink.
pub fn write_dot<W: Write>(out: &mut W, nfa: &NFA) -> fmt::Result {
    writeln!(out, "digraph nfa {{")?;
    writeln!(out, "    rankdir=LR;")?;
    writeln!(out, "    entry [shape=point];")?;
    for id in nfa.states() {
        let shape = if nfa.is_final(id) { "doublecircle" } else { "circle" };
        writeln!(out, "    {} [shape={}];", id, shape)?;
    }
    writeln!(out, "    entry -> {};", nfa.start())?;
    for t in nfa.transitions() {
        writeln!(out, "    {} -> {} [label=\"{}\"];", t.from, t.to, t.symbol)?;
    }
    writeln!(out, "}}")
}
