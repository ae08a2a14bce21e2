// This test suite exercises the public API of the compiler: the shape of
// compiled automata, the languages they recognize and the error paths.
//
// Recognized languages are checked with a small subset simulation that lives
// in `sim`. It exists only for testing; the crate itself never runs an
// automaton against input.


mod property;
