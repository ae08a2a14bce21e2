use quickcheck::{Arbitrary, Gen, QuickCheck};
use thompson_nfa::{compile, CompileError};

use crate::sim::language;

const TOKENS: &[char] = &['a', 'b', 'E', '*', '|', '(', ')'];

/// A random pattern whose parentheses are balanced.
#[derive(Clone, Debug)]
struct Balanced(String);

impl Arbitrary for Balanced {
    fn arbitrary(g: &mut Gen) -> Balanced {
        let len = usize::arbitrary(g) % 16 + 1;
        let mut pattern = String::new();
        let mut depth = 0usize;
        for _ in 0..len {
            let ch = *g.choose(TOKENS).unwrap();
            match ch {
                ')' if depth == 0 => continue,
                ')' => depth -= 1,
                '(' => depth += 1,
                _ => {}
            }
            pattern.push(ch);
        }
        if pattern.is_empty() {
            pattern.push('a');
        }
        for _ in 0..depth {
            pattern.push(')');
        }
        Balanced(pattern)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Balanced>> {
        // Dropping one matched pair or one non-parenthesis keeps the balance.
        let chars: Vec<char> = self.0.chars().collect();
        let mut smaller = Vec::new();
        for (i, &ch) in chars.iter().enumerate() {
            if ch == '(' || ch == ')' {
                continue;
            }
            let s: String = chars
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &c)| c)
                .collect();
            if !s.is_empty() {
                smaller.push(Balanced(s));
            }
        }
        Box::new(smaller.into_iter())
    }
}

fn qc() -> QuickCheck {
    QuickCheck::new().tests(1_000).max_tests(2_000)
}

#[test]
fn balanced_patterns_compile_or_report_imbalance() {
    fn prop(pattern: Balanced) -> bool {
        match compile(&pattern.0) {
            Ok(nfa) => {
                nfa.check().is_ok()
                    && nfa.start() == 0
                    && nfa.final_state() + 1 == nfa.state_count()
            }
            Err(CompileError::OperandImbalance { position }) => {
                position <= pattern.0.chars().count()
            }
            Err(_) => false,
        }
    }
    qc().quickcheck(prop as fn(Balanced) -> bool);
}

#[test]
fn grouping_preserves_language() {
    fn prop(pattern: Balanced) -> bool {
        let grouped = format!("({})", pattern.0);
        match (compile(&pattern.0), compile(&grouped)) {
            (Ok(plain), Ok(grouped)) => {
                language(&plain, &['a', 'b'], 3) == language(&grouped, &['a', 'b'], 3)
            }
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }
    qc().quickcheck(prop as fn(Balanced) -> bool);
}

#[test]
fn starred_patterns_accept_empty_string() {
    fn prop(pattern: Balanced) -> bool {
        match compile(&format!("({})*", pattern.0)) {
            Ok(nfa) => crate::sim::accepts(&nfa, ""),
            Err(_) => compile(&pattern.0).is_err(),
        }
    }
    qc().quickcheck(prop as fn(Balanced) -> bool);
}
