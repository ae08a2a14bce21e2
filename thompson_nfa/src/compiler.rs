use crate::{
    alphabet,
    builder,
    nfa::{Symbol, NFA},
    CompileError, CompileResult, Invalid,
};

/// An operator waiting on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    /// Implicit concatenation between two adjacent operands.
    Concat,
    /// `|`
    Union,
    /// `(` at the given char position.
    Open { position: usize },
}

/// Options for a [`Compiler`].
#[derive(Debug, Clone, Default)]
pub struct Config {
    size_limit: Option<usize>,
}

impl Config {
    /// The default configuration: no size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`CompileError::TooBig`] once any automaton built during
    /// compilation has more than `limit` states.
    pub fn size_limit(mut self, limit: Option<usize>) -> Self {
        self.size_limit = limit;
        self
    }

    pub fn get_size_limit(&self) -> Option<usize> {
        self.size_limit
    }
}

/// Compiler that converts a pattern into a Thompson NFA.
///
/// Compilation is a single left-to-right scan using two stacks, one of
/// pending operators and one of finished automata. Precedence from highest
/// to lowest is `*`, implicit concatenation, `|`. The star is applied as soon
/// as it is seen; the binary operators wait on the stack until a `)` or the
/// end of the pattern drains them.
pub struct Compiler {
    config: Config,
    operators: Vec<Operator>,
    operands: Vec<NFA>,
    /// Number of currently open groups.
    depth: usize,
    /// Set when the previous token finished an operand, so that a following
    /// symbol or group is implicitly concatenated to it.
    operand_ready: bool,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            operators: Vec::new(),
            operands: Vec::new(),
            depth: 0,
            operand_ready: false,
        }
    }

    /// Compile `regex` into an NFA.
    pub fn compile(mut self, regex: &str) -> CompileResult<NFA> {
        alphabet::validate(regex)?;
        log!(log::trace!("compiling {:?}", regex));

        let mut end = 0;
        for (position, ch) in regex.chars().enumerate() {
            self.step(position, ch)?;
            end = position + 1;
        }
        self.finish(end)
    }

    fn step(&mut self, position: usize, ch: char) -> CompileResult<()> {
        log!(log::trace!(
            "{:?} at {}: {} operator(s), {} operand(s)",
            ch,
            position,
            self.operators.len(),
            self.operands.len()
        ));

        if let Some(symbol) = Symbol::from_char(ch) {
            if self.operand_ready {
                self.operators.push(Operator::Concat);
            }
            self.push_operand(builder::literal(symbol))?;
            self.operand_ready = true;
            return Ok(());
        }

        match ch {
            '*' => {
                if !self.operand_ready {
                    return Err(CompileError::OperandImbalance { position });
                }
                let inner = self.pop_operand(position)?;
                self.push_operand(builder::kleene(inner))?;
            }
            '(' => {
                if self.operand_ready {
                    self.operators.push(Operator::Concat);
                }
                self.operators.push(Operator::Open { position });
                self.depth += 1;
                self.operand_ready = false;
            }
            '|' => {
                self.operators.push(Operator::Union);
                self.operand_ready = false;
            }
            ')' => self.close_group(position)?,
            _ => {
                return Err(CompileError::InvalidInput(Invalid::Character { ch, position }));
            }
        }
        Ok(())
    }

    /// Drain operators back to the innermost `(`. The group then counts as a
    /// single operand.
    fn close_group(&mut self, position: usize) -> CompileResult<()> {
        if self.depth == 0 {
            return Err(CompileError::UnmatchedParenthesis { position });
        }
        // `()` or a group ending in `|`
        if !self.operand_ready {
            return Err(CompileError::OperandImbalance { position });
        }
        self.depth -= 1;
        loop {
            match self.operators.pop() {
                Some(Operator::Open { .. }) => break,
                Some(op) => self.apply(op, position)?,
                None => return Err(CompileError::UnmatchedParenthesis { position }),
            }
        }
        self.operand_ready = true;
        Ok(())
    }

    fn finish(mut self, end: usize) -> CompileResult<NFA> {
        if self.depth > 0 {
            let position = self
                .operators
                .iter()
                .rev()
                .find_map(|op| match op {
                    Operator::Open { position } => Some(*position),
                    _ => None,
                })
                .unwrap_or(end);
            return Err(CompileError::UnmatchedParenthesis { position });
        }

        while let Some(op) = self.operators.pop() {
            self.apply(op, end)?;
        }

        let nfa = self.pop_operand(end)?;
        if !self.operands.is_empty() {
            return Err(CompileError::OperandImbalance { position: end });
        }
        log!(log::debug!(
            "compiled NFA with {} states and {} transitions",
            nfa.state_count(),
            nfa.transitions().len()
        ));
        Ok(nfa)
    }

    /// Apply one binary operator to the operand stack.
    fn apply(&mut self, op: Operator, position: usize) -> CompileResult<()> {
        log!(log::trace!("applying {:?}", op));
        match op {
            Operator::Concat => {
                let right = self.pop_operand(position)?;
                let left = self.pop_operand(position)?;
                self.push_operand(builder::concat(left, right))
            }
            Operator::Union => {
                let right = self.pop_operand(position)?;
                let left = if self.operators.last() == Some(&Operator::Concat) {
                    self.fold_concat_chain(position)?
                } else {
                    self.pop_operand(position)?
                };
                self.push_operand(builder::union(left, right))
            }
            Operator::Open { position } => Err(CompileError::UnmatchedParenthesis { position }),
        }
    }

    /// Collapse the run of concatenations to the left of a `|` into one
    /// operand, since `|` binds looser than concatenation.
    fn fold_concat_chain(&mut self, position: usize) -> CompileResult<NFA> {
        // Operands come off the stack right to left.
        let mut chain = vec![self.pop_operand(position)?];
        while self.operators.last() == Some(&Operator::Concat) {
            self.operators.pop();
            chain.push(self.pop_operand(position)?);
        }

        let mut operands = chain.into_iter().rev();
        let mut folded = match operands.next() {
            Some(nfa) => nfa,
            None => return Err(CompileError::OperandImbalance { position }),
        };
        for right in operands {
            folded = builder::concat(folded, right);
            self.check_size(&folded)?;
        }
        Ok(folded)
    }

    fn pop_operand(&mut self, position: usize) -> CompileResult<NFA> {
        self.operands
            .pop()
            .ok_or(CompileError::OperandImbalance { position })
    }

    fn push_operand(&mut self, nfa: NFA) -> CompileResult<()> {
        self.check_size(&nfa)?;
        self.operands.push(nfa);
        Ok(())
    }

    fn check_size(&self, nfa: &NFA) -> CompileResult<()> {
        match self.config.size_limit {
            Some(limit) if nfa.state_count() > limit => Err(CompileError::TooBig { limit }),
            _ => Ok(()),
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
