//! Token-to-op translation with static stack validation.

use super::error::ParseError;
use super::program::Program;
use super::tokenizer::tokenize;
use crate::frame::{SampleType, VideoFormat};
use crate::vm::Op;

/// Select the load op for samples of `format`, reading input `channel`.
pub(crate) fn load_op(format: &VideoFormat, channel: u8) -> Op {
    match (format.sample_type, format.bits_per_sample) {
        (SampleType::Integer, 8) => Op::LoadSrc8(channel),
        (SampleType::Integer, _) => Op::LoadSrc16(channel),
        (SampleType::Float, _) => Op::LoadSrcF(channel),
    }
}

/// Select the store op for samples of `format`.
pub(crate) fn store_op(format: &VideoFormat) -> Op {
    match (format.sample_type, format.bits_per_sample) {
        (SampleType::Integer, 8) => Op::Store8,
        (SampleType::Integer, _) => Op::Store16,
        (SampleType::Float, _) => Op::StoreF,
    }
}

/// Accumulates ops while tracking live and peak operand-stack depth.
struct ProgramBuilder {
    ops: Vec<Op>,
    depth: usize,
    max_depth: usize,
}

impl ProgramBuilder {
    fn new() -> Self {
        Self {
            ops: Vec::new(),
            depth: 0,
            max_depth: 0,
        }
    }

    /// Append a pure push: a source read, a literal, or `dup`.
    fn load(&mut self, op: Op) {
        self.ops.push(op);
        self.depth += 1;
        if self.depth > self.max_depth {
            self.max_depth = self.depth;
        }
    }

    /// Append a source read for `channel`, or fail if no clip is bound.
    fn source(
        &mut self,
        channel: usize,
        name: char,
        load_ops: &[Option<Op>; 3],
    ) -> Result<(), ParseError> {
        match load_ops[channel] {
            Some(op) => {
                self.load(op);
                Ok(())
            }
            None => Err(ParseError::MissingInput { name }),
        }
    }

    /// Append `op`, which needs `need` live values and retires `retire`.
    fn apply(&mut self, op: Op, need: usize, retire: usize, token: &str) -> Result<(), ParseError> {
        if self.depth < need {
            return Err(ParseError::StackUnderflow {
                token: token.to_string(),
            });
        }
        self.ops.push(op);
        self.depth -= retire;
        Ok(())
    }

    fn unary(&mut self, op: Op, token: &str) -> Result<(), ParseError> {
        self.apply(op, 1, 0, token)
    }

    fn binary(&mut self, op: Op, token: &str) -> Result<(), ParseError> {
        self.apply(op, 2, 1, token)
    }
}

/// Parse one plane expression into an op stream.
///
/// `load_ops[i]` is the pre-selected load op for input channel `i`, or
/// `None` when no clip is bound to that channel; `store` is appended after
/// validation. An empty token list yields an empty program; the caller
/// treats such planes as copy or undefined, never process.
pub(crate) fn parse_expression(
    expr: &str,
    load_ops: &[Option<Op>; 3],
    store: Op,
) -> Result<Program, ParseError> {
    let tokens = tokenize(expr);
    let mut b = ProgramBuilder::new();

    for &token in &tokens {
        match token {
            "+" => b.binary(Op::Add, token)?,
            "-" => b.binary(Op::Sub, token)?,
            "*" => b.binary(Op::Mul, token)?,
            "/" => b.binary(Op::Div, token)?,
            "max" => b.binary(Op::Max, token)?,
            "min" => b.binary(Op::Min, token)?,
            "exp" => b.unary(Op::Exp, token)?,
            "log" => b.unary(Op::Log, token)?,
            "pow" => b.binary(Op::Pow, token)?,
            "sqrt" => b.unary(Op::Sqrt, token)?,
            "abs" => b.unary(Op::Abs, token)?,
            ">" => b.binary(Op::Gt, token)?,
            "<" => b.binary(Op::Lt, token)?,
            "=" => b.binary(Op::Eq, token)?,
            ">=" => b.binary(Op::Ge, token)?,
            "<=" => b.binary(Op::Le, token)?,
            "?" => b.apply(Op::Ternary, 3, 2, token)?,
            "and" => b.binary(Op::And, token)?,
            "or" => b.binary(Op::Or, token)?,
            "xor" => b.binary(Op::Xor, token)?,
            "not" => b.unary(Op::Neg, token)?,
            "dup" => b.load(Op::Dup),
            "swap" => b.apply(Op::Swap, 2, 0, token)?,
            "x" => b.source(0, 'x', load_ops)?,
            "y" => b.source(1, 'y', load_ops)?,
            "z" => b.source(2, 'z', load_ops)?,
            literal => {
                let value: f32 = literal.parse().map_err(|_| ParseError::BadLiteral {
                    token: literal.to_string(),
                })?;
                b.load(Op::LoadConst(value));
            }
        }
    }

    if !tokens.is_empty() {
        if b.depth != 1 {
            return Err(ParseError::Unbalanced { depth: b.depth });
        }
        b.ops.push(store);
    }

    Ok(Program {
        ops: b.ops,
        max_stack_depth: b.max_depth,
    })
}
