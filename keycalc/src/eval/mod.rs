use crate::{Error, Op, Result, Token, MAX_TOKENS};


/// Evaluates the token sequence with a two-stack, left-to-right scan.
///
/// Operands go on a value stack. Before an operator is pushed, every stacked
/// operator of greater or equal precedence is reduced first, which keeps
/// chains of equal precedence left-associative.
pub fn eval(tokens: &[Token]) -> Result<f64> {
    if tokens.is_empty() {
        return Ok(0.0);
    }
    // An operator cannot be the last token; this also rejects a buffer
    // holding nothing but an operator.
    if tokens.last().is_some_and(Token::is_op) {
        return Err(Error::Syntax);
    }
    if let [Token::Num(num)] = tokens {
        return Ok(*num);
    }

    let mut vals: Vec<f64> = Vec::new();
    let mut ops: Vec<Op> = Vec::new();

    for t in tokens {
        match *t {
            Token::Num(num) => {
                if vals.len() >= MAX_TOKENS {
                    return Err(Error::StackOverflow);
                }
                vals.push(num);
            }
            Token::Op(op) => {
                while let Some(&top) = ops.last() {
                    if top.prec() < op.prec() {
                        break;
                    }
                    ops.pop();
                    reduce(&mut vals, top)?;
                }
                if ops.len() >= MAX_TOKENS {
                    return Err(Error::StackOverflow);
                }
                ops.push(op);
            }
        }
    }

    while let Some(op) = ops.pop() {
        reduce(&mut vals, op)?;
    }

    // Anything but exactly one remaining value is an arity mismatch.
    match vals.as_slice() {
        [result] => Ok(*result),
        _ => Err(Error::Syntax),
    }
}

/// Pops one operator's worth of operands and pushes the partial result back.
fn reduce(vals: &mut Vec<f64>, op: Op) -> Result<()> {
    let (Some(b), Some(a)) = (vals.pop(), vals.pop()) else {
        return Err(Error::Syntax);
    };
    vals.push(op.apply(a, b)?);
    Ok(())
}
