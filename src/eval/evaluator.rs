use log::{debug, trace};

use crate::core::ast::{Expression, InfixOperator, PrefixOperator, Program, Statement};
use crate::value::{RuntimeError, Value};

pub type EvalResult<T = Value> = Result<T, RuntimeError>;

/// # 程序求值
///
/// 返回最后一条语句的值, 遇到return提前结束; 空程序没有值
pub fn eval(program: &Program) -> EvalResult<Option<Value>> {
    let mut result = None;
    for statement in &program.statements {
        let value = eval_statement(statement).map_err(|err| {
            debug!("evaluation aborted at `{}`: {}", statement, err);
            err
        })?;
        result = Some(value);
        if let Statement::Return { .. } = statement {
            break;
        }
    }
    Ok(result)
}

/// ## 单条语句求值
pub fn eval_statement(statement: &Statement) -> EvalResult {
    trace!("eval statement: {}", statement);
    match statement {
        Statement::Expression { expression, .. } => eval_expression(expression),
        Statement::Return { return_value, .. } => eval_expression(return_value),
        Statement::Let { .. } => Err(RuntimeError::UnsupportedStatement(statement.to_string())),
    }
}

/// #表达式求值
pub fn eval_expression(expr: &Expression) -> EvalResult {
    match expr {
        Expression::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expression::BooleanLiteral { value, .. } => Ok(Value::Boolean(*value)),
        Expression::Prefix {
            operator, right, ..
        } => eval_prefix_expression(*operator, eval_expression(right)?),
        Expression::Infix {
            left,
            operator,
            right,
            ..
        } => {
            let left = eval_expression(left)?;
            let right = eval_expression(right)?;
            eval_infix_expression(*operator, left, right)
        }
        Expression::Identifier(id) => Err(RuntimeError::UnboundIdentifier(id.value.clone())),
    }
}

/// ## 前缀表达式求值
fn eval_prefix_expression(operator: PrefixOperator, right: Value) -> EvalResult {
    match operator {
        PrefixOperator::Not => Ok(eval_bang_operator(right)),
        PrefixOperator::Neg => match right {
            Value::Integer(int) => int
                .checked_neg()
                .map(Value::Integer)
                .ok_or_else(|| RuntimeError::IntegerOverflow(format!("-{}", int))),
            _ => Err(RuntimeError::TypeMismatch { operator, right }),
        },
    }
}

/// 只有false取反是true, 其余都当作真值
fn eval_bang_operator(right: Value) -> Value {
    match right {
        Value::Boolean(bool) => Value::Boolean(!bool),
        Value::Integer(_) => Value::Boolean(false),
    }
}

/// ## 中缀表达式求值
fn eval_infix_expression(operator: InfixOperator, left: Value, right: Value) -> EvalResult {
    match (operator, left, right) {
        (InfixOperator::Eq, _, _) => Ok(Value::Boolean(left == right)),
        (InfixOperator::NotEq, _, _) => Ok(Value::Boolean(left != right)),
        (_, Value::Integer(l), Value::Integer(r)) => eval_integer_infix_expression(operator, l, r),
        (_, Value::Boolean(_), Value::Boolean(_)) => Err(RuntimeError::UnsupportedOperator {
            operator,
            left,
            right,
        }),
        _ => Err(RuntimeError::OperandMismatch {
            operator,
            left,
            right,
        }),
    }
}

/// ## 整数运算
///
/// 除法向零取整, 除数为0和溢出都是错误
fn eval_integer_infix_expression(operator: InfixOperator, left: i64, right: i64) -> EvalResult {
    let checked = match operator {
        InfixOperator::Plus => left.checked_add(right),
        InfixOperator::Minus => left.checked_sub(right),
        InfixOperator::Mul => left.checked_mul(right),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero(left));
            }
            left.checked_div(right)
        }
        InfixOperator::Lt => return Ok(Value::Boolean(left < right)),
        InfixOperator::Gt => return Ok(Value::Boolean(left > right)),
        InfixOperator::Eq => return Ok(Value::Boolean(left == right)),
        InfixOperator::NotEq => return Ok(Value::Boolean(left != right)),
    };
    checked
        .map(Value::Integer)
        .ok_or_else(|| RuntimeError::IntegerOverflow(format!("{} {} {}", left, operator, right)))
}
