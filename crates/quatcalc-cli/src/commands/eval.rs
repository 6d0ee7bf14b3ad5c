use anyhow::Context;
use clap::Args;

use quatcalc_core::{CalcError, CalculatorState, Operation, Quaternion};

use crate::output;

#[derive(Args)]
pub struct EvalArgs {
    /// First operand as comma-separated components `w,i,j,k`
    #[arg(long, value_parser = parse_quaternion)]
    q1: Quaternion,

    /// Second operand as comma-separated components `w,i,j,k`
    #[arg(long, value_parser = parse_quaternion)]
    q2: Quaternion,

    /// Operation: add, subtract, multiply, divide
    #[arg(long, value_parser = parse_operation)]
    op: Operation,
}

pub fn run(args: EvalArgs) -> anyhow::Result<()> {
    tracing::debug!("evaluating {:?} {} {:?}", args.q1, args.op, args.q2);

    let mut state = CalculatorState::new();
    state
        .set_operands(args.q1, args.q2, args.op)
        .context("evaluation failed")?;

    println!("{}", output::format_evaluation(state.result()));
    Ok(())
}

fn parse_quaternion(raw: &str) -> Result<Quaternion, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(format!(
            "expected `w,i,j,k`, got {} component(s)",
            parts.len()
        ));
    }

    let mut components = [0.0f64; 4];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("bad component {part:?}"))?;
    }

    let [w, i, j, k] = components;
    // Strict at the host boundary: reject NaN/inf instead of clamping.
    Quaternion::try_new(w, i, j, k).map_err(|e| e.to_string())
}

fn parse_operation(raw: &str) -> Result<Operation, String> {
    raw.parse().map_err(|e: CalcError| e.to_string())
}
