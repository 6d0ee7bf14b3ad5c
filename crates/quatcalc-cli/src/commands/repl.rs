use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::*;

use quatcalc_core::{CalculatorState, OperandSlot, Operation, Quaternion, SeedRecord};

use crate::output;

#[derive(Args)]
pub struct ReplArgs {
    /// Seed file (JSON `{q1, q2, memory, op}`) to start from
    #[arg(short, long)]
    seed: Option<PathBuf>,
}

pub fn run(args: ReplArgs) -> Result<()> {
    let mut state = match args.seed.as_deref() {
        Some(path) => load_seed(path)?,
        None => CalculatorState::new(),
    };

    // The pending operand edits, committed by an operation keyword or `=`.
    // They mirror what an input form would hold in front of the calculator.
    let mut display_q1 = state.q1();
    let mut display_q2 = state.q2();

    println!("{}", "quatcalc interactive session".bold());
    println!(
        "type {} for commands, {} to leave",
        "help".cyan(),
        "quit".cyan()
    );
    if args.seed.is_some() {
        output::print_state(&state);
    }

    prompt()?;
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();

        if line.is_empty() {
            prompt()?;
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        if let Err(err) = dispatch(line, &mut state, &mut display_q1, &mut display_q2) {
            println!("{} {err:#}", "error:".red().bold());
        }
        prompt()?;
    }

    Ok(())
}

fn dispatch(
    line: &str,
    state: &mut CalculatorState,
    display_q1: &mut Quaternion,
    display_q2: &mut Quaternion,
) -> Result<()> {
    let mut words = line.split_whitespace();
    let head = match words.next() {
        Some(word) => word,
        None => return Ok(()),
    };
    let rest: Vec<&str> = words.collect();

    match head {
        "q1" => {
            *display_q1 = parse_components(&rest)?;
            println!("q1 = {}", output::format_quaternion(display_q1));
        }
        "q2" => {
            *display_q2 = parse_components(&rest)?;
            println!("q2 = {}", output::format_quaternion(display_q2));
        }
        "add" | "sub" | "subtract" | "mul" | "multiply" | "div" | "divide" => {
            commit(state, *display_q1, *display_q2, parse_op(head)?);
        }
        "=" => {
            let op = state.op();
            commit(state, *display_q1, *display_q2, op);
        }
        "clear" => {
            state.clear();
            *display_q1 = Quaternion::ZERO;
            *display_q2 = Quaternion::ZERO;
            println!("cleared");
        }
        "save" => {
            let slot = parse_slot(single_arg(&rest, "save q1|q2")?)?;
            state.save_memory(slot);
            println!("saved {} to memory", slot);
        }
        "recall" => {
            let slot = parse_slot(single_arg(&rest, "recall q1|q2")?)?;
            recall(state, slot, display_q1, display_q2);
        }
        "show" => output::print_state(state),
        "store" => {
            let path = PathBuf::from(single_arg(&rest, "store <path>")?);
            store_seed(state, &path)?;
        }
        "load" => {
            let path = PathBuf::from(single_arg(&rest, "load <path>")?);
            *state = load_seed(&path)?;
            *display_q1 = state.q1();
            *display_q2 = state.q2();
            output::print_state(state);
        }
        "help" => print_help(),
        other => anyhow::bail!("unknown command {other:?} (try `help`)"),
    }

    Ok(())
}

/// Commit the pending operands with the given operation and show the result.
/// A zero-norm divisor is not fatal to the session: the operands stay
/// committed and the failure shows up in the result slot.
fn commit(state: &mut CalculatorState, q1: Quaternion, q2: Quaternion, op: Operation) {
    let _ = state.set_operands(q1, q2, op);
    println!("{} {}", "=".bold(), output::format_evaluation(state.result()));
}

fn recall(
    state: &mut CalculatorState,
    slot: OperandSlot,
    display_q1: &mut Quaternion,
    display_q2: &mut Quaternion,
) {
    match state.recall_memory(slot) {
        Ok(false) => {
            println!("{}", "memory is empty".yellow());
            return;
        }
        // On the error path the recalled operand is committed all the
        // same; the slot shows the divide failure below.
        Ok(true) | Err(_) => {}
    }

    match slot {
        OperandSlot::Q1 => *display_q1 = state.q1(),
        OperandSlot::Q2 => *display_q2 = state.q2(),
    }
    println!("{} = {}", slot, output::format_quaternion(&state.operand(slot)));
    println!("{} {}", "=".bold(), output::format_evaluation(state.result()));
}

fn parse_components(parts: &[&str]) -> Result<Quaternion> {
    if parts.len() != 4 {
        anyhow::bail!("expected 4 components, got {}", parts.len());
    }

    let mut components = [0.0f64; 4];
    for (slot, raw) in components.iter_mut().zip(parts) {
        *slot = raw
            .parse()
            .with_context(|| format!("bad component {raw:?}"))?;
    }

    let [w, i, j, k] = components;
    Ok(Quaternion::try_new(w, i, j, k)?)
}

fn parse_op(word: &str) -> Result<Operation> {
    match word {
        "add" => Ok(Operation::Add),
        "sub" | "subtract" => Ok(Operation::Subtract),
        "mul" | "multiply" => Ok(Operation::Multiply),
        "div" | "divide" => Ok(Operation::Divide),
        other => anyhow::bail!("unknown operation {other:?}"),
    }
}

fn parse_slot(name: &str) -> Result<OperandSlot> {
    match name {
        "q1" => Ok(OperandSlot::Q1),
        "q2" => Ok(OperandSlot::Q2),
        other => anyhow::bail!("expected q1 or q2, got {other:?}"),
    }
}

fn single_arg<'a>(rest: &[&'a str], usage: &str) -> Result<&'a str> {
    match rest {
        [one] => Ok(one),
        _ => anyhow::bail!("usage: {usage}"),
    }
}

fn load_seed(path: &Path) -> Result<CalculatorState> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let seed: SeedRecord = serde_json::from_str(&raw)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    let state = CalculatorState::from_seed(&seed)
        .with_context(|| format!("applying seed file {}", path.display()))?;

    tracing::info!("loaded calculator {} from {}", state.id(), path.display());
    Ok(state)
}

fn store_seed(state: &CalculatorState, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&state.snapshot())?;
    fs::write(path, json).with_context(|| format!("writing seed file {}", path.display()))?;

    tracing::info!("stored calculator {} to {}", state.id(), path.display());
    println!("stored state to {}", path.display());
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("{} ", "quatcalc>".bold());
    io::stdout().flush()
}

fn print_help() {
    println!("  q1 <w> <i> <j> <k>     set the first operand");
    println!("  q2 <w> <i> <j> <k>     set the second operand");
    println!("  add | sub | mul | div  select the operation and evaluate");
    println!("  =                      re-evaluate with the current operation");
    println!("  clear                  reset operands, memory and result");
    println!("  save q1|q2             copy an operand into memory");
    println!("  recall q1|q2           overwrite an operand from memory");
    println!("  show                   print the full calculator state");
    println!("  store <path>           write the state as a JSON seed");
    println!("  load <path>            replace the state from a JSON seed");
    println!("  quit                   leave the session");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_components_requires_four() {
        assert!(parse_components(&["1", "2", "3"]).is_err());
        assert_eq!(
            parse_components(&["1", "2", "3", "4"]).unwrap(),
            Quaternion::new(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_parse_op_accepts_short_and_wire_names() {
        assert_eq!(parse_op("div").unwrap(), Operation::Divide);
        assert_eq!(parse_op("divide").unwrap(), Operation::Divide);
        assert!(parse_op("pow").is_err());
    }

    #[test]
    fn test_dispatch_runs_a_full_scenario() {
        let mut state = CalculatorState::new();
        let mut q1 = state.q1();
        let mut q2 = state.q2();

        dispatch("q1 1 2 3 4", &mut state, &mut q1, &mut q2).unwrap();
        dispatch("q2 4 3 2 1", &mut state, &mut q1, &mut q2).unwrap();
        dispatch("add", &mut state, &mut q1, &mut q2).unwrap();
        assert_eq!(
            state.result_value(),
            Some(Quaternion::new(5.0, 5.0, 5.0, 5.0))
        );

        dispatch("save q1", &mut state, &mut q1, &mut q2).unwrap();
        assert_eq!(state.memory(), Some(Quaternion::new(1.0, 2.0, 3.0, 4.0)));

        dispatch("clear", &mut state, &mut q1, &mut q2).unwrap();
        assert_eq!(state.memory(), None);
        assert_eq!(q1, Quaternion::ZERO);
    }

    #[test]
    fn test_dispatch_survives_divide_by_zero() {
        let mut state = CalculatorState::new();
        let mut q1 = state.q1();
        let mut q2 = state.q2();

        dispatch("q1 1 2 3 4", &mut state, &mut q1, &mut q2).unwrap();
        dispatch("q2 0 0 0 0", &mut state, &mut q1, &mut q2).unwrap();
        // The failure lands in the result slot, not in the command result.
        dispatch("div", &mut state, &mut q1, &mut q2).unwrap();
        assert_eq!(state.result_value(), None);
        assert_eq!(state.op(), Operation::Divide);
    }

    #[test]
    fn test_dispatch_rejects_unknown_commands() {
        let mut state = CalculatorState::new();
        let mut q1 = state.q1();
        let mut q2 = state.q2();
        assert!(dispatch("frobnicate", &mut state, &mut q1, &mut q2).is_err());
    }
}
