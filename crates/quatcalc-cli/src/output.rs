//! Colored terminal rendering of calculator state.

use colored::*;

use quatcalc_core::{CalculatorState, Evaluation, Quaternion};

pub fn format_quaternion(q: &Quaternion) -> String {
    q.to_string().cyan().to_string()
}

pub fn format_evaluation(result: Evaluation) -> String {
    match result {
        Evaluation::Empty => "empty".dimmed().to_string(),
        Evaluation::Value(q) => q.to_string().green().bold().to_string(),
        Evaluation::DivisionByZero => "division by zero".red().bold().to_string(),
    }
}

pub fn print_state(state: &CalculatorState) {
    println!("  {}  {}", "q1:".bold(), format_quaternion(&state.q1()));
    println!("  {}  {}", "q2:".bold(), format_quaternion(&state.q2()));
    println!("  {}  {}", "op:".bold(), state.op());
    match state.memory() {
        Some(q) => println!("  {} {}", "mem:".bold(), format_quaternion(&q)),
        None => println!("  {} {}", "mem:".bold(), "unset".dimmed()),
    }
    println!("  {}    {}", "=".bold(), format_evaluation(state.result()));
}
