//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::{DateTime, TimeDelta, Utc};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: DateTime<Utc>,
}

impl OutputFormatter {
    /// Create a new output formatter; wall-clock time is measured from here
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Utc::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(solution), true) => println!("{}", solution.cost),
            (Ok(_), false) => println!("{}", format_full(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(e), false) => eprintln!("{}: Error - {}", result.label, e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;
        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .map(|r| r.expand_duration + r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Runs: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!("Elapsed wall-clock time: {}", format_duration(self.elapsed()));
    }

    /// Time since the formatter was created
    pub fn elapsed(&self) -> TimeDelta {
        Utc::now() - self.start_time
    }
}

/// Full line for a successful result, e.g.
/// `Part 2 (x5, 50x50, 0 -> 2499): 315 (parse: 41µs, expand: 96µs, solve: 1.27ms, visited 2496)`
fn format_full(result: &SolverResult) -> String {
    let Ok(solution) = &result.answer else {
        return format!("{}: no answer", result.label);
    };

    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    let expand_timing = if result.multiplier > 1 {
        format!("expand: {}, ", format_duration(result.expand_duration))
    } else {
        String::new()
    };

    format!(
        "{} (x{}, {}x{}, {} -> {}): {} ({}{}solve: {}, visited {})",
        result.label,
        result.multiplier,
        solution.width,
        solution.height,
        solution.start,
        solution.end,
        solution.cost,
        parse_timing,
        expand_timing,
        format_duration(result.solve_duration),
        solution.visited
    )
}

/// Duration in the largest fitting unit; `N/A` when the wall clock stepped backwards
fn format_duration(d: TimeDelta) -> String {
    match d.num_microseconds() {
        Some(micros @ 0..1_000) => format!("{}µs", micros),
        Some(micros @ 1_000..1_000_000) => format!("{:.2}ms", micros as f64 / 1e3),
        Some(micros) if micros > 0 => format!("{:.2}s", micros as f64 / 1e6),
        _ => "N/A".to_string(),
    }
}
