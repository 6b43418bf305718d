// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! `checkint-diff`: runs the differential harness for one integer width.
//!
//! **Usage:**
//! ```text
//! checkint-diff [--width 8|16|32|64] [--ops add,sub,...] [--samples N]
//!               [--seed S] [--exhaustive] [--fail-on-mismatch] [--quiet]
//! ```
//!
//! Exit codes: `0` when the run completes (with or without mismatches),
//! `1` when `--fail-on-mismatch` is given and a mismatch was found, `2` on a
//! configuration error.

use anyhow::{Context, Result};
use checkint_harness::config::{DEFAULT_SAMPLES, DEFAULT_SEED, HarnessConfig, SweepStrategy};
use checkint_harness::error::HarnessError;
use checkint_harness::operation::Operation;
use checkint_harness::report::{HarnessReport, Reporting, run_for_width};
use clap::Parser;
use std::process::ExitCode;

/// Compare the checked integer operations against wide reference implementations.
#[derive(Parser, Debug)]
#[command(
    name = "checkint-diff",
    version,
    about = "Differential test of checked integer operations against wide reference implementations"
)]
struct Args {
    /// Integer width in bits: 8, 16, 32 or 64.
    #[arg(long, default_value_t = 8)]
    width: u32,

    /// Comma-separated operations to compare (default: all).
    #[arg(long, value_delimiter = ',')]
    ops: Option<Vec<String>>,

    /// Random cases per operation for widths above 8 bits.
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: u64,

    /// Seed for the random cases.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Enumerate every case even above 8 bits (unary operations up to 16 bits).
    #[arg(long)]
    exhaustive: bool,

    /// Exit with status 1 if any mismatch is found.
    #[arg(long)]
    fail_on_mismatch: bool,

    /// Print only mismatches and the final table.
    #[arg(long)]
    quiet: bool,

    /// Mismatch lines printed per operation before the rest are suppressed.
    #[arg(long, default_value_t = 64)]
    max_mismatch_lines: u64,
}

impl Args {
    fn operations(&self) -> Result<Option<Vec<Operation>>, HarnessError> {
        let Some(names) = &self.ops else {
            return Ok(None);
        };
        let ops = names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::parse::<Operation>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(ops))
    }

    fn strategy(&self) -> Option<SweepStrategy> {
        if self.exhaustive {
            Some(SweepStrategy::Exhaustive)
        } else if self.width > 8 {
            Some(SweepStrategy::Sampled {
                samples: self.samples,
                seed: self.seed,
            })
        } else {
            None
        }
    }

    fn config(&self) -> Result<HarnessConfig, HarnessError> {
        let mut builder = HarnessConfig::builder().fail_on_mismatch(self.fail_on_mismatch);
        if let Some(ops) = self.operations()? {
            builder = builder.with_operations(ops);
        }
        if let Some(strategy) = self.strategy() {
            builder = builder.with_strategy(strategy);
        }
        Ok(builder.build())
    }

    fn reporting(&self) -> Reporting {
        Reporting::Console {
            quiet: self.quiet,
            max_mismatch_lines: self.max_mismatch_lines,
        }
    }
}

fn run(args: &Args) -> Result<HarnessReport> {
    let config = args.config().context("invalid --ops")?;
    let report = run_for_width(args.width, &config, args.reporting())
        .with_context(|| format!("cannot run the {}-bit harness", args.width))?;
    Ok(report)
}

const EXIT_MISMATCH: u8 = 1;
const EXIT_CONFIGURATION: u8 = 2;

/// Prints the outcome of a run and maps it to the process exit status.
fn exit_status(result: Result<HarnessReport>, quiet: bool) -> u8 {
    let report = match result {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return EXIT_CONFIGURATION;
        }
    };

    if !quiet {
        println!("{}", report.summary());
    }

    match report.into_result() {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("checkint-diff FAILED: {err}");
            EXIT_MISMATCH
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    ExitCode::from(exit_status(run(&args), args.quiet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkint_harness::conservative;
    use checkint_harness::harness::Harness;
    use checkint_harness::monitor::no_op::NoOperationMonitor;
    use checkint_harness::operation::Implementations;

    fn wrapping_sub(x: i8, y: i8) -> Option<i8> {
        Some(x.wrapping_sub(y))
    }

    fn with_wrapping_sub(operation: Operation) -> Implementations<i8> {
        match operation {
            Operation::Sub => Implementations::Binary {
                tricky: wrapping_sub,
                conservative: conservative::sub::<i8>,
            },
            other => other.implementations(),
        }
    }

    /// Runs the configuration `argv` describes with a wrapping `sub`.
    fn wrapping_sub_report(argv: &[&str]) -> HarnessReport {
        let config = parse(argv).config().unwrap();
        let harness = Harness::<i8>::new(config).with_implementations(with_wrapping_sub);
        let outcome = harness.sweep(&mut NoOperationMonitor::new()).unwrap();
        HarnessReport::from_outcome(&harness, outcome)
    }

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("checkint-diff").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.width, 8);
        assert!(!args.fail_on_mismatch);
        let config = args.config().unwrap();
        assert_eq!(config.operations(), &Operation::ALL);
        assert_eq!(config.strategy_for_bits(8), SweepStrategy::Exhaustive);
    }

    #[test]
    fn test_ops_accept_aliases() {
        let args = parse(&["--ops", "add,mod, divEu"]);
        let config = args.config().unwrap();
        assert_eq!(
            config.operations(),
            &[Operation::Add, Operation::Rem, Operation::DivEuclid]
        );
    }

    #[test]
    fn test_unknown_op_is_a_configuration_error() {
        let args = parse(&["--ops", "add,pow"]);
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("unknown operation 'pow'"));
    }

    #[test]
    fn test_wide_widths_sample_with_the_given_seed() {
        let args = parse(&["--width", "32", "--samples", "10", "--seed", "3"]);
        assert_eq!(
            args.config().unwrap().strategy_for_bits(32),
            SweepStrategy::Sampled {
                samples: 10,
                seed: 3
            }
        );
    }

    #[test]
    fn test_unsupported_width_is_a_configuration_error() {
        let args = parse(&["--width", "12", "--quiet"]);
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("Unsupported width 12"));
    }

    #[test]
    fn test_exhaustive_binary_at_sixteen_bits_is_refused() {
        let args = parse(&["--width", "16", "--exhaustive", "--ops", "mul", "--quiet"]);
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("Cannot sweep mul exhaustively at 16 bits"));
    }

    #[test]
    fn test_mismatch_exits_with_one_only_when_requested() {
        let strict = wrapping_sub_report(&["--ops", "sub", "--fail-on-mismatch"]);
        assert!(strict.total_mismatches() > 0);
        assert_eq!(exit_status(Ok(strict), true), EXIT_MISMATCH);

        let soft = wrapping_sub_report(&["--ops", "sub"]);
        assert!(soft.total_mismatches() > 0);
        assert_eq!(exit_status(Ok(soft), true), 0);
    }

    #[test]
    fn test_clean_run_exits_with_zero() {
        let args = parse(&["--ops", "sub,neg", "--fail-on-mismatch", "--quiet"]);
        assert_eq!(exit_status(run(&args), args.quiet), 0);
    }

    #[test]
    fn test_configuration_error_exits_with_two() {
        let args = parse(&["--ops", "pow", "--quiet"]);
        assert_eq!(exit_status(run(&args), args.quiet), EXIT_CONFIGURATION);
    }
}
