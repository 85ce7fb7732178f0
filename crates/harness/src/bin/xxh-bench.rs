//! Conformance and throughput driver for the workspace xxHash providers.
//!
//! Usage:
//!   cargo run --release -p harness --bin xxh-bench -- check
//!   cargo run --release -p harness --bin xxh-bench -- 64u

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use harness::bench::{self, BenchConfig, DEFAULT_PAYLOAD_LEN, Scenario};
use harness::payload::BenchPayload;
use harness::report::Report;
use harness::{HarnessError, conformance};

fn usage(exe: &str) -> ExitCode {
  eprintln!("Usage: {exe} [arg]");
  eprintln!("Arguments :");
  eprintln!("  check - validate known-answer digests");
  eprintln!("  32    - benchmark 32 bits, aligned");
  eprintln!("  32u   - benchmark 32 bits, unaligned");
  eprintln!("  64    - benchmark 64 bits, aligned");
  eprintln!("  64u   - benchmark 64 bits, unaligned");
  ExitCode::FAILURE
}

fn run_check<W: Write>(report: &mut Report<W>) -> Result<(), HarnessError> {
  conformance::run_suite()?;
  report.conformance_ok()?;
  Ok(())
}

fn run_bench<W: Write>(report: &mut Report<W>, scenario: Scenario) -> Result<(), HarnessError> {
  let payload = BenchPayload::new(DEFAULT_PAYLOAD_LEN)?;
  report.payload_banner(payload.len())?;

  let config = BenchConfig::default();
  let data = payload.slice(scenario.offset);
  let summary = bench::measure_with(scenario.variant, data, &config, |index, sample| {
    let _ = report.trial(&scenario, index, data.len(), sample);
  });
  report.scenario_summary(&scenario, &summary)?;
  Ok(())
}

fn main() -> ExitCode {
  let args: Vec<String> = env::args().collect();
  let exe = args.first().map(String::as_str).unwrap_or("xxh-bench");
  if args.len() != 2 {
    return usage(exe);
  }

  let stdout = io::stdout();
  let mut report = Report::new(stdout.lock());

  let result = if args[1] == "check" {
    run_check(&mut report)
  } else if let Some(scenario) = Scenario::parse(&args[1]) {
    run_bench(&mut report, scenario)
  } else {
    return usage(exe);
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {err}");
      ExitCode::FAILURE
    }
  }
}
