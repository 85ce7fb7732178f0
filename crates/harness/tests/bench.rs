use std::time::Duration;

use harness::HashVariant;
use harness::bench::{BenchConfig, Scenario, measure};
use harness::payload::BenchPayload;

fn test_config() -> BenchConfig {
  BenchConfig {
    trials: 2,
    batch: 8,
    min_window: Duration::from_millis(5),
  }
}

#[test]
fn all_scenarios_report_positive_finite_throughput() {
  let payload = BenchPayload::new(4096).unwrap();

  for scenario in Scenario::ALL {
    let summary = measure(scenario.variant, payload.slice(scenario.offset), &test_config());
    let mb_s = summary.throughput_mb_s();
    assert!(mb_s.is_finite(), "{}: throughput not finite", scenario.label());
    assert!(mb_s > 0.0, "{}: throughput not positive", scenario.label());
  }
}

#[test]
fn best_of_n_is_the_fastest_trial() {
  let payload = BenchPayload::new(4096).unwrap();
  let config = test_config().with_trials(4);
  let summary = measure(HashVariant::Width64, payload.slice(0), &config);

  assert_eq!(summary.trials.len(), 4);
  for trial in &summary.trials {
    assert!(
      summary.throughput_mb_s() >= trial.throughput_mb_s(summary.payload_len) - 1e-9,
      "summary slower than an individual trial"
    );
  }
  let best = summary
    .trials
    .iter()
    .map(|trial| trial.per_call_secs())
    .fold(f64::INFINITY, f64::min);
  assert_eq!(summary.best_per_call_secs(), best);
}

#[test]
fn every_trial_covers_the_minimum_window() {
  let payload = BenchPayload::new(1024).unwrap();
  let config = test_config();
  let summary = measure(HashVariant::Width32, payload.slice(1), &config);

  for trial in &summary.trials {
    assert!(trial.calls > 0);
    assert!(trial.elapsed >= config.min_window);
  }
}

#[test]
fn misaligned_scenarios_share_the_aligned_length() {
  let payload = BenchPayload::new(4096).unwrap();
  let aligned = payload.slice(0);
  assert_eq!(aligned.as_ptr() as usize % 8, 0);

  for scenario in Scenario::ALL {
    let view = payload.slice(scenario.offset);
    assert_eq!(view.len(), aligned.len());
    assert_eq!(view.as_ptr() as usize % 8, scenario.offset % 8);
  }
}

#[test]
fn scenario_tokens_round_trip() {
  assert_eq!(Scenario::parse("32"), Some(Scenario { variant: HashVariant::Width32, offset: 0 }));
  assert_eq!(Scenario::parse("32u"), Some(Scenario { variant: HashVariant::Width32, offset: 1 }));
  assert_eq!(Scenario::parse("64"), Some(Scenario { variant: HashVariant::Width64, offset: 0 }));
  assert_eq!(Scenario::parse("64u"), Some(Scenario { variant: HashVariant::Width64, offset: 3 }));
  assert_eq!(Scenario::parse("128"), None);
  assert_eq!(Scenario::parse("check"), None);
  assert_eq!(Scenario::parse(""), None);
}
