//! End-to-end runs of the registered suite through the harness.

use jsmicro_cases::string_index_of_2;
use jsmicro_core::BenchValue;
use jsmicro_harness::{listing, run_entry, run_selected, ConfigError, RunConfig, RunError};

fn quick() -> RunConfig {
    RunConfig {
        warmup: 0,
        samples: 2,
    }
}

#[test]
fn full_suite_runs_and_reports_last_index() {
    let registry = jsmicro_cases::suite().unwrap();
    let report = run_selected::<&str>(&registry, &[], &quick()).unwrap();

    assert_eq!(report.measurements().len(), registry.len());
    let m = &report.measurements()[0];
    assert_eq!(m.name, "string-indexOf-2");
    assert_eq!(
        m.description,
        "String.prototype.indexOf, finding character at the end of a long string"
    );
    assert_eq!(m.samples.len(), 2);
    assert_eq!(m.value, BenchValue::Index(Some(61)));
    assert!(m.min() <= m.max());
}

#[test]
fn named_selection_matches_direct_entry_call() {
    let registry = jsmicro_cases::suite().unwrap();
    let entry = registry.get(string_index_of_2::NAME).unwrap();

    let m = run_entry(entry, &quick()).unwrap();
    assert_eq!(m.value, string_index_of_2::entry());
}

#[test]
fn json_report_for_suite() {
    let registry = jsmicro_cases::suite().unwrap();
    let report = run_selected(&registry, &["string-indexOf-2"], &quick()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(parsed["results"][0]["name"], "string-indexOf-2");
    assert_eq!(parsed["results"][0]["value"], "61");
}

#[test]
fn zero_samples_rejected_before_running() {
    let registry = jsmicro_cases::suite().unwrap();
    let config = RunConfig {
        warmup: 0,
        samples: 0,
    };
    let err = run_selected::<&str>(&registry, &[], &config).unwrap_err();
    assert_eq!(err, RunError::Config(ConfigError::ZeroSamples));
}

#[test]
fn listing_for_suite() {
    let registry = jsmicro_cases::suite().unwrap();
    assert_eq!(
        listing(&registry),
        "string-indexOf-2\tString.prototype.indexOf, finding character at the end of a long string\n"
    );
}

#[test]
fn repeated_name_runs_once() {
    let registry = jsmicro_cases::suite().unwrap();
    let report = run_selected(&registry, &["string-indexOf-2", "string-indexOf-2"], &quick()).unwrap();
    assert_eq!(report.measurements().len(), 1);
}
