use labnote::{
    Category, ExperimentSnapshot, MemoryTrialStore, ReportConfig, SummaryInput, TimingSeries,
    TrialRecord, TrialStore, classify, render_summary,
};

const SNAPSHOT: &str = r#"{
  "schema": "labnote.snapshot.v1",
  "experiment": "checkout",
  "counts": { "total": 6, "correct": 4, "mismatched": 1, "timed_out": 0, "other_error": 1 },
  "earliest": "2024-02-01T10:00:00Z",
  "latest": "2024-02-04T10:00:00Z",
  "timings": [
    { "time_delta": 0.5, "speedup_factor": 2.0 },
    { "time_delta": -0.25, "speedup_factor": -1.5 },
    { "speedup_factor": 3.0 },
    { "time_delta": 0.0, "speedup_factor": 0.0 }
  ]
}"#;

const LEGACY_TRIAL: &str = r#"{
  "schema": "labnote.trial.v1",
  "id": 12,
  "experiment": "checkout",
  "created_at": "2024-02-01T10:00:00Z",
  "control": { "name": "control", "duration": 0.5, "value": 42 },
  "candidates": [
    { "name": "candidate", "duration": 0.25, "exception": { "type_name": "timeout", "message": "slow" } }
  ]
}"#;

#[test]
fn stored_snapshot_renders_a_report() {
    let snapshot: ExperimentSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
    let series = TimingSeries::from_pairs(&snapshot.timings);
    assert_eq!(series.time_deltas, vec![-0.25, 0.0, 0.5]);
    assert_eq!(series.speedup_factors, vec![-1.5, 0.0, 2.0, 3.0]);

    let text = render_summary(
        &SummaryInput {
            experiment: &snapshot.experiment,
            span: snapshot.earliest.zip(snapshot.latest),
            counts: snapshot.counts,
            time_deltas: &series.time_deltas,
            speedup_factors: &series.speedup_factors,
        },
        &ReportConfig::default(),
    )
    .unwrap();

    assert!(text.contains("Experiment: checkout"));
    assert!(text.contains("Latest result:    2024-02-04T10:00:00Z (3 days)"));
    assert!(text.contains("4 of 6 (66.67%) correct"));
    assert!(text.contains("1 of 6 (16.67%) raised errors"));
    assert!(!text.contains("timed out"));
    assert!(text.contains("Median time delta: +0.000s  (90% of observations between -0.250s and +0.500s)"));
}

#[test]
fn missing_flags_default_to_false() {
    let rec: TrialRecord = serde_json::from_str(LEGACY_TRIAL).unwrap();
    assert!(!rec.equivalent);
    assert!(!rec.raised_error);
    assert!(!rec.timed_out);
    assert!(rec.candidates[0].timed_out());
    // flags are authoritative, observations are not re-inspected
    assert_eq!(classify(&rec), Category::Mismatched);
}

#[test]
fn records_survive_a_trip_through_json() {
    let mut store = MemoryTrialStore::new();
    let rec: TrialRecord = serde_json::from_str(LEGACY_TRIAL).unwrap();
    store.insert(rec).unwrap();

    let stored = store.records("checkout", None, None).unwrap();
    let json = serde_json::to_string(&stored[0]).unwrap();
    let back: TrialRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stored[0]);
    assert_eq!(back.id, 1);
}
