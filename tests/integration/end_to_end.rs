use labnote::{
    Category, ExceptionInfo, ExperimentRegistry, FixedClock, ListingUseCase, MemoryTrialStore,
    Observation, PurgeUseCase, RecordTrialRequest, RecordTrialUseCase, SummarizeUseCase,
    TrialOutcome, TrialStore, CONTROL_NAME, report_config,
};
use serde_json::json;
use std::io::Write;
use time::{Duration, OffsetDateTime, macros::datetime};

const T0: OffsetDateTime = datetime!(2024-05-01 09:00:00 UTC);

struct Lab {
    store: MemoryTrialStore,
    registry: ExperimentRegistry,
}

impl Lab {
    fn new() -> Self {
        Self {
            store: MemoryTrialStore::new(),
            registry: ExperimentRegistry::new(),
        }
    }

    fn record(&mut self, experiment: &str, at: OffsetDateTime, control: f64, candidate: Observation) -> Category {
        RecordTrialUseCase::new(&mut self.store, &mut self.registry, FixedClock(at))
            .execute(RecordTrialRequest {
                experiment: experiment.to_string(),
                outcome: TrialOutcome {
                    control: Observation::returned(CONTROL_NAME, control, json!([1, 2, 3])),
                    candidates: vec![candidate],
                    context: Some(json!({"request": "GET /widgets"})),
                },
            })
            .unwrap()
            .category
    }
}

#[test]
fn experiments_are_isolated_from_each_other() {
    let mut lab = Lab::new();
    lab.record("fast_path", T0, 1.0, Observation::returned("candidate", 0.5, json!([1, 2, 3])));
    lab.record("other", T0, 1.0, Observation::returned("candidate", 0.5, json!([3, 2, 1])));

    let fast = SummarizeUseCase::new(&lab.store, Default::default())
        .render("fast_path")
        .unwrap();
    assert!(fast.contains("Experiment: fast_path"));
    assert!(fast.contains("1 of 1 (100.00%) correct"));

    let other = SummarizeUseCase::new(&lab.store, Default::default())
        .render("other")
        .unwrap();
    assert!(other.contains("1 of 1 (100.00%) mismatched"));
    assert!(!other.contains("Speedups"));
}

#[test]
fn full_report_over_a_day_of_trials() {
    let mut lab = Lab::new();
    let mut at = T0;
    for i in 0..40u32 {
        let candidate = match i % 10 {
            7 => Observation::returned("candidate", 0.2, json!("wrong")),
            8 => Observation::raised("candidate", 9.0, ExceptionInfo::timeout("deadline exceeded")),
            9 => Observation::raised("candidate", 0.1, ExceptionInfo::new("IndexError", "out of range")),
            n => Observation::returned("candidate", 0.1 * f64::from(n + 1), json!([1, 2, 3])),
        };
        lab.record("widgets", at, 0.4, candidate);
        at += Duration::minutes(37);
    }

    let mut sink = Vec::new();
    let outcome = SummarizeUseCase::new(&lab.store, Default::default())
        .execute("widgets", &mut sink)
        .unwrap();
    let text = String::from_utf8(sink).unwrap();

    assert_eq!(outcome.counts.total, 40);
    assert!(outcome.counts.is_consistent());
    assert!(text.contains("28 of 40 (70.00%) correct"));
    assert!(text.contains(" 4 of 40 (10.00%) mismatched"));
    assert!(text.contains(" 4 of 40 (10.00%) timed out"));
    assert!(text.contains(" 4 of 40 (10.00%) raised errors"));
    // 39 * 37 minutes
    assert!(text.contains("(1 day)"));
    assert_eq!(text.lines().filter(|l| l.contains('[')).count(), 21);
    assert!(text.ends_with(&format!("{}\n", "-".repeat(80))));

    let registry_tally = *lab.registry.get("widgets").unwrap().tally();
    assert_eq!(registry_tally, outcome.counts);
}

#[test]
fn listings_and_purge_agree_with_the_summary() {
    let mut lab = Lab::new();
    lab.record("widgets", T0, 1.0, Observation::returned("candidate", 1.0, json!([1, 2])));
    lab.record(
        "widgets",
        T0,
        1.0,
        Observation::raised("candidate", 1.0, ExceptionInfo::new("KeyError", "sku")),
    );

    let listing = ListingUseCase::new(&lab.store);
    let mut sink = Vec::new();
    assert_eq!(listing.mismatches("widgets", None, &mut sink).unwrap(), 1);
    assert_eq!(listing.errors("widgets", None, &mut sink).unwrap(), 1);
    let text = String::from_utf8(sink).unwrap();
    assert!(text.contains("control # => [1,2,3]"));
    assert!(text.contains("candidate # => [1,2]"));
    assert!(text.contains("  * KeyError:  sku"));

    let purged = PurgeUseCase::new(&mut lab.store, &mut lab.registry)
        .execute("widgets")
        .unwrap();
    assert_eq!(purged.trials, 2);
    assert!(lab.store.snapshot("widgets").unwrap().counts.is_empty());
}

#[test]
fn config_file_changes_the_chart() {
    let mut lab = Lab::new();
    lab.record("widgets", T0, 1.0, Observation::returned("candidate", 0.25, json!([1, 2, 3])));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labnote.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[report]\nbar_scale = 10\npercentile_step = 10\nindent = 0").unwrap();

    let config = report_config(Some(&path)).unwrap();
    let text = SummarizeUseCase::new(&lab.store, config)
        .render("widgets")
        .unwrap();

    let rows: Vec<&str> = text.lines().filter(|l| l.contains('[')).collect();
    assert_eq!(rows.len(), 11);
    assert!(rows[0].starts_with("  0%  ["));
    let bar_cells = rows[0].chars().skip_while(|c| *c != '[').take_while(|c| *c != ']').count();
    assert_eq!(bar_cells, 1 + 21);
    assert!(rows[10].ends_with("+4.0x faster"));
}
