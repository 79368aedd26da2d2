//! Classification and report export benchmarks.

use std::path::PathBuf;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use diabrisk::{FeatureVector, PatientInput, ReferenceTable, Report, RiskClassifier, XgbClassifier};

fn fixture_model() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/diabetes_xgb.json")
}

fn bench_load(c: &mut Criterion) {
    let path = fixture_model();
    c.bench_function("load_artifact", |b| {
        b.iter(|| XgbClassifier::load(black_box(&path)).unwrap())
    });
}

fn bench_classify(c: &mut Criterion) {
    let classifier = XgbClassifier::load(fixture_model()).unwrap();
    let features = FeatureVector::from_input(&PatientInput::default());

    c.bench_function("classify_default_input", |b| {
        b.iter(|| classifier.classify(black_box(&features)).unwrap())
    });
}

fn bench_report_csv(c: &mut Criterion) {
    let input = PatientInput::default();
    c.bench_function("assemble_and_serialize_report", |b| {
        b.iter(|| {
            let report = Report::assemble(black_box(&input), ReferenceTable::standard(), "Jane");
            report.to_csv().unwrap()
        })
    });
}

criterion_group!(benches, bench_load, bench_classify, bench_report_csv);
criterion_main!(benches);
