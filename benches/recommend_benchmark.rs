use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crop_advisor::classifiers::{is_plausible, RuleClassifier};
use crop_advisor::models::Measurements;
use crop_advisor::predictor::{LabelEncoder, MinMaxScaler, ModelBundle, NearestCentroid};
use crop_advisor::CropRecommender;

// Grid of measurements covering every temperature band
fn create_test_measurements(count: usize) -> Vec<Measurements> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Measurements::new(
                (t * 7.0) % 140.0,
                (t * 11.0) % 145.0,
                (t * 13.0) % 205.0,
                5.0 + (t * 0.37) % 40.0,
                20.0 + (t * 1.3) % 80.0,
                4.0 + (t * 0.11) % 6.0,
                20.0 + (t * 17.0) % 2500.0,
            )
        })
        .collect()
}

fn create_test_bundle(classes: usize) -> ModelBundle {
    let scaler = MinMaxScaler::new(
        vec![0.0, 5.0, 5.0, 8.8, 14.3, 3.5, 20.2],
        vec![140.0, 145.0, 205.0, 43.7, 99.9, 9.9, 298.6],
    )
    .unwrap();
    let names = [
        "rice", "maize", "coffee", "cotton", "apple", "banana", "wheat", "mungbean", "jute",
        "lentil",
    ];
    let encoder = LabelEncoder::new(
        (0..classes)
            .map(|i| names[i % names.len()].to_string())
            .collect(),
    );
    let classifier = NearestCentroid::new(
        (0..classes)
            .map(|i| vec![(i as f64) / classes as f64; 7])
            .collect(),
    );

    ModelBundle::new(scaler, encoder, classifier).unwrap()
}

fn benchmark_rule_classifier(c: &mut Criterion) {
    let classifier = RuleClassifier::new();
    let measurements = create_test_measurements(1000);

    c.bench_function("rule_classifier_1000", |b| {
        b.iter(|| {
            for m in &measurements {
                black_box(classifier.classify_measurements(black_box(m)));
            }
        })
    });
}

fn benchmark_plausibility_gate(c: &mut Criterion) {
    let measurements = create_test_measurements(1000);

    c.bench_function("plausibility_gate_1000", |b| {
        b.iter(|| {
            for m in &measurements {
                black_box(is_plausible(
                    black_box("coffee"),
                    m.temperature,
                    m.rainfall,
                    m.ph,
                    m.humidity,
                ));
            }
        })
    });
}

fn benchmark_recommend(c: &mut Criterion) {
    let measurements = create_test_measurements(1000);
    let mut group = c.benchmark_group("recommend");

    for classes in [2, 22, 100] {
        let recommender = CropRecommender::new(create_test_bundle(classes));

        group.bench_with_input(BenchmarkId::new("classes", classes), &classes, |b, _| {
            b.iter(|| {
                for m in &measurements {
                    black_box(recommender.recommend(black_box(m)));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_rule_classifier,
    benchmark_plausibility_gate,
    benchmark_recommend
);
criterion_main!(benches);
