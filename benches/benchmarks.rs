criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        validating_request_body,
        predicting_with_linear_model,
        predicting_with_forest_model,
}

fn columns() -> Vec<String> {
    Field::all().iter().map(|f| f.name().to_string()).collect()
}

fn metadata() -> Metadata {
    Metadata::new("bench".to_string(), 0.9, 1.0, 1.0, 1)
}

fn validating_request_body(c: &mut criterion::Criterion) {
    let body = serde_json::to_value(FeatureVector::random()).unwrap();
    c.bench_function("validate a request body", |b| {
        b.iter(|| FeatureVector::try_from(&body))
    });
}

fn predicting_with_linear_model(c: &mut criterion::Criterion) {
    let predictor = Predictor::from(
        Artifact::new(
            Regressor::Linear {
                coefficients: vec![1.0; Field::N],
                intercept: 0.0,
            },
            Scaler::Standard {
                mean: vec![0.0; Field::N],
                scale: vec![1.0; Field::N],
            },
            columns(),
            metadata(),
        )
        .unwrap(),
    );
    let features = FeatureVector::random();
    c.bench_function("predict with a linear model", |b| {
        b.iter(|| predictor.predict(&features))
    });
}

fn predicting_with_forest_model(c: &mut criterion::Criterion) {
    // depth-1 stumps on each column in turn
    let trees = (0..100)
        .map(|i| {
            Tree::new(
                vec![1, LEAF, LEAF],
                vec![2, LEAF, LEAF],
                vec![(i % Field::N) as i64, LEAF, LEAF],
                vec![0.0, 0.0, 0.0],
                vec![0.0, i as f64, -(i as f64)],
            )
        })
        .collect();
    let predictor = Predictor::from(
        Artifact::new(
            Regressor::Forest { trees },
            Scaler::Identity,
            columns(),
            metadata(),
        )
        .unwrap(),
    );
    let features = FeatureVector::random();
    c.bench_function("predict with a 100-tree forest", |b| {
        b.iter(|| predictor.predict(&features))
    });
}

use pricer::Arbitrary;
use pricer::artifact::*;
use pricer::features::*;
use pricer::service::*;
