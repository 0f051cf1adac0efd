// =========================================================================
// FALSIFY-HNB: hybrid naive Bayes behavioral contract
//
// Each test tries to falsify one guarantee of the fitted model. Failure
// messages name the violated clause.
// =========================================================================

use super::*;

fn fit_two_classes() -> (NaiveBayesModel, Frame, Vec<String>) {
    let x = Frame::new(vec![
        (
            "measure".to_string(),
            vec![
                Value::from(1.0),
                Value::from(1.5),
                Value::from(2.0),
                Value::from(2.5),
                Value::from(3.0),
                Value::from(3.5),
                Value::from(101.0),
                Value::from(101.5),
                Value::from(102.0),
                Value::from(102.5),
                Value::from(103.0),
                Value::from(103.5),
            ],
        ),
        (
            "group".to_string(),
            vec![
                "low".into(),
                "low".into(),
                "low".into(),
                "low".into(),
                "low".into(),
                "low".into(),
                "high".into(),
                "high".into(),
                "high".into(),
                "high".into(),
                "high".into(),
                "high".into(),
            ],
        ),
    ])
    .expect("columns are aligned");

    let y: Vec<String> = ["a", "a", "a", "a", "a", "a", "b", "b", "b", "b", "b", "b"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let model = NaiveBayes::new().fit(&x, &y).expect("fit");
    (model, x, y)
}

/// FALSIFY-HNB-001: Predictions are drawn from the training label set
#[test]
fn falsify_hnb_001_predictions_in_label_set() {
    let (model, x, y) = fit_two_classes();

    let preds = model.predict(&x);
    for (i, p) in preds.iter().enumerate() {
        assert!(
            y.contains(p),
            "FALSIFIED HNB-001: prediction[{i}] = {p:?}, not a training label"
        );
    }
}

/// FALSIFY-HNB-002: Deterministic predictions
#[test]
fn falsify_hnb_002_deterministic() {
    let (model, x, _) = fit_two_classes();

    let p1 = model.predict(&x);
    let p2 = model.predict(&x);
    assert_eq!(p1, p2, "FALSIFIED HNB-002: predictions differ on same input");
}

/// FALSIFY-HNB-003: Prediction count matches input row count
#[test]
fn falsify_hnb_003_prediction_count() {
    let (model, _, _) = fit_two_classes();

    let probe = Frame::new(vec![
        (
            "measure".to_string(),
            vec![Value::from(2.0), Value::from(50.0), Value::from(102.0)],
        ),
        (
            "group".to_string(),
            vec!["low".into(), "low".into(), "high".into()],
        ),
    ])
    .expect("columns are aligned");

    let preds = model.predict(&probe);
    assert_eq!(
        preds.len(),
        3,
        "FALSIFIED HNB-003: {} predictions for 3 inputs",
        preds.len()
    );
}

/// FALSIFY-HNB-004: Well-separated classes classified correctly
#[test]
fn falsify_hnb_004_separable_data() {
    let (model, x, y) = fit_two_classes();

    let preds = model.predict(&x);
    assert_eq!(
        preds, y,
        "FALSIFIED HNB-004: cannot classify well-separated classes"
    );
}

/// FALSIFY-HNB-005: Priors sum to 1 over all classes
#[test]
fn falsify_hnb_005_priors_sum_to_one() {
    let (model, _, _) = fit_two_classes();

    let sum: f64 = model.classes().iter().map(ClassModel::prior).sum();
    assert!(
        (sum - 1.0).abs() < 1e-9,
        "FALSIFIED HNB-005: priors sum to {sum}"
    );
}

/// FALSIFY-HNB-006: Per-class categorical distributions sum to 1
#[test]
fn falsify_hnb_006_categorical_distributions_sum_to_one() {
    let (model, _, _) = fit_two_classes();

    for class in model.classes() {
        match class.feature("group") {
            Some(FeatureModel::Categorical(table)) => {
                let sum: f64 = table.values().sum();
                assert!(
                    (sum - 1.0).abs() < 1e-9,
                    "FALSIFIED HNB-006: class {:?} distribution sums to {sum}",
                    class.label()
                );
            }
            other => panic!("FALSIFIED HNB-006: expected categorical feature, got {other:?}"),
        }
    }
}

/// FALSIFY-HNB-007: Equal scores resolve to the lexicographically
/// smallest label
#[test]
fn falsify_hnb_007_tie_break_is_lexicographic() {
    // Identical feature distributions and equal priors for both classes:
    // every row's scores tie exactly.
    let x = Frame::new(vec![(
        "shape".to_string(),
        vec!["x".into(), "x".into(), "x".into(), "x".into()],
    )])
    .expect("columns are aligned");
    let y: Vec<String> = ["d", "d", "c", "c"].iter().map(ToString::to_string).collect();

    let model = NaiveBayes::new().fit(&x, &y).expect("fit");
    let preds = model.predict(&x);
    assert!(
        preds.iter().all(|p| p == "c"),
        "FALSIFIED HNB-007: tie did not resolve to smallest label: {preds:?}"
    );
}
