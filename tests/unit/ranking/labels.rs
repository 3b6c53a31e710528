//! Unit tests for trend labels

use momentum_ranker::models::{Returns, TrendLabel};
use momentum_ranker::ranking::TrendLabelClassifier;
use proptest::prelude::*;

fn classify(r1: f64, r3: f64, r12: f64) -> Option<TrendLabel> {
    TrendLabelClassifier::classify(Some(r1), Some(r3), Some(r12))
}

#[test]
fn test_each_label() {
    assert_eq!(classify(2.0, 8.0, 20.0), Some(TrendLabel::Leader));
    assert_eq!(classify(-3.0, 1.0, 12.0), Some(TrendLabel::Fading));
    assert_eq!(classify(4.0, 5.0, 0.0), Some(TrendLabel::Emerging));
    assert_eq!(classify(-2.0, -4.0, -6.0), Some(TrendLabel::Laggard));
    assert_eq!(classify(3.0, 0.0, -15.0), Some(TrendLabel::Recovering));
}

#[test]
fn test_thresholds_are_strict() {
    assert_eq!(classify(1.0, 8.0, 20.0), None);
    assert_eq!(classify(2.0, 5.0, 20.0), None);
    assert_eq!(classify(2.0, 8.0, 15.0), None);
}

#[test]
fn test_no_rule_matches() {
    assert_eq!(classify(0.0, 0.0, 0.0), None);
}

#[test]
fn test_missing_return_has_no_label() {
    assert_eq!(TrendLabelClassifier::classify(None, Some(8.0), Some(20.0)), None);
    assert_eq!(TrendLabelClassifier::classify(Some(2.0), Some(8.0), None), None);

    // 6M is not an input
    let returns = Returns {
        one_month: Some(2.0),
        three_months: Some(8.0),
        six_months: None,
        twelve_months: Some(20.0),
    };
    assert_eq!(
        TrendLabelClassifier::classify_returns(&returns),
        Some(TrendLabel::Leader)
    );
}

#[test]
fn test_overlap_resolved_by_table_order() {
    assert_eq!(
        TrendLabelClassifier::matching_labels(4.0, 5.0, -20.0),
        vec![TrendLabel::Emerging, TrendLabel::Recovering]
    );
    assert_eq!(classify(4.0, 5.0, -20.0), Some(TrendLabel::Emerging));
}

#[test]
fn test_label_display() {
    assert_eq!(TrendLabel::Leader.to_string(), TrendLabel::Leader.as_str());
}

proptest! {
    #[test]
    fn prop_classify_is_first_matching_label(
        r1 in -30.0f64..30.0,
        r3 in -40.0f64..40.0,
        r12 in -80.0f64..80.0,
    ) {
        let matching = TrendLabelClassifier::matching_labels(r1, r3, r12);
        prop_assert_eq!(classify(r1, r3, r12), matching.first().copied());
    }

    #[test]
    fn prop_only_emerging_and_recovering_overlap(
        r1 in -30.0f64..30.0,
        r3 in -40.0f64..40.0,
        r12 in -80.0f64..80.0,
    ) {
        let matching = TrendLabelClassifier::matching_labels(r1, r3, r12);
        if matching.len() > 1 {
            prop_assert_eq!(matching, vec![TrendLabel::Emerging, TrendLabel::Recovering]);
        }
    }
}
