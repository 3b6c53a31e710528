//! Trend labels from 1/3/12-month returns

use crate::models::indicators::Returns;
use crate::models::record::TrendLabel;

/// One row of the label table: `r12`, `r3`, `r1` predicates.
struct LabelRule {
    label: TrendLabel,
    matches: fn(f64, f64, f64) -> bool,
}

/// Evaluated top to bottom; the first match wins.
const RULES: [LabelRule; 5] = [
    LabelRule {
        label: TrendLabel::Leader,
        matches: |r1, r3, r12| r12 > 15.0 && r3 > 5.0 && r1 > 1.0,
    },
    LabelRule {
        label: TrendLabel::Fading,
        matches: |r1, r3, r12| r12 > 10.0 && r3 < 2.0 && r1 < -2.0,
    },
    LabelRule {
        label: TrendLabel::Emerging,
        matches: |r1, r3, r12| r12 < 5.0 && r3 > 4.0 && r1 > 3.0,
    },
    LabelRule {
        label: TrendLabel::Laggard,
        matches: |r1, r3, r12| r12 < -5.0 && r3 < -3.0 && r1 < -1.0,
    },
    LabelRule {
        label: TrendLabel::Recovering,
        matches: |r1, r3, r12| r12 < -10.0 && r3 > -1.0 && r1 > 2.0,
    },
];

pub struct TrendLabelClassifier;

impl TrendLabelClassifier {
    /// Label for one snapshot of returns, or `None` when any input is
    /// missing or no rule matches.
    pub fn classify(r1: Option<f64>, r3: Option<f64>, r12: Option<f64>) -> Option<TrendLabel> {
        let (r1, r3, r12) = (r1?, r3?, r12?);
        RULES
            .iter()
            .find(|rule| (rule.matches)(r1, r3, r12))
            .map(|rule| rule.label)
    }

    pub fn classify_returns(returns: &Returns) -> Option<TrendLabel> {
        Self::classify(returns.one_month, returns.three_months, returns.twelve_months)
    }

    /// Every label whose rule matches, in table order. Diagnostic use only.
    pub fn matching_labels(r1: f64, r3: f64, r12: f64) -> Vec<TrendLabel> {
        RULES
            .iter()
            .filter(|rule| (rule.matches)(r1, r3, r12))
            .map(|rule| rule.label)
            .collect()
    }
}
