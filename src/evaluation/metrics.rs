use serde::Serialize;
use smartcore::metrics::mean_absolute_error;

use crate::error::{EvalError, Result};

/// Bod ROC krivky pre jeden prah.
#[derive(Debug, Clone, Serialize)]
pub struct RocPoint {
    pub threshold: f64,
    /// False positive rate: FP / (FP + TN)
    pub fpr: f64,
    /// True positive rate: TP / (TP + FN)
    pub tpr: f64,
}

/// ROC krivka s plochou pod krivkou.
#[derive(Debug, Clone, Serialize)]
pub struct RocCurve {
    /// Body od (0, 0) po (1, 1)
    pub points: Vec<RocPoint>,
    pub auc: f64,
}

fn check_lengths(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
    if y_true.is_empty() {
        return Err(EvalError::EmptyInput);
    }
    if y_true.len() != y_pred.len() {
        return Err(EvalError::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    Ok(())
}

fn check_binary(y: &[f64]) -> Result<()> {
    for &v in y {
        if v != 0.0 && v != 1.0 {
            return Err(EvalError::NonBinaryLabel { value: v });
        }
    }
    Ok(())
}

/// Podiel správne klasifikovaných vzoriek (po zaokrúhlení).
pub fn accuracy(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| (t.round() - p.round()).abs() < 0.1)
        .count();

    Ok(correct as f64 / y_true.len() as f64)
}

/// MAE nad celočíselne orezanými hodnotami.
pub fn mean_absolute_error_int(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let t: Vec<f64> = y_true.iter().map(|v| v.trunc()).collect();
    let p: Vec<f64> = y_pred.iter().map(|v| v.trunc()).collect();
    Ok(mean_absolute_error(&t, &p))
}

/// ROC krivka nad klesajúcimi prahmi skóre. Zhodné skóre padnú do
/// jednej prahovej skupiny, takže konštantné skóre dáva AUC 0.5.
pub fn roc_curve(y_true: &[f64], scores: &[f64]) -> Result<RocCurve> {
    check_lengths(y_true, scores)?;
    check_binary(y_true)?;

    let total_pos = y_true.iter().filter(|&&v| v == 1.0).count();
    let total_neg = y_true.len() - total_pos;
    if total_pos == 0 || total_neg == 0 {
        return Err(EvalError::SingleClassLabels);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let p = total_pos as f64;
    let n = total_neg as f64;

    let mut points = vec![RocPoint {
        threshold: f64::INFINITY,
        fpr: 0.0,
        tpr: 0.0,
    }];

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut i = 0;
    while i < order.len() {
        let current = scores[order[i]];
        while i < order.len() && scores[order[i]] == current {
            if y_true[order[i]] == 1.0 {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        points.push(RocPoint {
            threshold: current,
            fpr: fp as f64 / n,
            tpr: tp as f64 / p,
        });
    }

    // Lichobežníkové pravidlo
    let auc = points
        .windows(2)
        .map(|w| (w[1].fpr - w[0].fpr) * (w[1].tpr + w[0].tpr) / 2.0)
        .sum();

    Ok(RocCurve { points, auc })
}

/// Plocha pod ROC krivkou.
pub fn roc_auc_score(y_true: &[f64], scores: &[f64]) -> Result<f64> {
    Ok(roc_curve(y_true, scores)?.auc)
}
