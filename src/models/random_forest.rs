use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::ClassifierModel;
use crate::error::{EvalError, Result};

pub struct RandomForestWrapper {
    model: Option<RandomForestClassifier<f64, i64, DenseMatrix<f64>, Vec<i64>>>,
}

impl RandomForestWrapper {
    pub fn new() -> Self {
        Self { model: None }
    }
}

impl Default for RandomForestWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierModel for RandomForestWrapper {
    fn name(&self) -> &str {
        "Random Forest"
    }

    fn set_param(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(EvalError::InvalidParameter {
            model: "random_forest".to_string(),
            message: format!("unknown parameter '{}'", key),
        })
    }

    fn fit(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<()> {
        let labels: Vec<i64> = y.iter().map(|v| *v as i64).collect();
        self.model = Some(RandomForestClassifier::fit(
            x,
            &labels,
            RandomForestClassifierParameters::default(),
        )?);
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let m = self.model.as_ref().ok_or_else(|| EvalError::NotFitted {
            model: self.name().to_string(),
        })?;
        let labels = m.predict(x)?;
        Ok(labels.into_iter().map(|v| v as f64).collect())
    }

    // Smartcore les neexponuje hlasy jednotlivých stromov
    fn predict_proba(&self, _x: &DenseMatrix<f64>) -> Result<Vec<[f64; 2]>> {
        Err(EvalError::ProbabilitiesUnsupported {
            model: self.name().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predictions_are_binary() {
        let x = DenseMatrix::from_2d_vec(&vec![
            vec![0.0, 0.1],
            vec![0.2, 0.0],
            vec![0.1, 0.2],
            vec![8.0, 8.1],
            vec![8.2, 8.0],
            vec![8.1, 8.2],
        ])
        .unwrap();
        let y = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];

        let mut model = RandomForestWrapper::new();
        model.fit(&x, &y).unwrap();

        let preds = model.predict(&x).unwrap();
        assert_eq!(preds.len(), y.len());
        assert!(preds.iter().all(|p| *p == 0.0 || *p == 1.0));
    }

    #[test]
    fn unfitted_forest_fails() {
        let model = RandomForestWrapper::new();
        let x = DenseMatrix::from_2d_vec(&vec![vec![1.0]]).unwrap();
        assert!(matches!(model.predict(&x), Err(EvalError::NotFitted { .. })));
    }
}
