use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::{
    DecisionTreeClassifier, DecisionTreeClassifierParameters,
};

use super::ClassifierModel;
use crate::error::{EvalError, Result};

pub struct TreeWrapper {
    model: Option<DecisionTreeClassifier<f64, i64, DenseMatrix<f64>, Vec<i64>>>,
    max_depth: u16,
    min_samples_split: usize,
}

impl TreeWrapper {
    pub fn new() -> Self {
        Self {
            // Default
            model: None,
            max_depth: 10,
            min_samples_split: 2,
        }
    }
}

impl Default for TreeWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierModel for TreeWrapper {
    fn name(&self) -> &str {
        "Decision Tree"
    }

    fn supported_params(&self) -> Vec<&str> {
        vec!["max_depth", "min_samples_split"]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "max_depth" => {
                self.max_depth = value.parse().map_err(|_| EvalError::InvalidParameter {
                    model: "tree".to_string(),
                    message: format!("invalid depth '{}'", value),
                })?;
                Ok(())
            }
            "min_samples_split" => {
                self.min_samples_split =
                    value.parse().map_err(|_| EvalError::InvalidParameter {
                        model: "tree".to_string(),
                        message: format!("invalid split value '{}'", value),
                    })?;
                Ok(())
            }
            _ => Err(EvalError::InvalidParameter {
                model: "tree".to_string(),
                message: format!("unknown parameter '{}'", key),
            }),
        }
    }

    fn fit(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<()> {
        let labels: Vec<i64> = y.iter().map(|v| *v as i64).collect();

        let mut params = DecisionTreeClassifierParameters::default();
        params.max_depth = Some(self.max_depth);
        params.min_samples_split = self.min_samples_split;

        self.model = Some(DecisionTreeClassifier::fit(x, &labels, params)?);
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let m = self.model.as_ref().ok_or_else(|| EvalError::NotFitted {
            model: self.name().to_string(),
        })?;
        let labels = m.predict(x)?;
        Ok(labels.into_iter().map(|v| v as f64).collect())
    }

    // Smartcore stromy neexponujú pravdepodobnosti tried
    fn predict_proba(&self, _x: &DenseMatrix<f64>) -> Result<Vec<[f64; 2]>> {
        Err(EvalError::ProbabilitiesUnsupported {
            model: self.name().to_string(),
        })
    }
}
