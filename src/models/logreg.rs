use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::{LogisticRegression, LogisticRegressionParameters};

use super::ClassifierModel;
use crate::error::{EvalError, Result};

pub struct LogRegWrapper {
    model: Option<LogisticRegression<f64, i64, DenseMatrix<f64>, Vec<i64>>>,
    alpha: f64,
}

impl LogRegWrapper {
    pub fn new() -> Self {
        Self { model: None, alpha: 0.0 }
    }

    fn fitted(&self) -> Result<&LogisticRegression<f64, i64, DenseMatrix<f64>, Vec<i64>>> {
        self.model.as_ref().ok_or_else(|| EvalError::NotFitted {
            model: self.name().to_string(),
        })
    }
}

impl Default for LogRegWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierModel for LogRegWrapper {
    fn name(&self) -> &str {
        "Logistická Regresia (Klasifikácia)"
    }

    fn supported_params(&self) -> Vec<&str> {
        vec!["alpha"]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "alpha" => {
                self.alpha = value.parse().map_err(|_| EvalError::InvalidParameter {
                    model: "logreg".to_string(),
                    message: format!("alpha must be a number, got '{}'", value),
                })?;
                Ok(())
            }
            _ => Err(EvalError::InvalidParameter {
                model: "logreg".to_string(),
                message: format!("unknown parameter '{}'", key),
            }),
        }
    }

    fn fit(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<()> {
        // Smartcore očakáva celočíselné labely
        let labels: Vec<i64> = y.iter().map(|v| *v as i64).collect();

        let mut params = LogisticRegressionParameters::default();
        params.alpha = self.alpha;

        self.model = Some(LogisticRegression::fit(x, &labels, params)?);
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let m = self.fitted()?;
        let labels = m.predict(x)?;
        Ok(labels.into_iter().map(|v| v as f64).collect())
    }

    /// Sigmoid nad natrénovanou rozhodovacou funkciou; iba binárne modely.
    fn predict_proba(&self, x: &DenseMatrix<f64>) -> Result<Vec<[f64; 2]>> {
        let m = self.fitted()?;
        let coef = m.coefficients();
        let (rows, cols) = coef.shape();
        let (n_samples, n_features) = x.shape();

        // Binárny model drží jediný vektor koeficientov, v riadku alebo stĺpci
        let weights: Vec<f64> = if rows == 1 && cols == n_features {
            (0..cols).map(|j| *coef.get((0, j))).collect()
        } else if cols == 1 && rows == n_features {
            (0..rows).map(|i| *coef.get((i, 0))).collect()
        } else {
            return Err(EvalError::ProbabilitiesUnsupported {
                model: self.name().to_string(),
            });
        };
        let b = *m.intercept().get((0, 0));

        let mut proba = Vec::with_capacity(n_samples);
        for i in 0..n_samples {
            let mut z = b;
            for (j, w) in weights.iter().enumerate() {
                z += w * *x.get((i, j));
            }
            let p1 = 1.0 / (1.0 + (-z).exp());
            proba.push([1.0 - p1, p1]);
        }
        Ok(proba)
    }
}
