use super::{BaselineWrapper, ClassifierModel, LogRegWrapper, RandomForestWrapper, TreeWrapper};
use crate::error::{EvalError, Result};

/// Factory pre vytváranie modelov podľa názvu
pub struct ModelFactory;

impl ModelFactory {
    /// Vytvorí model na základe názvu
    pub fn create(model_type: &str) -> Result<Box<dyn ClassifierModel>> {
        match model_type {
            "logreg" | "logistic_regression" => Ok(Box::new(LogRegWrapper::new())),
            "tree" | "decision_tree" => Ok(Box::new(TreeWrapper::new())),
            "random_forest" | "forest" => Ok(Box::new(RandomForestWrapper::new())),
            "baseline" | "dummy" => Ok(Box::new(BaselineWrapper::new())),
            _ => Err(EvalError::UnknownModel {
                name: model_type.to_string(),
            }),
        }
    }

    /// Vráti zoznam všetkých dostupných modelov
    pub fn available_models() -> Vec<&'static str> {
        vec!["logreg", "tree", "random_forest", "baseline"]
    }

    /// Vráti popis modelu
    pub fn get_model_description(model_type: &str) -> Option<&'static str> {
        match model_type {
            "logreg" => Some("Logistická Regresia - binárna klasifikácia"),
            "tree" => Some("Rozhodovací strom - klasifikácia"),
            "random_forest" => Some("Random Forest - klasifikácia"),
            "baseline" => Some("Dummy klasifikátor - referenčná hladina"),
            _ => None,
        }
    }
}
