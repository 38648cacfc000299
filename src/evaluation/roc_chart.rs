use std::fmt::Write as _;
use std::path::Path;

use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{EvalError, Result};
use crate::evaluation::metrics::{roc_auc_score, roc_curve, RocCurve};
use crate::models::ClassifierModel;

/// Pevná cesta výstupného grafu. Adresár musí existovať.
pub const ROC_CHART_PATH: &str = "outgoing/roc_auc_curve.svg";

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const X_MAX: f64 = 1.0;
const Y_MAX: f64 = 1.05;

const LINE_COLORS: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];

/// Jeden model v porovnávacom grafe. Poradie položiek určuje
/// poradie kriviek aj legendy.
pub struct ModelEntry<'a> {
    pub label: String,
    pub model: &'a dyn ClassifierModel,
}

impl<'a> ModelEntry<'a> {
    pub fn new(label: impl Into<String>, model: &'a dyn ClassifierModel) -> Self {
        Self {
            label: label.into(),
            model,
        }
    }
}

/// Vykreslí kombinovaný ROC graf všetkých modelov na pevnú cestu
/// [`ROC_CHART_PATH`].
pub fn plot_roc_comparison(
    entries: &[ModelEntry<'_>],
    x_test: &DenseMatrix<f64>,
    y_test: &[f64],
) -> Result<()> {
    plot_roc_comparison_to(entries, x_test, y_test, Path::new(ROC_CHART_PATH))
}

/// Ako [`plot_roc_comparison`], ale s explicitnou cestou výstupu.
///
/// Graf sa zapisuje jediným zápisom až po spracovaní všetkých
/// položiek. Keď ktorákoľvek zlyhá, súbor sa nevytvorí ani neprepíše.
pub fn plot_roc_comparison_to(
    entries: &[ModelEntry<'_>],
    x_test: &DenseMatrix<f64>,
    y_test: &[f64],
    path: &Path,
) -> Result<()> {
    let mut curves: Vec<(&str, f64, RocCurve)> = Vec::with_capacity(entries.len());
    for entry in entries {
        let y_pred = entry.model.predict(x_test)?;
        let proba = entry.model.predict_proba(x_test)?;
        let scores: Vec<f64> = proba.iter().map(|p| p[1]).collect();
        let curve = roc_curve(y_test, &scores)?;
        // AUC v legende sa počíta z tvrdých labelov, rovnako ako v reporte
        let auc = roc_auc_score(y_test, &y_pred)?;
        curves.push((entry.label.as_str(), auc, curve));
    }

    let svg = render_chart(&curves);
    std::fs::write(path, svg).map_err(|e| EvalError::Io {
        context: format!("failed to write ROC chart to {}", path.display()),
        source: e,
    })?;
    log::info!("ROC AUC curve plot saved to {}", path.display());
    Ok(())
}

fn map_x(v: f64) -> f64 {
    MARGIN_LEFT + v / X_MAX * (CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT)
}

fn map_y(v: f64) -> f64 {
    MARGIN_TOP + (Y_MAX - v) / Y_MAX * (CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Postaví SVG dokument. Krivky modelov a diagonála sú jediné
/// `<polyline>` elementy, takže graf s N modelmi ich má presne N+1.
fn render_chart(curves: &[(&str, f64, RocCurve)]) -> String {
    let plot_w = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CHART_WIDTH}\" height=\"{CHART_HEIGHT}\" viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\">"
    )
    .expect("write to String is infallible");
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");

    // Rám grafu
    writeln!(
        svg,
        "  <rect x=\"{MARGIN_LEFT}\" y=\"{MARGIN_TOP}\" width=\"{plot_w}\" height=\"{plot_h}\" fill=\"none\" stroke=\"#000000\"/>"
    )
    .expect("write to String is infallible");

    // Osi s tickmi po 0.2
    for i in 0..=5 {
        let v = f64::from(i) * 0.2;
        let x = map_x(v);
        let y_base = MARGIN_TOP + plot_h;
        writeln!(
            svg,
            "  <line x1=\"{x:.1}\" y1=\"{y_base:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" stroke=\"#000000\"/>",
            y_base + 5.0
        )
        .expect("write to String is infallible");
        writeln!(
            svg,
            "  <text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"12\">{v:.1}</text>",
            y_base + 20.0
        )
        .expect("write to String is infallible");

        let y = map_y(v);
        writeln!(
            svg,
            "  <line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{MARGIN_LEFT}\" y2=\"{y:.1}\" stroke=\"#000000\"/>",
            MARGIN_LEFT - 5.0
        )
        .expect("write to String is infallible");
        writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-family=\"sans-serif\" font-size=\"12\">{v:.1}</text>",
            MARGIN_LEFT - 10.0,
            y + 4.0
        )
        .expect("write to String is infallible");
    }

    // Titulok a popisy osí
    writeln!(
        svg,
        "  <text x=\"{:.1}\" y=\"30\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"16\" font-weight=\"bold\">Receiver Operating Characteristic</text>",
        CHART_WIDTH / 2.0
    )
    .expect("write to String is infallible");
    writeln!(
        svg,
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"13\">1-Specificity(False Positive Rate)</text>",
        MARGIN_LEFT + plot_w / 2.0,
        CHART_HEIGHT - 15.0
    )
    .expect("write to String is infallible");
    writeln!(
        svg,
        "  <text x=\"20\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"13\" transform=\"rotate(-90 20 {:.1})\">Sensitivity(True Positive Rate)</text>",
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    )
    .expect("write to String is infallible");

    // Krivky modelov v poradí vstupu
    for (idx, (_, _, curve)) in curves.iter().enumerate() {
        let color = LINE_COLORS[idx % LINE_COLORS.len()];
        let mut pts = String::new();
        for point in &curve.points {
            write!(pts, "{:.2},{:.2} ", map_x(point.fpr), map_y(point.tpr))
                .expect("write to String is infallible");
        }
        writeln!(
            svg,
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"2\"/>",
            pts.trim_end()
        )
        .expect("write to String is infallible");
    }

    // Diagonálna referenčná čiara
    writeln!(
        svg,
        "  <polyline points=\"{:.2},{:.2} {:.2},{:.2}\" fill=\"none\" stroke=\"#000000\" stroke-dasharray=\"6 4\"/>",
        map_x(0.0),
        map_y(0.0),
        map_x(1.0),
        map_y(1.0)
    )
    .expect("write to String is infallible");

    // Legenda vpravo dole
    if !curves.is_empty() {
        let entry_h = 20.0;
        let box_w = 300.0;
        let box_h = 12.0 + entry_h * curves.len() as f64;
        let box_x = MARGIN_LEFT + plot_w - box_w - 10.0;
        let box_y = MARGIN_TOP + plot_h - box_h - 10.0;

        writeln!(
            svg,
            "  <rect x=\"{box_x:.1}\" y=\"{box_y:.1}\" width=\"{box_w}\" height=\"{box_h:.1}\" fill=\"#ffffff\" stroke=\"#999999\"/>"
        )
        .expect("write to String is infallible");

        for (idx, (label, auc, _)) in curves.iter().enumerate() {
            let color = LINE_COLORS[idx % LINE_COLORS.len()];
            let y = box_y + 16.0 + entry_h * idx as f64;
            writeln!(
                svg,
                "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{color}\" stroke-width=\"2\"/>",
                box_x + 8.0,
                y - 4.0,
                box_x + 32.0,
                y - 4.0
            )
            .expect("write to String is infallible");
            writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{y:.1}\" font-family=\"sans-serif\" font-size=\"12\">{} ROC (area = {:.2})</text>",
                box_x + 40.0,
                escape_xml(label),
                auc
            )
            .expect("write to String is infallible");
        }
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BaselineWrapper;

    /// Model vracajúci vopred dané labely, s istými pravdepodobnosťami.
    struct FixedModel {
        labels: Vec<f64>,
    }

    impl ClassifierModel for FixedModel {
        fn name(&self) -> &str {
            "fixed"
        }

        fn fit(&mut self, _x: &DenseMatrix<f64>, _y: &[f64]) -> Result<()> {
            Ok(())
        }

        fn predict(&self, _x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
            Ok(self.labels.clone())
        }

        fn predict_proba(&self, _x: &DenseMatrix<f64>) -> Result<Vec<[f64; 2]>> {
            Ok(self
                .labels
                .iter()
                .map(|&v| if v == 1.0 { [0.0, 1.0] } else { [1.0, 0.0] })
                .collect())
        }

        fn set_param(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(EvalError::InvalidParameter {
                model: "fixed".to_string(),
                message: format!("unknown parameter '{}'", key),
            })
        }
    }

    fn test_matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_2d_vec(&vec![vec![0.0], vec![0.2], vec![0.8], vec![1.0]]).unwrap()
    }

    fn polyline_count(svg: &str) -> usize {
        svg.matches("<polyline").count()
    }

    #[test]
    fn empty_entries_draw_only_diagonal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roc.svg");

        plot_roc_comparison_to(&[], &test_matrix(), &[0.0, 0.0, 1.0, 1.0], &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert_eq!(polyline_count(&svg), 1);
        assert!(!svg.contains("area ="));
    }

    #[test]
    fn n_entries_draw_n_plus_one_polylines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roc.svg");

        let perfect = FixedModel {
            labels: vec![0.0, 0.0, 1.0, 1.0],
        };
        let dummy = BaselineWrapper::constant(0.0);
        let entries = vec![
            ModelEntry::new("Perfect", &perfect),
            ModelEntry::new("Dummy Classifier", &dummy),
        ];

        plot_roc_comparison_to(&entries, &test_matrix(), &[0.0, 0.0, 1.0, 1.0], &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert_eq!(polyline_count(&svg), 3);
    }

    #[test]
    fn perfect_model_reports_area_one_in_legend() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roc.svg");

        let perfect = FixedModel {
            labels: vec![0.0, 0.0, 1.0, 1.0],
        };
        let entries = vec![ModelEntry::new("Perfect", &perfect)];

        plot_roc_comparison_to(&entries, &test_matrix(), &[0.0, 0.0, 1.0, 1.0], &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("Perfect ROC (area = 1.00)"));
    }

    #[test]
    fn legend_preserves_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roc.svg");

        let a = FixedModel {
            labels: vec![0.0, 0.0, 1.0, 1.0],
        };
        let b = BaselineWrapper::constant(0.0);
        let entries = vec![ModelEntry::new("Model A", &a), ModelEntry::new("Model B", &b)];

        plot_roc_comparison_to(&entries, &test_matrix(), &[0.0, 0.0, 1.0, 1.0], &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        let pos_a = svg.find("Model A ROC").unwrap();
        let pos_b = svg.find("Model B ROC").unwrap();
        assert!(pos_a < pos_b);
    }

    #[test]
    fn second_call_overwrites_without_residual_curves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roc.svg");
        let x = test_matrix();
        let y = [0.0, 0.0, 1.0, 1.0];

        let a = FixedModel {
            labels: vec![0.0, 0.0, 1.0, 1.0],
        };
        let b = BaselineWrapper::constant(0.0);
        let entries = vec![ModelEntry::new("First", &a), ModelEntry::new("Second", &b)];
        plot_roc_comparison_to(&entries, &x, &y, &path).unwrap();

        let entries = vec![ModelEntry::new("OnlyOne", &a)];
        plot_roc_comparison_to(&entries, &x, &y, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert_eq!(polyline_count(&svg), 2);
        assert!(!svg.contains("First ROC"));
        assert!(!svg.contains("Second ROC"));
    }

    #[test]
    fn model_without_proba_aborts_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roc.svg");
        let x = test_matrix();
        let y = [0.0, 0.0, 1.0, 1.0];

        let mut tree = crate::models::TreeWrapper::new();
        tree.fit(&x, &y).unwrap();
        let entries = vec![ModelEntry::new("Tree", &tree)];

        let err = plot_roc_comparison_to(&entries, &x, &y, &path);
        assert!(matches!(
            err,
            Err(EvalError::ProbabilitiesUnsupported { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn missing_output_directory_fails_with_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist").join("roc.svg");

        let err = plot_roc_comparison_to(&[], &test_matrix(), &[0.0, 1.0], &path);
        assert!(matches!(err, Err(EvalError::Io { .. })));
    }

    #[test]
    fn labels_are_xml_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roc.svg");

        let a = FixedModel {
            labels: vec![0.0, 0.0, 1.0, 1.0],
        };
        let entries = vec![ModelEntry::new("A & B <Pipe>", &a)];
        plot_roc_comparison_to(&entries, &test_matrix(), &[0.0, 0.0, 1.0, 1.0], &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("A &amp; B &lt;Pipe&gt; ROC"));
    }
}
