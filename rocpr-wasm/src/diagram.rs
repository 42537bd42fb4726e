//! Chart-ready packaging of ROC and PR curves.
//!
//! A [`Diagram`] holds one labelled series as header-plus-rows data and two
//! axes with fixed bounds and explicit tick positions, the shape line-chart
//! renderers consume directly.

use serde::{Deserialize, Serialize};

use rocpr_core::{Labeled, Result, RocprError, Scored};
use rocpr_curves::{compute_areas, CurveKind, CurvePoint};

/// Upper bound on the number of tick intervals per axis.
pub const MAX_TICK_INTERVALS: usize = 10_000;

/// Axis bounds and tick spacing shared by both diagrams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Lower bound of both axes.
    pub axis_min: f64,
    /// Upper bound of both axes.
    pub axis_max: f64,
    /// Distance between consecutive ticks.
    pub tick_step: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            axis_min: 0.0,
            axis_max: 1.0,
            tick_step: 0.1,
        }
    }
}

impl DiagramConfig {
    /// Tick positions from `axis_min` to `axis_max` inclusive.
    ///
    /// Each tick is computed from its index, so `0.3` comes out as `0.3`
    /// rather than the accumulated `0.30000000000000004`.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound or the step is not finite, the step is not
    /// positive, `axis_max <= axis_min`, the step does not divide the range
    /// into a whole number of intervals, or there would be more than
    /// [`MAX_TICK_INTERVALS`] intervals.
    pub fn ticks(&self) -> Result<Vec<f64>> {
        let (min, max, step) = (self.axis_min, self.axis_max, self.tick_step);
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(RocprError::InvalidInput(
                "diagram bounds and tick step must be finite".into(),
            ));
        }
        if step <= 0.0 {
            return Err(RocprError::InvalidInput(format!(
                "tick step must be positive, got {step}"
            )));
        }
        if max <= min {
            return Err(RocprError::InvalidInput(format!(
                "axis max {max} must exceed axis min {min}"
            )));
        }

        let ratio = (max - min) / step;
        let steps = ratio.round();
        if steps > MAX_TICK_INTERVALS as f64 {
            return Err(RocprError::InvalidInput(format!(
                "too many ticks: step {step} splits [{min}, {max}] into more than \
                 {MAX_TICK_INTERVALS} intervals"
            )));
        }
        if steps < 1.0 || (ratio - steps).abs() > 1e-9 * steps {
            return Err(RocprError::InvalidInput(format!(
                "tick step {step} does not divide [{min}, {max}] evenly"
            )));
        }
        let steps = steps as usize;
        Ok((0..=steps)
            .map(|i| min + (max - min) * i as f64 / steps as f64)
            .collect())
    }
}

/// One data row: either the `["x", label]` header or an `[x, y]` point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiagramRow {
    Header([String; 2]),
    Point([f64; 2]),
}

/// Series data: the name of the x column plus header and point rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramData {
    pub x: String,
    pub rows: Vec<DiagramRow>,
}

/// Explicit tick positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub values: Vec<f64>,
}

/// A single axis with fixed bounds and no padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub padding: f64,
    pub tick: Tick,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramAxes {
    pub x: Axis,
    pub y: Axis,
}

/// A chart of one curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub data: DiagramData,
    pub axis: DiagramAxes,
}

impl Diagram {
    /// Wrap curve points in the chart schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the config's ticks cannot be built (see
    /// [`DiagramConfig::ticks`]).
    pub fn from_points(
        kind: CurveKind,
        points: &[CurvePoint],
        config: &DiagramConfig,
    ) -> Result<Self> {
        let ticks = config.ticks()?;
        let (x_label, y_label) = axis_labels(kind);

        let mut rows = Vec::with_capacity(points.len() + 1);
        rows.push(DiagramRow::Header(["x".to_string(), kind.label().to_string()]));
        rows.extend(points.iter().map(|p| DiagramRow::Point([p.x, p.y])));

        let axis = |label: &str| Axis {
            label: label.to_string(),
            min: config.axis_min,
            max: config.axis_max,
            padding: 0.0,
            tick: Tick {
                values: ticks.clone(),
            },
        };

        Ok(Self {
            data: DiagramData {
                x: "x".to_string(),
                rows,
            },
            axis: DiagramAxes {
                x: axis(x_label),
                y: axis(y_label),
            },
        })
    }

    /// Number of point rows, excluding the header.
    pub fn len(&self) -> usize {
        self.data.rows.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn axis_labels(kind: CurveKind) -> (&'static str, &'static str) {
    match kind {
        CurveKind::Roc => ("False positive rate", "True positive rate"),
        CurveKind::PrecisionRecall => ("Recall", "Precision"),
    }
}

/// Both areas with their curves packaged as diagrams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveDiagrams {
    pub auc_roc: f64,
    pub roc: Diagram,
    pub auc_pr: f64,
    pub pr: Diagram,
}

/// Compute both curves and package each as a [`Diagram`].
///
/// # Errors
///
/// Propagates the errors of [`rocpr_curves::compute_areas`] and of
/// [`DiagramConfig::ticks`].
pub fn compute_areas_diagrams<T: Scored + Labeled>(
    examples: &[T],
    config: &DiagramConfig,
) -> Result<CurveDiagrams> {
    let areas = compute_areas(examples)?;
    let roc = Diagram::from_points(CurveKind::Roc, &areas.roc, config)?;
    let pr = Diagram::from_points(CurveKind::PrecisionRecall, &areas.pr, config)?;
    tracing::debug!(
        roc_rows = roc.len(),
        pr_rows = pr.len(),
        "packaged curves as diagrams"
    );
    Ok(CurveDiagrams {
        auc_roc: areas.auc_roc,
        roc,
        auc_pr: areas.auc_pr,
        pr,
    })
}
