//! Effectiveness evaluation: apply re-assessed estimates, recompute EVRER, rank by reduction.

use tracing::{debug, info};

use crate::catalog::find_event_mut;
use crate::error::WorksheetError;
use crate::types::{EvaluationReport, EvaluationRow, Reassessment, RiskEvent};

/// Overwrite post-mitigation probability/loss for every listed risk.
pub fn apply_reassessments(events: &mut [RiskEvent], reassessments: &[Reassessment]) -> Result<(), WorksheetError> {
  for r in reassessments {
    let event = find_event_mut(events, &r.risk)?;
    debug!(
      code = %event.code,
      probability = r.probability,
      loss = r.loss,
      "reassessed"
    );
    event.post_probability = r.probability;
    event.post_loss = r.loss;
  }
  Ok(())
}

/// Evaluate every event, then rank by descending reduction (ties keep catalog order).
pub fn evaluate(events: &mut [RiskEvent]) -> EvaluationReport {
  for e in events.iter_mut() {
    e.evaluate_after_mitigation();
  }

  let mut rows: Vec<EvaluationRow> = events
    .iter()
    .map(|e| EvaluationRow {
      code: e.code.clone(),
      magnitude: e.magnitude(),
      priority: e.priority,
      action_code: e.assigned_action.as_ref().map(|a| a.code.clone()),
      post_probability: e.post_probability,
      post_loss: e.post_loss,
      post_magnitude: e.post_magnitude(),
      reduction: e.reduction(),
      effectiveness: e.effectiveness(),
    })
    .collect();
  rows.sort_by(|a, b| b.reduction.total_cmp(&a.reduction));

  let before: f64 = rows.iter().map(|r| r.magnitude).sum();
  let after: f64 = rows.iter().map(|r| r.post_magnitude).sum();
  info!(total_before = before, total_after = after, "effectiveness evaluated");

  EvaluationReport { rows }
}
