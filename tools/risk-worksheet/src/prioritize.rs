//! Priority tiers: split the observed magnitude range into three equal-width bands.

use tracing::{debug, info};

use crate::error::WorksheetError;
use crate::types::{Priority, PriorityReport, PriorityRow, RiskEvent};

const TIERS: f64 = 3.0;

/// Event indices ordered by descending magnitude; ties keep catalog order.
pub fn ranked_by_magnitude(events: &[RiskEvent]) -> Vec<usize> {
  let mut order: Vec<usize> = (0..events.len()).collect();
  order.sort_by(|&a, &b| events[b].magnitude().total_cmp(&events[a].magnitude()));
  order
}

/// Label for one magnitude given the two tier boundaries.
///
/// Comparisons are `>=`, so when every magnitude is equal (zero-width bands)
/// everything lands in `High`.
pub fn classify(magnitude: f64, low_boundary: f64, mid_boundary: f64) -> Priority {
  if magnitude >= mid_boundary {
    Priority::High
  } else if magnitude >= low_boundary {
    Priority::Medium
  } else {
    Priority::Low
  }
}

/// Set `priority` on every event and return the boundaries plus the ranked rows.
pub fn prioritize(events: &mut [RiskEvent]) -> Result<PriorityReport, WorksheetError> {
  if events.is_empty() {
    return Err(WorksheetError::NoRiskEvents);
  }

  let min = events
    .iter()
    .map(RiskEvent::magnitude)
    .fold(f64::INFINITY, f64::min);
  let max = events
    .iter()
    .map(RiskEvent::magnitude)
    .fold(f64::NEG_INFINITY, f64::max);
  let step = (max - min) / TIERS;
  let low_boundary = min + step;
  let mid_boundary = min + 2.0 * step;

  info!(min, max, step, low_boundary, mid_boundary, "priority boundaries");

  for e in events.iter_mut() {
    let p = classify(e.magnitude(), low_boundary, mid_boundary);
    debug!(code = %e.code, magnitude = e.magnitude(), priority = p.as_str(), "prioritized");
    e.priority = Some(p);
  }

  let rows = ranked_by_magnitude(events)
    .into_iter()
    .filter_map(|i| {
      let e = &events[i];
      e.priority.map(|priority| PriorityRow {
        code: e.code.clone(),
        description: e.description.clone(),
        magnitude: e.magnitude(),
        priority,
      })
    })
    .collect();

  Ok(PriorityReport {
    min,
    max,
    step,
    low_boundary,
    mid_boundary,
    rows,
  })
}
