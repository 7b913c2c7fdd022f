//! Mitigation planning: attach one action to each risk event from the fixed table.

use tracing::{debug, info};

use crate::catalog::{find_action, find_event_mut};
use crate::error::WorksheetError;
use crate::prioritize::ranked_by_magnitude;
use crate::types::{Assignment, MitigationAction, PlanReport, PlanRow, RiskEvent};

/// Resolve every `(risk, action)` pair and attach the action to the event.
///
/// Fails on the first code missing from either collection; a miss is a
/// catalog defect, so nothing is skipped.
pub fn assign_actions(
  events: &mut [RiskEvent],
  actions: &[MitigationAction],
  assignments: &[Assignment],
) -> Result<PlanReport, WorksheetError> {
  for a in assignments {
    let action = find_action(actions, &a.action)?;
    let event = find_event_mut(events, &a.risk)?;
    debug!(risk = %event.code, action = %action.code, "assigned");
    event.assigned_action = Some(action.clone());
  }

  let rows: Vec<PlanRow> = ranked_by_magnitude(events)
    .into_iter()
    .map(|i| {
      let e = &events[i];
      PlanRow {
        code: e.code.clone(),
        priority: e.priority,
        action: e.assigned_action.clone(),
      }
    })
    .collect();

  let unassigned = rows.iter().filter(|r| r.action.is_none()).count();
  info!(assigned = assignments.len(), unassigned, "mitigation plan built");

  Ok(PlanReport { rows })
}
