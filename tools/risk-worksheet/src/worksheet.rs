//! Pipeline driver: owns the collections and runs prioritize -> plan -> evaluate.

use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::WorksheetError;
use crate::evaluate;
use crate::plan;
use crate::prioritize;
use crate::types::*;

/// One worksheet over a catalog. Collections are built on [`Worksheet::run`].
pub struct Worksheet {
  config: Config,
  catalog: Catalog,
  actions: Vec<MitigationAction>,
  events: Vec<RiskEvent>,
}

impl Worksheet {
  pub fn new(catalog: Catalog, config: Config) -> Self {
    Self {
      config,
      catalog,
      actions: Vec::new(),
      events: Vec::new(),
    }
  }

  /// Embedded catalog with default presentation settings.
  pub fn embedded() -> Result<Self, WorksheetError> {
    Ok(Self::new(Catalog::embedded()?, Config::default()))
  }

  /// Run every stage in order. Any lookup miss aborts the whole run, so a
  /// returned report never has rows missing.
  pub fn run(&mut self) -> Result<WorksheetReport, WorksheetError> {
    self.catalog.validate()?;
    let (actions, events) = self.catalog.to_collections();
    self.actions = actions;
    self.events = events;
    info!(
      risks = self.events.len(),
      actions = self.actions.len(),
      "worksheet loaded"
    );

    let priorities = prioritize::prioritize(&mut self.events)?;
    let plan = plan::assign_actions(&mut self.events, &self.actions, &self.catalog.assignments)?;
    evaluate::apply_reassessments(&mut self.events, &self.catalog.reassessments)?;
    let evaluation = evaluate::evaluate(&mut self.events);

    Ok(WorksheetReport {
      priorities,
      plan,
      evaluation,
    })
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn actions(&self) -> &[MitigationAction] {
    &self.actions
  }

  pub fn events(&self) -> &[RiskEvent] {
    &self.events
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_run_fills_every_stage() {
    let mut ws = Worksheet::embedded().unwrap();
    let report = ws.run().unwrap();
    assert_eq!(report.priorities.rows.len(), 7);
    assert_eq!(report.plan.rows.len(), 7);
    assert_eq!(report.evaluation.rows.len(), 7);
    assert!(ws
      .events()
      .iter()
      .all(|e| e.priority.is_some() && e.assigned_action.is_some()));
    assert_eq!(ws.actions().len(), 6);
  }

  #[test]
  fn rerun_starts_from_fresh_collections() {
    let mut ws = Worksheet::embedded().unwrap();
    let first = ws.run().unwrap();
    let second = ws.run().unwrap();
    let a: Vec<_> = first.evaluation.rows.iter().map(|r| (r.code.clone(), r.reduction)).collect();
    let b: Vec<_> = second.evaluation.rows.iter().map(|r| (r.code.clone(), r.reduction)).collect();
    assert_eq!(a, b);
  }

  #[test]
  fn bad_assignment_aborts_run() {
    let mut catalog = Catalog::embedded().unwrap();
    catalog.assignments.push(Assignment {
      risk: "t8_R".into(),
      action: "ev42".into(),
    });
    let mut ws = Worksheet::new(catalog, Config::default());
    let err = ws.run().unwrap_err();
    assert!(err.is_data_error());
    assert!(err.to_string().contains("ev42"));
  }
}
