//! Text rendering of a worksheet run: banner, stage sections, and the effectiveness table.

use std::io::{self, Write};

use crate::config::Config;
use crate::types::{EvaluationReport, PlanReport, Priority, PriorityReport, WorksheetReport};

const RULE: &str = "=================================================";

const TABLE_HEADER: &str =
  "| Code | VRER (before) | Priority | Action | PostProb | PostLoss | EVRER (after) | Reduction | Effectiveness |";
const TABLE_ALIGN: &str = "|:---:|:---:|:---:|:---:|:---:|:---:|:---:|:---:|:---:|";

/// Write the full report in stage order.
pub fn write_report<W: Write>(out: &mut W, report: &WorksheetReport, config: &Config) -> io::Result<()> {
  write_banner(out, config)?;
  write_priorities(out, &report.priorities, config)?;
  write_plan(out, &report.plan, config)?;
  write_evaluation(out, &report.evaluation, config)?;
  Ok(())
}

pub fn write_banner<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
  writeln!(out, "{}", RULE)?;
  writeln!(out, "     {}", config.title)?;
  writeln!(out, "      {}", config.subtitle)?;
  writeln!(out, "{}", RULE)
}

pub fn write_priorities<W: Write>(out: &mut W, report: &PriorityReport, config: &Config) -> io::Result<()> {
  let p = config.precision;
  writeln!(out)?;
  writeln!(out, "=== RISK ANALYSIS: PRIORITIZATION ===")?;
  writeln!(out, "[I] Minimum risk magnitude (min): {:.*}", p, report.min)?;
  writeln!(out, "[I] Maximum risk magnitude (max): {:.*}", p, report.max)?;
  writeln!(out, "[I] Priority step (mpr): {:.*}", p, report.step)?;
  writeln!(
    out,
    "[I] Intervals: Low (VRER < {lo:.p$}), Medium ({lo:.p$} <= VRER < {mid:.p$}), High (VRER >= {mid:.p$})",
    lo = report.low_boundary,
    mid = report.mid_boundary,
    p = p,
  )?;
  for row in &report.rows {
    writeln!(
      out,
      "- {} ({}): VRER={:.*} -> {}",
      row.code,
      row.description,
      p,
      row.magnitude,
      tier_label(row.priority)
    )?;
  }
  Ok(())
}

pub fn write_plan<W: Write>(out: &mut W, report: &PlanReport, config: &Config) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "=== RISK PLANNING: MITIGATION ASSIGNMENT ===")?;
  for row in &report.rows {
    let priority = row.priority.map(tier_label).unwrap_or_default();
    match &row.action {
      Some(a) => writeln!(
        out,
        "[+] Risk {} ({}): Action: {} - {}",
        row.code, priority, a.code, a.description
      )?,
      None => writeln!(
        out,
        "[-] Risk {} ({}): Action: {}",
        row.code, priority, config.unassigned_placeholder
      )?,
    }
  }
  Ok(())
}

pub fn write_evaluation<W: Write>(out: &mut W, report: &EvaluationReport, config: &Config) -> io::Result<()> {
  let p = config.precision;
  writeln!(out)?;
  writeln!(out, "=== RISK MONITORING: EFFECTIVENESS ===")?;
  writeln!(out, "{}", TABLE_HEADER)?;
  writeln!(out, "{}", TABLE_ALIGN)?;
  for row in &report.rows {
    writeln!(
      out,
      "| {} | {:.p$} | {} | {} | {:.p$} | {:.p$} | {:.p$} | {:.p$} | {} |",
      row.code,
      row.magnitude,
      row.priority.map(Priority::as_str).unwrap_or(""),
      row.action_code.as_deref().unwrap_or(&config.unassigned_placeholder),
      row.post_probability,
      row.post_loss,
      row.post_magnitude,
      row.reduction,
      row.effectiveness.as_str(),
      p = p,
    )?;
  }
  Ok(())
}

/// "High (HER)" style label used in the per-event lines.
fn tier_label(priority: Priority) -> String {
  format!("{} ({})", priority.as_str(), priority.abbreviation())
}
