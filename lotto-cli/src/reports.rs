use anyhow::Result;
use colored::Colorize;
use lotto_game::{LottoConfig, NumberSet, SimulationSummary};
use serde::Serialize;
use std::io::Write;

/// Everything worth reporting about a finished run.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub seed: u64,
    pub player: &'a NumberSet,
    pub config: &'a LottoConfig,
    /// Calls made against the random stream.
    pub random_calls: u64,
    #[serde(flatten)]
    pub summary: &'a SimulationSummary,
}

pub fn write_console_report(out: &mut dyn Write, report: &RunReport<'_>) -> Result<()> {
    let summary = report.summary;
    writeln!(out)?;
    writeln!(out, "{}", "📊 Lotto Simulation Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "===========================".cyan())?;
    writeln!(out, "Seed: {}", report.seed)?;
    writeln!(out, "Numbers: {}", report.player)?;
    writeln!(
        out,
        "Game: {} of {}",
        report.config.draw_size, report.config.pool_size
    )?;
    writeln!(out, "Attempts: {}", summary.attempts.to_string().yellow())?;
    writeln!(out, "Total draws: {}", summary.total_rounds)?;
    writeln!(out, "Random calls: {}", report.random_calls)?;
    writeln!(
        out,
        "Winning attempt: {} draws, {} years",
        summary.final_rounds.to_string().green(),
        summary.final_years.to_string().green()
    )?;

    if !summary.milestones.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "🎯 Milestones".bright_yellow().bold())?;
        for milestone in &summary.milestones {
            writeln!(
                out,
                "   {} right after {} draws ({} years)",
                milestone.matches, milestone.round, milestone.years
            )?;
        }
    }
    Ok(())
}

pub fn write_json_report(out: &mut dyn Write, report: &RunReport<'_>) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}
