//! Report formatting and printing utilities.
//!
//! Per-target results go to stdout, one aligned line each. Failures and
//! missing defaults are repeated on stderr in cargo style. Kept separate from
//! the sync logic so langsync can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, GenerateSummary, InitSummary, SyncSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::sync::{SyncReport, SyncStatus, SyncTarget, migrate::MigrationSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Marks targets with pending or applied changes.
const CHANGE_MARK: &str = "~";

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check(summary) => {
            print_sync_to(
                summary,
                true,
                verbose,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            );
        }
        CommandSummary::Sync(summary) => {
            print_sync_to(
                summary,
                false,
                verbose,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            );
        }
        CommandSummary::Generate(summary) => {
            print_generate_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

/// Print the outcome of `check` or `sync`.
///
/// `NO_CHANGES` targets are only listed with `verbose`.
pub fn print_sync_to<W: Write, E: Write>(
    summary: &SyncSummary,
    is_check: bool,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    print_migration(&summary.migration, summary.is_apply, verbose, out);

    let listed: Vec<&(SyncTarget, SyncReport)> = summary
        .reports
        .iter()
        .filter(|(_, report)| verbose || report.status != SyncStatus::NoChanges)
        .collect();
    let width = listed
        .iter()
        .map(|(target, _)| target.resource_path.width())
        .max()
        .unwrap_or(0);

    for (target, report) in &listed {
        let padding = " ".repeat(width - target.resource_path.width());
        let _ = writeln!(
            out,
            "{} {}{}  {}",
            mark(report.status),
            target.resource_path,
            padding,
            describe(report, summary.is_apply)
        );
    }

    for (target, report) in &summary.reports {
        match report.status {
            SyncStatus::Error => {
                let _ = writeln!(
                    err,
                    "{} {}: {}",
                    "error:".bold().red(),
                    target.resource_path,
                    report.message
                );
            }
            SyncStatus::ResourceNotFound => {
                let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), report.message);
            }
            _ => {}
        }
    }

    print_sync_summary(summary, is_check, out);
}

fn mark(status: SyncStatus) -> String {
    match status {
        SyncStatus::CreatedOverride | SyncStatus::Merged => CHANGE_MARK.yellow().to_string(),
        SyncStatus::NoChanges => SUCCESS_MARK.green().to_string(),
        SyncStatus::ResourceNotFound => "!".yellow().to_string(),
        SyncStatus::Error => FAILURE_MARK.red().to_string(),
    }
}

fn describe(report: &SyncReport, is_apply: bool) -> String {
    match report.status {
        SyncStatus::CreatedOverride => {
            let verb = if is_apply { "created" } else { "would create" };
            format!("{} ({} disabled key(s))", verb, report.count)
        }
        SyncStatus::Merged => {
            let mut parts = Vec::new();
            if report.added_count > 0 {
                parts.push(format!("{} added", report.added_count));
            }
            if report.updated_count > 0 {
                parts.push(format!("{} refreshed", report.updated_count));
            }
            let verb = if is_apply { "merged" } else { "would merge" };
            format!("{} ({})", verb, parts.join(", "))
        }
        SyncStatus::NoChanges => "up to date".dimmed().to_string(),
        SyncStatus::ResourceNotFound => "default missing".yellow().to_string(),
        SyncStatus::Error => "failed".red().to_string(),
    }
}

fn print_migration<W: Write>(
    migration: &MigrationSummary,
    is_apply: bool,
    verbose: bool,
    out: &mut W,
) {
    let verb = if is_apply {
        "Moved".green().bold()
    } else {
        "Would move".yellow().bold()
    };
    for moved in &migration.moved {
        let _ = writeln!(
            out,
            "{} {} -> {}",
            verb,
            moved.from.display(),
            moved.to.display()
        );
    }
    if verbose {
        for skipped in &migration.skipped {
            let _ = writeln!(
                out,
                "{} kept {} (override already exists)",
                "note:".bold().cyan(),
                skipped.display()
            );
        }
    }
}

fn print_sync_summary<W: Write>(summary: &SyncSummary, is_check: bool, out: &mut W) {
    let changed = summary.changed_count();
    let failed = summary.count(SyncStatus::Error);
    if changed == 0 && failed == 0 {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} override file(s) up to date",
                summary.count(SyncStatus::NoChanges)
            )
            .green()
        );
        return;
    }

    if changed > 0 {
        if is_check {
            let _ = writeln!(
                out,
                "{} {} override file(s) out of date.",
                FAILURE_MARK.red(),
                changed
            );
            let _ = writeln!(
                out,
                "Run {} to update them.",
                "langsync sync --apply".cyan()
            );
        } else if summary.is_apply {
            let _ = writeln!(out, "{} {} file(s).", "Wrote".green().bold(), changed);
        } else {
            let _ = writeln!(out, "{} {} file(s).", "Would write".yellow().bold(), changed);
            let _ = writeln!(out, "Run with {} to write these files.", "--apply".cyan());
        }
    }

    if failed > 0 {
        let _ = writeln!(
            out,
            "{} {} file(s) failed",
            FAILURE_MARK.red(),
            failed
        );
    }
}

pub fn print_generate_to<W: Write>(summary: &GenerateSummary, out: &mut W) {
    for line in &summary.lines {
        let _ = writeln!(out, "{}", line);
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
