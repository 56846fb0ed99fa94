use crate::reconcile::ReconcileOutcome;
use std::io::Write;

/// Print the end-of-run summary: per-class rewrite counts (zeros included)
/// followed by the identifiers that had no ledger row.
///
/// This is program output rather than diagnostics, so it goes to stdout
/// directly instead of through tracing.
pub fn print_summary(outcome: &ReconcileOutcome) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, outcome).ok();
}

fn write_summary(out: &mut impl Write, outcome: &ReconcileOutcome) -> std::io::Result<()> {
    writeln!(out, "\n=== Rewrite Summary ===")?;
    for (label, count) in outcome.counters.iter() {
        writeln!(out, "{label}: {count} successful rewrites")?;
    }

    if outcome.not_found.is_empty() {
        writeln!(out, "\nNo missing images.")?;
    } else {
        writeln!(out, "\n=== Images not found in ledger ===")?;
        for identifier in &outcome.not_found {
            writeln!(out, "{identifier}")?;
        }
    }

    Ok(())
}
