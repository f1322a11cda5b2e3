use anyhow::Result;
use sheet_recon::{DiffReport, EffectiveDiff};
use std::io::Write;

pub fn write_report<W: Write>(
    w: &mut W,
    report: &DiffReport,
    diffs: &[EffectiveDiff],
    quiet: bool,
) -> Result<()> {
    if diffs.is_empty() {
        writeln!(w, "No differences found.")?;
        return Ok(());
    }

    if !quiet {
        for diff in diffs {
            let record = &diff.record;
            match (&record.left, &record.right) {
                (Some(_), None) => {
                    writeln!(w, "Row {}: only in left dataset", record.index)?;
                }
                (None, Some(_)) => {
                    writeln!(w, "Row {}: only in right dataset", record.index)?;
                }
                (Some(left), Some(right)) => {
                    for column in &diff.significant_columns {
                        writeln!(
                            w,
                            "Row {}: \"{}\": \"{}\" -> \"{}\"",
                            record.index,
                            column,
                            left.value(column),
                            right.value(column)
                        )?;
                    }
                }
                (None, None) => {}
            }
        }
        writeln!(w)?;
    }

    writeln!(
        w,
        "{} of {} differing row{} significant.",
        diffs.len(),
        report.records.len(),
        if report.records.len() == 1 { "" } else { "s" }
    )?;

    Ok(())
}
