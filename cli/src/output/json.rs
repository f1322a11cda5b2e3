use anyhow::Result;
use sheet_recon::{effective_to_cell_diffs, serialize_cell_diffs, EffectiveDiff};
use std::io::Write;

pub fn write_report<W: Write>(w: &mut W, diffs: &[EffectiveDiff]) -> Result<()> {
    let cells = effective_to_cell_diffs(diffs);
    writeln!(w, "{}", serialize_cell_diffs(&cells)?)?;
    Ok(())
}
