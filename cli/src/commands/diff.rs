use crate::output::{json, text};
use crate::OutputFormat;
use anyhow::{bail, Context, Result};
use sheet_recon::{
    Dataset, ReconConfig, ReconSession, Row, SortCriterion, SortDirection, SortSpec,
};
use std::io;
use std::process::ExitCode;

pub fn run(
    left_path: &str,
    right_path: &str,
    sort_args: &[String],
    format: OutputFormat,
    locale: &str,
    type_check: bool,
    quiet: bool,
) -> Result<ExitCode> {
    let spec = parse_sort_spec(sort_args)?;
    let config = ReconConfig::builder()
        .locale(locale)
        .type_check_enabled(type_check)
        .build()
        .context("invalid configuration")?;

    let left = load_csv(left_path)
        .with_context(|| format!("failed to read left dataset: {}", left_path))?;
    let right = load_csv(right_path)
        .with_context(|| format!("failed to read right dataset: {}", right_path))?;

    let mut session = ReconSession::new(config)?;
    session.load_left(left);
    session.load_right(right);
    session.set_sort_spec(spec);

    let report = session.compare().context("comparison failed")?;
    let diffs = session.effective_diffs(&report);

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => text::write_report(&mut stdout, &report, &diffs, quiet)?,
        OutputFormat::Json => json::write_report(&mut stdout, &diffs)?,
    }

    Ok(if diffs.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn parse_sort_spec(args: &[String]) -> Result<SortSpec> {
    let mut criteria = Vec::with_capacity(args.len());
    for arg in args {
        let (column, direction) = match arg.rsplit_once(':') {
            Some((column, "asc")) => (column, SortDirection::Ascending),
            Some((column, "desc")) => (column, SortDirection::Descending),
            Some((_, other)) => {
                bail!(
                    "unknown sort direction '{}' in '{}' (expected asc or desc)",
                    other,
                    arg
                )
            }
            None => (arg.as_str(), SortDirection::Ascending),
        };
        if column.is_empty() {
            bail!("sort criterion '{}' has an empty column name", arg);
        }
        criteria.push(SortCriterion {
            column: column.to_string(),
            direction,
        });
    }
    Ok(SortSpec::new(criteria))
}

/// Reads a CSV file into a dataset: headers from the first record, every
/// cell as a string, blank cells as empty strings. Short records pad with
/// blanks; records longer than the header row are rejected so no field is
/// ever dropped without a trace.
fn load_csv(path: &str) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("cannot open {}", path))?;
    let headers: Vec<String> = reader
        .headers()
        .context("cannot read CSV headers")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut dataset = Dataset::new(headers.clone());
    for (idx, record) in reader.records().enumerate() {
        let record = record.context("malformed CSV record")?;
        if record.len() > headers.len() {
            bail!(
                "record on line {} has {} fields but the header declares {}",
                idx + 2,
                record.len(),
                headers.len()
            );
        }
        let mut row = Row::new();
        for (i, header) in headers.iter().enumerate() {
            row.set(header.clone(), record.get(i).unwrap_or(""));
        }
        dataset.push_row(row);
    }
    Ok(dataset)
}
