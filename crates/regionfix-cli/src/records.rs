//! JSON input and output for the `correct` command.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use regionfix_model::{AddressInput, CorrectedAddress};

/// Parses a JSON array of address records.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<AddressInput>> {
    serde_json::from_reader(reader).context("parse address records")
}

/// Reads records from `input`, or from stdin when `input` is None or `-`.
pub fn load_records(input: Option<&Path>) -> Result<Vec<AddressInput>> {
    match input {
        Some(path) if path != Path::new("-") => {
            let file =
                File::open(path).with_context(|| format!("open input {}", path.display()))?;
            read_records(BufReader::new(file))
                .with_context(|| format!("read input {}", path.display()))
        }
        _ => read_records(io::stdin().lock()),
    }
}

/// Writes results as a pretty-printed JSON array followed by a newline.
pub fn write_records<W: Write>(mut writer: W, results: &[CorrectedAddress]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, results).context("serialize results")?;
    writeln!(writer).context("write results")?;
    writer.flush().context("flush results")
}

/// Writes results to `output`, or to stdout when `output` is None.
pub fn save_records(output: Option<&Path>, results: &[CorrectedAddress]) -> Result<()> {
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create output {}", path.display()))?;
            write_records(BufWriter::new(file), results)
                .with_context(|| format!("write output {}", path.display()))
        }
        None => write_records(io::stdout().lock(), results),
    }
}
