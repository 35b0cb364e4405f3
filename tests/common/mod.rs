use std::io::Error;
use tempfile::NamedTempFile;

pub const HEADER: [&str; 6] = ["method", "amount", "card_number", "expiry_date", "cvv", "email"];

/// Writes the given rows under the standard header into a temporary CSV file.
pub fn requests_csv(rows: &[[&str; 6]]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file.reopen()?);

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(file)
}
