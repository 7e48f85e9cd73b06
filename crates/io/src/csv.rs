// CSV import/export for single sheets

use std::io::Read;
use std::path::Path;

use viralscout_engine::sheet::Sheet;

/// Import a CSV file as a sheet named `name`, sniffing the delimiter.
pub fn import(path: &Path, name: &str) -> Result<Sheet, String> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    import_from_string(&content, name, delimiter)
}

/// Import with a caller-chosen delimiter (settings override).
pub fn import_with_delimiter(path: &Path, name: &str, delimiter: u8) -> Result<Sheet, String> {
    let content = read_file_as_utf8(path)?;
    import_from_string(&content, name, delimiter)
}

/// Pick the most likely delimiter by field-count consistency.
///
/// For each candidate, the first sample line must split into more than one
/// field, and the winner is the candidate whose field count stays the most
/// consistent across the sample. Quoted fields are rare enough in scan
/// exports that a plain split is a good enough census for sniffing; the
/// real parse below handles quoting properly.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample: Vec<&str> = content.lines().take(10).collect();
    if sample.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;
    for &delim in candidates {
        let counts: Vec<usize> = sample
            .iter()
            .map(|line| line.split(delim as char).count())
            .collect();
        if counts[0] <= 1 {
            continue;
        }
        let consistent = counts.iter().filter(|&&c| c == counts[0]).count() as u64;
        let score = consistent * counts[0] as u64;
        if score > best_score {
            best_score = score;
            best = delim;
        }
    }
    best
}

/// Read a file as UTF-8, falling back to Windows-1252 (Excel exports).
fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

fn import_from_string(content: &str, name: &str, delimiter: u8) -> Result<Sheet, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut sheet = Sheet::new(name);
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| e.to_string())?;
        for (col, field) in record.iter().enumerate() {
            if !field.is_empty() {
                sheet.set_value(row, col, field);
            }
        }
    }
    Ok(sheet)
}

/// Export a sheet as comma-separated CSV. Rows are written up to their last
/// non-empty column, and fully empty rows are dropped, so interior gaps
/// compact away and later rows shift up in the file.
pub fn export(sheet: &Sheet, path: &Path) -> Result<(), String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| e.to_string())?;

    let rows = sheet.last_row();
    let cols = sheet.last_col();
    for row in 0..rows {
        let mut record: Vec<String> = Vec::with_capacity(cols);
        let mut width = 0;
        for col in 0..cols {
            let value = sheet.get_display(row, col);
            if !value.is_empty() {
                width = col + 1;
            }
            record.push(value);
        }
        // Only write rows that have data
        if width > 0 {
            record.truncate(width);
            writer.write_record(&record).map_err(|e| e.to_string())?;
        }
    }

    writer.flush().map_err(|e| e.to_string())?;
    Ok(())
}
