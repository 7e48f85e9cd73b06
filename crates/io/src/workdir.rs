// Workbook directories: one CSV per sheet, file stem = sheet name

use std::path::{Path, PathBuf};

use viralscout_engine::workbook::Workbook;

use crate::csv;

/// Load every `*.csv` in `dir` (lexicographic order) into a workbook.
/// Sheet names come from file stems, so `Blog.csv` becomes sheet "Blog".
pub fn load_workbook(dir: &Path, delimiter: Option<u8>) -> Result<Workbook, String> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| format!("{}: {}", dir.display(), e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    let mut workbook = Workbook::new();
    for path in paths {
        let name = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        let sheet = match delimiter {
            Some(d) => csv::import_with_delimiter(&path, &name, d)?,
            None => csv::import(&path, &name)?,
        };
        if workbook.add_sheet(sheet).is_none() {
            return Err(format!("duplicate sheet name '{}' in {}", name, dir.display()));
        }
    }
    Ok(workbook)
}

/// Write one sheet of a workbook back to `<dir>/<name>.csv`. With `backup`,
/// the existing file is first copied to `<name>.csv.bak`.
pub fn save_sheet(workbook: &Workbook, name: &str, dir: &Path, backup: bool) -> Result<(), String> {
    let sheet = workbook
        .sheet_by_name(name)
        .ok_or_else(|| format!("no sheet named '{}'", name))?;

    let path = dir.join(format!("{}.csv", name));
    if backup && path.exists() {
        let bak = dir.join(format!("{}.csv.bak", name));
        std::fs::copy(&path, &bak).map_err(|e| format!("{}: {}", bak.display(), e))?;
    }
    csv::export(sheet, &path)
}
