use crate::core_types::{check_unique_ids, Item};
use crate::error::{BfResult, BoardForgeError};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    count: u32,
    difficulty: u8,
}

#[derive(Debug, Deserialize)]
struct JsonRow {
    id: Option<u32>,
    #[serde(default)]
    name: String,
    count: u32,
    difficulty: u8,
}

/// Loads an item list, picking the format from the file extension
/// (`.json` for JSON, anything else is read as CSV).
pub fn load_items<P: AsRef<Path>>(path: P) -> BfResult<Vec<Item>> {
    let path = path.as_ref();
    info!("📂 Loading Items: {}", path.display());

    let file = File::open(path).map_err(|e| {
        BoardForgeError::Validation(format!(
            "Could not open item list at '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let items = if is_json {
        items_from_json_reader(file)?
    } else {
        items_from_csv_reader(file)?
    };

    debug!("   -> Loaded {} items", items.len());
    Ok(items)
}

/// Reads `name,count,difficulty` rows (with header). Ids follow row order.
pub fn items_from_csv_reader<R: Read>(reader: R) -> BfResult<Vec<Item>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for (idx, result) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        items.push(Item::new(idx as u32, row.name, row.count, row.difficulty));
    }
    Ok(items)
}

/// Reads a JSON array of items. Missing ids are filled in by position;
/// the resulting ids must be unique.
pub fn items_from_json_reader<R: Read>(reader: R) -> BfResult<Vec<Item>> {
    let rows: Vec<JsonRow> = serde_json::from_reader(reader)?;
    let items: Vec<Item> = rows
        .into_iter()
        .enumerate()
        .map(|(idx, r)| Item::new(r.id.unwrap_or(idx as u32), r.name, r.count, r.difficulty))
        .collect();
    check_unique_ids(&items)?;
    Ok(items)
}
