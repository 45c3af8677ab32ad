//! Cheatsheet lookup and decoding with schema validation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::CmanError;
use crate::sheet::HeadingSet;

const SHEET_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/cheatsheet/v1.schema.json"
));

/// Path of the cheatsheet called `name` under `root`.
pub fn sheet_path(root: &Path, name: &str) -> PathBuf {
    root.join(format!("{name}.json"))
}

/// Load and validate the cheatsheet called `name` from `root`.
#[instrument(skip(root), fields(dir = %root.display()))]
pub fn load_sheet(root: &Path, name: &str) -> Result<HeadingSet, CmanError> {
    let path = sheet_path(root, name);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(CmanError::NotFound {
                name: name.to_string(),
                path,
            });
        }
        Err(source) => return Err(CmanError::Read { path, source }),
    };
    let sheet = decode_sheet(&path, &contents)?;
    debug!(path = %path.display(), headings = sheet.headings.len(), "loaded cheatsheet");
    Ok(sheet)
}

/// Parse `contents`, check it against the cheatsheet schema and decode it.
///
/// `path` is only used in error messages.
pub fn decode_sheet(path: &Path, contents: &str) -> Result<HeadingSet, CmanError> {
    let decode_error = |message: String| CmanError::Decode {
        path: path.to_path_buf(),
        message,
    };
    let value: Value =
        serde_json::from_str(contents).map_err(|err| decode_error(err.to_string()))?;
    validate_schema(&value).map_err(decode_error)?;
    serde_json::from_value(value).map_err(|err| decode_error(err.to_string()))
}

/// Validate against the bundled schema, collecting every violation.
fn validate_schema(sheet: &Value) -> Result<(), String> {
    let schema: Value = serde_json::from_str(SHEET_SCHEMA)
        .map_err(|err| format!("invalid bundled schema: {err}"))?;
    let compiled = validator_for(&schema).map_err(|err| format!("invalid schema: {err}"))?;
    if compiled.is_valid(sheet) {
        return Ok(());
    }
    let messages = compiled
        .iter_errors(sheet)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    Err(format!("schema validation failed: {}", messages.join("; ")))
}
