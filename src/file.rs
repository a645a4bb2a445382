//! Parquet file input and output for file-derived runs.
//!
//! # Public API
//! - [`load_sequence`]  — read the first column of a Parquet file as `i64`s
//! - [`write_sequence`] — write a sequence as a single-column Parquet file
//!
//! Values are accumulated exactly as read: nulls are skipped and nothing is
//! pre-allocated into the output, so the loaded length always equals the
//! number of non-null values in the column.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use log::info;
use parquet::basic::{Encoding, Type as PhysicalType};
use parquet::data_type::Int64Type;
use parquet::file::properties::WriterProperties;
use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::file::writer::SerializedFileWriter;
use parquet::record::Field;
use parquet::schema::parser::parse_message_type;
use parquet::schema::types::Type;

use crate::error::{BenchError, Result};

/// Schema of files produced by [`write_sequence`].
const SEQUENCE_SCHEMA: &str = "message deltabench { REQUIRED INT64 value; }";

// ─────────────────────────────────────────────────────────────────────────────
// Reading
// ─────────────────────────────────────────────────────────────────────────────

/// Reads every non-null value of the file's first column.
///
/// # Errors
/// - [`BenchError::Io`] / [`BenchError::Parquet`] when the file cannot be
///   opened or decoded.
/// - [`BenchError::UnsupportedColumn`] when the first column is not INT64.
/// - [`BenchError::EmptyInput`] when the file has no columns or no values.
pub fn load_sequence(path: &Path) -> Result<Vec<i64>> {
    let file = File::open(path)?;
    let reader = SerializedFileReader::new(file)?;

    let metadata = reader.metadata();
    let schema = metadata.file_metadata().schema();
    let column = schema
        .get_fields()
        .first()
        .ok_or_else(|| BenchError::EmptyInput {
            path: path.to_path_buf(),
        })?;

    if !column.is_primitive() {
        return Err(unsupported(path, column.name(), "a group".to_owned()));
    }
    let physical = column.get_physical_type();
    if physical != PhysicalType::INT64 {
        return Err(unsupported(path, column.name(), format!("{physical:?}")));
    }

    info!(
        "{}: {} row groups, {} columns, reading `{}`",
        path.display(),
        metadata.num_row_groups(),
        schema.get_fields().len(),
        column.name()
    );

    // Project onto the first column only.
    let projection = Type::group_type_builder(schema.name())
        .with_fields(vec![Arc::clone(column)])
        .build()?;

    let mut values = Vec::new();
    for row in reader.get_row_iter(Some(projection))? {
        let row = row?;
        match row.get_column_iter().next() {
            Some((_, Field::Long(v)))
            | Some((_, Field::TimestampMillis(v)))
            | Some((_, Field::TimestampMicros(v))) => values.push(*v),
            Some((_, Field::Null)) | None => {}
            Some((name, other)) => return Err(unsupported(path, name, format!("{other:?}"))),
        }
    }

    if values.is_empty() {
        return Err(BenchError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    Ok(values)
}

fn unsupported(path: &Path, column: &str, found: String) -> BenchError {
    BenchError::UnsupportedColumn {
        path: path.to_path_buf(),
        column: column.to_owned(),
        found,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Writing
// ─────────────────────────────────────────────────────────────────────────────

/// Writes `values` as a single required INT64 column, one row group, using
/// DELTA_BINARY_PACKED pages.  Overwrites `path`.
pub fn write_sequence(path: &Path, values: &[i64]) -> Result<()> {
    let schema = Arc::new(parse_message_type(SEQUENCE_SCHEMA)?);
    let props = Arc::new(
        WriterProperties::builder()
            .set_dictionary_enabled(false)
            .set_encoding(Encoding::DELTA_BINARY_PACKED)
            .build(),
    );

    let file = File::create(path)?;
    let mut writer = SerializedFileWriter::new(file, schema, props)?;
    let mut row_group = writer.next_row_group()?;
    while let Some(mut column) = row_group.next_column()? {
        column.typed::<Int64Type>().write_batch(values, None, None)?;
        column.close()?;
    }
    row_group.close()?;
    writer.close()?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
