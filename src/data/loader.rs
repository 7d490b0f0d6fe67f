use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Column, Dataset, Measure, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("column '{column}' has type {found}, expected {expected}")]
    ColumnType {
        column: &'static str,
        found: String,
        expected: &'static str,
    },

    #[error("row {row}, column '{column}': cannot parse '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("malformed document: {0}")]
    Malformed(String),
}

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where a dataset comes from: a local file or an HTTP(S) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    /// Lower-cased file extension of the path or URL (query string ignored).
    fn extension(&self) -> String {
        let name = match self {
            DataSource::Path(p) => p.to_string_lossy().into_owned(),
            DataSource::Url(u) => u.split(['?', '#']).next().unwrap_or("").to_string(),
        };
        Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
    }
}

impl From<&str> for DataSource {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            DataSource::Url(s.to_string())
        } else {
            DataSource::Path(PathBuf::from(s))
        }
    }
}

impl FromStr for DataSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DataSource::from(s))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Path(p) => write!(f, "{}", p.display()),
            DataSource::Url(u) => write!(f, "{u}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a salary dataset.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the fixed column names (default)
/// * `.json`    – `[{ "ano": 2023, "senioridade": "senior", ... }, ...]`
/// * `.parquet` – one column per field (local files only)
pub fn load(source: &DataSource) -> Result<Dataset, LoadError> {
    let dataset = match source {
        DataSource::Path(path) => load_file(path)?,
        DataSource::Url(url) => load_url(url, &source.extension())?,
    };
    if dataset.dropped > 0 {
        log::warn!(
            "{}: dropped {} rows with missing, non-finite or negative values",
            source,
            dataset.dropped
        );
    }
    Ok(dataset)
}

fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let open = || {
        File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    };
    match DataSource::Path(path.to_path_buf()).extension().as_str() {
        "parquet" | "pq" => load_parquet(open()?),
        "json" => read_json(BufReader::new(open()?)),
        "csv" | "" => read_csv(open()?),
        other => Err(LoadError::UnsupportedFormat(format!(".{other}"))),
    }
}

fn load_url(url: &str, ext: &str) -> Result<Dataset, LoadError> {
    log::info!("Fetching {url}");
    let response = ureq::get(url).call().map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        source: Box::new(e),
    })?;
    let body = response.into_reader();
    match ext {
        "json" => read_json(BufReader::new(body)),
        "parquet" | "pq" => Err(LoadError::UnsupportedFormat(
            "Parquet is only supported for local files".into(),
        )),
        _ => read_csv(body),
    }
}

// ---------------------------------------------------------------------------
// Row assembly shared by every format
// ---------------------------------------------------------------------------

const TEXT_COLUMNS: [Column; 6] = [
    Column::Seniority,
    Column::Contract,
    Column::CompanySize,
    Column::Remote,
    Column::Title,
    Column::ResidenceIso3,
];

/// A row before validation; `None` is a null cell.
#[derive(Debug, Default)]
struct RawRecord {
    year: Option<f64>,
    usd: Option<f64>,
    text: [Option<String>; 6],
}

impl RawRecord {
    /// Validate into a [`Record`]. `Ok(None)` means the row is dropped.
    fn finish(self, row: usize) -> Result<Option<Record>, LoadError> {
        // NaN and infinities count as nulls, whatever format they came from.
        let year = self.year.filter(|y| y.is_finite());
        let usd = self.usd.filter(|v| v.is_finite());
        if let Some(y) = year {
            if y.fract() != 0.0 {
                return Err(LoadError::InvalidValue {
                    row,
                    column: Column::Year.header(),
                    value: y.to_string(),
                });
            }
        }
        let (Some(year), Some(usd)) = (year, usd) else {
            return Ok(None);
        };
        if usd < 0.0 {
            return Ok(None);
        }
        let [Some(seniority), Some(contract), Some(company_size), Some(remote), Some(title), Some(residence_iso3)] =
            self.text
        else {
            return Ok(None);
        };
        Ok(Some(Record {
            year: year as i64,
            seniority,
            contract,
            company_size,
            remote,
            title,
            residence_iso3,
            usd,
        }))
    }
}

/// Collects validated rows and counts the dropped ones.
#[derive(Default)]
struct DatasetBuilder {
    records: Vec<Record>,
    dropped: usize,
}

impl DatasetBuilder {
    fn push(&mut self, raw: RawRecord, row: usize) -> Result<(), LoadError> {
        match raw.finish(row)? {
            Some(record) => self.records.push(record),
            None => {
                log::debug!("row {row}: dropped (null, non-finite or negative value)");
                self.dropped += 1;
            }
        }
        Ok(())
    }

    fn build(self) -> Dataset {
        Dataset {
            records: self.records,
            dropped: self.dropped,
        }
    }
}

fn parse_number(s: &str, row: usize, column: &'static str) -> Result<Option<f64>, LoadError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let v = s.parse::<f64>().map_err(|_| LoadError::InvalidValue {
        row,
        column,
        value: s.to_string(),
    })?;
    Ok(Some(v))
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names. Extra columns are ignored and
/// column order does not matter.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let position = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let year_idx = position(Measure::Year.header())?;
    let usd_idx = position(Measure::Usd.header())?;
    let text_idx = TEXT_COLUMNS
        .iter()
        .map(|c| position(c.header()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut builder = DatasetBuilder::default();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let mut raw = RawRecord {
            year: parse_number(cell(year_idx), row_no, Measure::Year.header())?,
            usd: parse_number(cell(usd_idx), row_no, Measure::Usd.header())?,
            ..Default::default()
        };
        for (slot, &idx) in raw.text.iter_mut().zip(&text_idx) {
            *slot = non_empty(cell(idx));
        }
        builder.push(raw, row_no)?;
    }

    Ok(builder.build())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, as written by
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "ano": 2023, "senioridade": "senior", "usd": 120000.0, ... },
///   ...
/// ]
/// ```
pub fn read_json<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let root: JsonValue = serde_json::from_reader(reader)?;
    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::Malformed("expected top-level JSON array".into()))?;

    if let Some(first) = rows.first().and_then(|r| r.as_object()) {
        let required = [Measure::Year.header(), Measure::Usd.header()]
            .into_iter()
            .chain(TEXT_COLUMNS.iter().map(|c| c.header()));
        for name in required {
            if !first.contains_key(name) {
                return Err(LoadError::MissingColumn(name));
            }
        }
    }

    let mut builder = DatasetBuilder::default();

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| LoadError::Malformed(format!("row {i} is not a JSON object")))?;

        let mut raw = RawRecord {
            year: json_number(obj.get(Measure::Year.header()), i, Measure::Year.header())?,
            usd: json_number(obj.get(Measure::Usd.header()), i, Measure::Usd.header())?,
            ..Default::default()
        };
        for (slot, col) in raw.text.iter_mut().zip(TEXT_COLUMNS) {
            *slot = json_text(obj.get(col.header()));
        }
        builder.push(raw, i)?;
    }

    Ok(builder.build())
}

fn json_number(
    val: Option<&JsonValue>,
    row: usize,
    column: &'static str,
) -> Result<Option<f64>, LoadError> {
    match val {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(n)) => Ok(n.as_f64()),
        Some(JsonValue::String(s)) => parse_number(s, row, column),
        Some(other) => Err(LoadError::InvalidValue {
            row,
            column,
            value: other.to_string(),
        }),
    }
}

fn json_text(val: Option<&JsonValue>) -> Option<String> {
    match val? {
        JsonValue::Null => None,
        JsonValue::String(s) => non_empty(s),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per field.
///
/// Text columns must be `Utf8` or `LargeUtf8`; `ano` and `usd` may be any
/// integer or floating point type.
fn load_parquet(file: File) -> Result<Dataset, LoadError> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut builder = DatasetBuilder::default();
    let mut offset = 0;

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();
        let column = |name: &'static str| {
            schema
                .index_of(name)
                .map(|i| batch.column(i).clone())
                .map_err(|_| LoadError::MissingColumn(name))
        };

        let year = numeric_column(column(Measure::Year.header())?, Measure::Year.header())?;
        let usd = numeric_column(column(Measure::Usd.header())?, Measure::Usd.header())?;
        let year = year.as_primitive::<Float64Type>();
        let usd = usd.as_primitive::<Float64Type>();
        let text = TEXT_COLUMNS
            .iter()
            .map(|c| {
                let col = column(c.header())?;
                check_text_column(&col, c.header())?;
                Ok(col)
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        for row in 0..batch.num_rows() {
            let mut raw = RawRecord {
                year: (!year.is_null(row)).then(|| year.value(row)),
                usd: (!usd.is_null(row)).then(|| usd.value(row)),
                ..Default::default()
            };
            for (slot, col) in raw.text.iter_mut().zip(&text) {
                *slot = text_value(col, row);
            }
            builder.push(raw, offset + row)?;
        }
        offset += batch.num_rows();
    }

    Ok(builder.build())
}

// -- Parquet / Arrow helpers --

/// Cast any integer or float column to `Float64`.
fn numeric_column(col: ArrayRef, name: &'static str) -> Result<ArrayRef, LoadError> {
    if !col.data_type().is_numeric() {
        return Err(LoadError::ColumnType {
            column: name,
            found: col.data_type().to_string(),
            expected: "a numeric type",
        });
    }
    Ok(cast(&col, &DataType::Float64)?)
}

fn check_text_column(col: &ArrayRef, name: &'static str) -> Result<(), LoadError> {
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => Ok(()),
        other => Err(LoadError::ColumnType {
            column: name,
            found: other.to_string(),
            expected: "Utf8",
        }),
    }
}

fn text_value(col: &ArrayRef, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::LargeUtf8 => non_empty(col.as_string::<i64>().value(row)),
        _ => non_empty(col.as_string::<i32>().value(row)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use super::*;

    const HEADER: &str = "ano,senioridade,contrato,cargo,usd,residencia_iso3,remoto,tamanho_empresa";

    fn csv_with(rows: &[&str]) -> String {
        let mut s = format!("{HEADER}\n");
        for r in rows {
            s.push_str(r);
            s.push('\n');
        }
        s
    }

    fn temp_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(tmp, "{contents}").unwrap();
        tmp
    }

    #[test]
    fn csv_loads_records_in_order() {
        let csv = csv_with(&[
            "2023,senior,integral,Data Scientist,100000,USA,remoto,media",
            "2022.0,junior,contrato,Data Analyst,50000.5,BRA,presencial,grande",
        ]);
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.dropped, 0);

        let first = &ds.records[0];
        assert_eq!(first.year, 2023);
        assert_eq!(first.title, "Data Scientist");
        assert_eq!(first.company_size, "media");
        assert_eq!(first.residence_iso3, "USA");
        assert_eq!(ds.records[1].year, 2022);
        assert_eq!(ds.records[1].usd, 50000.5);
    }

    #[test]
    fn csv_ignores_extra_columns() {
        let csv = "moeda,ano,senioridade,contrato,cargo,usd,residencia_iso3,remoto,tamanho_empresa,salario\n\
                   USD,2024,senior,integral,ML Engineer,1,USA,remoto,media,1\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].title, "ML Engineer");
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let csv = "ano,senioridade,contrato,cargo,residencia_iso3,remoto,tamanho_empresa\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("usd")), "{err}");
    }

    #[test]
    fn csv_mistyped_salary_is_an_error() {
        let csv = csv_with(&["2023,senior,integral,Data Scientist,lots,USA,remoto,media"]);
        match read_csv(csv.as_bytes()).unwrap_err() {
            LoadError::InvalidValue { row, column, value } => {
                assert_eq!(row, 0);
                assert_eq!(column, "usd");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn csv_fractional_year_is_an_error() {
        let csv = csv_with(&["2023.5,senior,integral,Data Scientist,1,USA,remoto,media"]);
        assert!(matches!(
            read_csv(csv.as_bytes()),
            Err(LoadError::InvalidValue { column: "ano", .. })
        ));
    }

    #[test]
    fn csv_drops_null_and_negative_rows() {
        let csv = csv_with(&[
            "2023,senior,integral,Data Scientist,100,USA,remoto,media",
            ",senior,integral,Data Scientist,100,USA,remoto,media",
            "2023,,integral,Data Scientist,100,USA,remoto,media",
            "2023,senior,integral,Data Scientist,-5,USA,remoto,media",
            "2023,senior,integral,Data Scientist,,USA,remoto,media",
        ]);
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.dropped, 4);
    }

    #[test]
    fn csv_drops_non_finite_numbers() {
        let csv = csv_with(&[
            "2023,senior,integral,Data Scientist,100,USA,remoto,media",
            "2023,senior,integral,Data Scientist,inf,USA,remoto,media",
            "2023,senior,integral,Data Scientist,NaN,USA,remoto,media",
            "2023,senior,integral,Data Scientist,-inf,USA,remoto,media",
            "NaN,senior,integral,Data Scientist,100,USA,remoto,media",
        ]);
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.dropped, 4);
        assert!(ds.records.iter().all(|r| r.usd.is_finite()));
    }

    #[test]
    fn load_dispatches_on_extension() {
        let tmp = temp_file(
            ".csv",
            &csv_with(&["2023,senior,integral,Data Scientist,100,USA,remoto,media"]),
        );
        let ds = load(&DataSource::Path(tmp.path().to_path_buf())).unwrap();
        assert_eq!(ds.len(), 1);

        let tmp = temp_file(".xlsx", "");
        assert!(matches!(
            load(&DataSource::Path(tmp.path().to_path_buf())),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load(&DataSource::Path("/definitely/not/here.csv".into())).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }

    #[test]
    fn json_records_match_csv() {
        let json = r#"[
            {"ano": 2023, "senioridade": "senior", "contrato": "integral", "cargo": "Data Scientist",
             "usd": 100000, "residencia_iso3": "USA", "remoto": "remoto", "tamanho_empresa": "media"},
            {"ano": 2022.0, "senioridade": "junior", "contrato": "contrato", "cargo": "Data Analyst",
             "usd": 50000.5, "residencia_iso3": "BRA", "remoto": "presencial", "tamanho_empresa": "grande"},
            {"ano": null, "senioridade": "junior", "contrato": "contrato", "cargo": "Data Analyst",
             "usd": 1, "residencia_iso3": "BRA", "remoto": "presencial", "tamanho_empresa": "grande"}
        ]"#;
        let tmp = temp_file(".json", json);
        let from_json = load(&DataSource::Path(tmp.path().to_path_buf())).unwrap();

        let csv = csv_with(&[
            "2023,senior,integral,Data Scientist,100000,USA,remoto,media",
            "2022,junior,contrato,Data Analyst,50000.5,BRA,presencial,grande",
        ]);
        let from_csv = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(from_json.records, from_csv.records);
        assert_eq!(from_json.dropped, 1);
    }

    #[test]
    fn json_requires_an_array() {
        let err = read_json(r#"{"ano": 2023}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn parquet_round_trip() {
        let text = |vals: &[&str]| -> ArrayRef { Arc::new(StringArray::from(vals.to_vec())) };
        let schema = Arc::new(Schema::new(vec![
            Field::new("ano", DataType::Int64, true),
            Field::new("usd", DataType::Float64, true),
            Field::new("senioridade", DataType::Utf8, true),
            Field::new("contrato", DataType::Utf8, true),
            Field::new("tamanho_empresa", DataType::Utf8, true),
            Field::new("remoto", DataType::Utf8, true),
            Field::new("cargo", DataType::Utf8, true),
            Field::new("residencia_iso3", DataType::Utf8, true),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(vec![Some(2023), None])),
                Arc::new(Float64Array::from(vec![120.0, 80.0])),
                text(&["senior", "junior"]),
                text(&["integral", "integral"]),
                text(&["media", "grande"]),
                text(&["remoto", "hibrido"]),
                text(&["Data Engineer", "Data Analyst"]),
                text(&["DEU", "BRA"]),
            ],
        )
        .unwrap();

        let mut tmp = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(tmp.as_file_mut(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load(&DataSource::Path(tmp.path().to_path_buf())).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.dropped, 1);
        assert_eq!(ds.records[0].year, 2023);
        assert_eq!(ds.records[0].title, "Data Engineer");
        assert_eq!(ds.records[0].usd, 120.0);
    }

    #[test]
    fn parquet_drops_non_finite_numbers() {
        let text = |v: &str| -> ArrayRef { Arc::new(StringArray::from(vec![v; 4])) };
        let schema = Arc::new(Schema::new(vec![
            Field::new("ano", DataType::Float64, true),
            Field::new("usd", DataType::Float64, true),
            Field::new("senioridade", DataType::Utf8, true),
            Field::new("contrato", DataType::Utf8, true),
            Field::new("tamanho_empresa", DataType::Utf8, true),
            Field::new("remoto", DataType::Utf8, true),
            Field::new("cargo", DataType::Utf8, true),
            Field::new("residencia_iso3", DataType::Utf8, true),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Float64Array::from(vec![2023.0, 2023.0, 2023.0, f64::NAN])),
                Arc::new(Float64Array::from(vec![f64::NAN, f64::INFINITY, 10.0, 20.0])),
                text("senior"),
                text("integral"),
                text("media"),
                text("remoto"),
                text("Data Scientist"),
                text("BRA"),
            ],
        )
        .unwrap();

        let mut tmp = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(tmp.as_file_mut(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load(&DataSource::Path(tmp.path().to_path_buf())).unwrap();
        assert_eq!(ds.dropped, 3);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].usd, 10.0);
    }

    #[test]
    fn data_source_parsing() {
        let url: DataSource = "https://example.com/data.json?raw=1".parse().unwrap();
        assert!(matches!(url, DataSource::Url(_)));
        assert_eq!(url.extension(), "json");

        let path: DataSource = " salaries.CSV ".parse().unwrap();
        assert_eq!(path, DataSource::Path("salaries.CSV".into()));
        assert_eq!(path.extension(), "csv");
    }
}
