//! Writes a synthetic salary survey as `sample_salaries.csv` and
//! `sample_salaries.parquet`, using the same column names as the published
//! dataset so the dashboard can open either file.

use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const ROWS: usize = 5_000;

const YEARS: [i64; 6] = [2020, 2021, 2022, 2023, 2024, 2025];
const SENIORITY: [(&str, f64); 4] = [
    ("junior", 0.55),
    ("pleno", 0.8),
    ("senior", 1.1),
    ("executivo", 1.5),
];
const CONTRACTS: [(&str, f64); 4] = [
    ("integral", 1.0),
    ("contrato", 0.95),
    ("freelancer", 0.8),
    ("parcial", 0.5),
];
const SIZES: [(&str, f64); 3] = [("pequena", 0.85), ("media", 1.0), ("grande", 1.05)];
const WORK_MODES: [&str; 3] = ["presencial", "hibrido", "remoto"];
const TITLES: [(&str, f64); 8] = [
    ("Data Scientist", 150_000.0),
    ("Data Engineer", 145_000.0),
    ("Data Analyst", 105_000.0),
    ("Machine Learning Engineer", 175_000.0),
    ("Analytics Engineer", 140_000.0),
    ("Research Scientist", 185_000.0),
    ("Data Architect", 165_000.0),
    ("BI Developer", 95_000.0),
];
const COUNTRIES: [(&str, f64); 8] = [
    ("USA", 1.0),
    ("CAN", 0.8),
    ("GBR", 0.7),
    ("DEU", 0.7),
    ("FRA", 0.6),
    ("ESP", 0.45),
    ("BRA", 0.3),
    ("IND", 0.25),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

#[derive(Debug, Serialize)]
struct Row {
    ano: i64,
    senioridade: &'static str,
    contrato: &'static str,
    tamanho_empresa: &'static str,
    remoto: &'static str,
    cargo: &'static str,
    residencia_iso3: &'static str,
    usd: f64,
}

fn generate(rng: &mut SimpleRng) -> Vec<Row> {
    (0..ROWS)
        .map(|_| {
            let &year = rng.pick(&YEARS);
            let &(seniority, s_mult) = rng.pick(&SENIORITY);
            let &(contract, c_mult) = rng.pick(&CONTRACTS);
            let &(size, z_mult) = rng.pick(&SIZES);
            let &remote = rng.pick(&WORK_MODES);
            let &(title, base) = rng.pick(&TITLES);
            let &(country, k_mult) = rng.pick(&COUNTRIES);

            // ~4% raise per survey year since 2020
            let growth = 1.0 + 0.04 * (year - 2020) as f64;
            let mean = base * s_mult * c_mult * z_mult * k_mult * growth;
            let usd = rng.gauss(mean, mean * 0.15).max(5_000.0).round();

            Row {
                ano: year,
                senioridade: seniority,
                contrato: contract,
                tamanho_empresa: size,
                remoto: remote,
                cargo: title,
                residencia_iso3: country,
                usd,
            }
        })
        .collect()
}

fn write_csv(rows: &[Row], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn to_batch(rows: &[Row]) -> Result<RecordBatch> {
    let text = |f: fn(&Row) -> &'static str| -> ArrayRef {
        Arc::new(StringArray::from(rows.iter().map(f).collect::<Vec<_>>()))
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("ano", DataType::Int64, false),
        Field::new("senioridade", DataType::Utf8, false),
        Field::new("contrato", DataType::Utf8, false),
        Field::new("tamanho_empresa", DataType::Utf8, false),
        Field::new("remoto", DataType::Utf8, false),
        Field::new("cargo", DataType::Utf8, false),
        Field::new("residencia_iso3", DataType::Utf8, false),
        Field::new("usd", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int64Array::from(rows.iter().map(|r| r.ano).collect::<Vec<_>>())),
            text(|r| r.senioridade),
            text(|r| r.contrato),
            text(|r| r.tamanho_empresa),
            text(|r| r.remoto),
            text(|r| r.cargo),
            text(|r| r.residencia_iso3),
            Arc::new(Float64Array::from(rows.iter().map(|r| r.usd).collect::<Vec<_>>())),
        ],
    )
    .context("building record batch")?;
    Ok(batch)
}

fn write_parquet(batch: &RecordBatch, path: &str) -> Result<()> {
    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);
    let rows = generate(&mut rng);

    write_csv(&rows, "sample_salaries.csv")?;
    let batch = to_batch(&rows)?;
    write_parquet(&batch, "sample_salaries.parquet")?;

    log::info!("preview:\n{}", pretty_format_batches(&[batch.slice(0, 5)])?);
    println!(
        "Wrote {} records to sample_salaries.csv and sample_salaries.parquet",
        rows.len()
    );
    Ok(())
}
