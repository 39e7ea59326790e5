//! Destinations for averaged result series.
//!
//! A table is identified by `(dir, file)`; every `write` adds one labelled
//! column to it. The runner always writes the `elements` column (the sweep)
//! first, then one column per container/strategy combination.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

pub trait ResultSink {
    fn write(&mut self, dir: &Path, file: &str, label: &str, values: &[f64]) -> Result<()>;
}

impl<K: ResultSink + ?Sized> ResultSink for &mut K {
    fn write(&mut self, dir: &Path, file: &str, label: &str, values: &[f64]) -> Result<()> {
        (**self).write(dir, file, label, values)
    }
}

/// Writes column-oriented CSV tables below a results root.
///
/// The first write to a table during the lifetime of the sink replaces
/// whatever file was there; later writes append a column. Columns of
/// different lengths are padded with empty cells.
#[derive(Debug)]
pub struct CsvSink {
    root: PathBuf,
    started: HashSet<PathBuf>,
}

impl CsvSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            started: HashSet::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn table_path(&self, dir: &Path, file: &str) -> PathBuf {
        self.root.join(dir).join(file)
    }
}

impl ResultSink for CsvSink {
    fn write(&mut self, dir: &Path, file: &str, label: &str, values: &[f64]) -> Result<()> {
        // Tables are re-read line by line when a column is appended.
        if label.contains(['\n', '\r']) {
            bail!("column label {label:?} contains a line break");
        }
        let path = self.table_path(dir, file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create results directory {}", parent.display()))?;
        }

        let existing = if self.started.contains(&path) {
            fs::read_to_string(&path).with_context(|| format!("read results table {}", path.display()))?
        } else {
            String::new()
        };

        let contents = append_column(&existing, label, values);
        fs::write(&path, contents).with_context(|| format!("write results table {}", path.display()))?;
        debug!(path = %path.display(), label, rows = values.len(), "wrote result column");
        self.started.insert(path);
        Ok(())
    }
}

fn append_column(existing: &str, label: &str, values: &[f64]) -> String {
    let mut rows: Vec<String> = existing.lines().map(str::to_owned).collect();
    let width = rows.first().map(|header| count_fields(header)).unwrap_or(0);
    let needed = values.len() + 1;
    while rows.len() < needed {
        // Fresh rows need `width` empty cells before the new one.
        rows.push(",".repeat(width.saturating_sub(1)));
    }

    for (idx, row) in rows.iter_mut().enumerate() {
        let cell = match idx {
            0 => escape_field(label),
            n => values.get(n - 1).map(|value| value.to_string()).unwrap_or_default(),
        };
        if width > 0 {
            row.push(',');
        }
        row.push_str(&cell);
    }

    let mut out = rows.join("\n");
    out.push('\n');
    out
}

fn count_fields(line: &str) -> usize {
    let mut fields = 1;
    let mut quoted = false;
    for ch in line.chars() {
        match ch {
            '"' => quoted = !quoted,
            ',' if !quoted => fields += 1,
            _ => {}
        }
    }
    fields
}

fn escape_field(raw: &str) -> String {
    if raw.contains([',', '"']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// One call observed by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct SinkRecord {
    pub dir: PathBuf,
    pub file: String,
    pub label: String,
    pub values: Vec<f64>,
}

/// Keeps every column in memory, in call order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Vec<SinkRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SinkRecord] {
        &self.records
    }

    /// Column labels written to one table, in order.
    pub fn labels(&self, dir: impl AsRef<Path>, file: &str) -> Vec<&str> {
        let dir = dir.as_ref();
        self.records
            .iter()
            .filter(|record| record.dir == dir && record.file == file)
            .map(|record| record.label.as_str())
            .collect()
    }
}

impl ResultSink for MemorySink {
    fn write(&mut self, dir: &Path, file: &str, label: &str, values: &[f64]) -> Result<()> {
        self.records.push(SinkRecord {
            dir: dir.to_path_buf(),
            file: file.to_string(),
            label: label.to_string(),
            values: values.to_vec(),
        });
        Ok(())
    }
}
