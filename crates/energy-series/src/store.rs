// File: crates/energy-series/src/store.rs
// Summary: Reads named point series out of JSON results files written by the simulation.
//
// Expected layout: a top-level object keyed by object name. Values are graph
// records, nested directories (same shape), or anything else (ignored):
//
// ```json
// {
//   "averageTreeEnergyDensityGraph": {
//     "x":   [0.0, 86400.0],
//     "y":   [4.1, 3.9],
//     "eyl": [0.2, 0.1],
//     "eyh": [0.3, 0.2]
//   },
//   "perTree": { "tree0": { "x": [], "y": [] } },
//   "runSeconds": 812.5
// }
// ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::StoreError;
use crate::series::{Point, Series};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    Graph(GraphRecord),
    Directory(BTreeMap<String, Entry>),
    #[allow(dead_code)]
    Other(serde_json::Value),
}

/// Columnar graph storage with asymmetric Y errors.
#[derive(Debug, Deserialize)]
struct GraphRecord {
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(default)]
    eyl: Vec<f64>,
    #[serde(default)]
    eyh: Vec<f64>,
}

impl GraphRecord {
    fn to_series(&self) -> Result<Series, String> {
        let n = self.x.len();
        if self.y.len() != n {
            return Err(format!("x has {n} values but y has {}", self.y.len()));
        }
        let err_column = |col: &[f64], label: &str| -> Result<Vec<f64>, String> {
            match col.len() {
                0 => Ok(vec![0.0; n]),
                len if len == n => Ok(col.to_vec()),
                len => Err(format!("x has {n} values but {label} has {len}")),
            }
        };
        let eyl = err_column(&self.eyl, "eyl")?;
        let eyh = err_column(&self.eyh, "eyh")?;

        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            let p = Point::new(self.x[i], self.y[i], eyh[i], eyl[i]);
            if !(p.x.is_finite() && p.y.is_finite() && p.err_high.is_finite() && p.err_low.is_finite()) {
                return Err(format!("point {i} has a non-finite value"));
            }
            if p.err_high < 0.0 || p.err_low < 0.0 {
                return Err(format!("point {i} has a negative error bound"));
            }
            points.push(p);
        }
        Ok(Series::new(points))
    }
}

/// A parsed results file.
#[derive(Debug)]
pub struct ResultsFile {
    path: PathBuf,
    root: BTreeMap<String, Entry>,
}

impl ResultsFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path)
            .map_err(|source| StoreError::Io { path: path.clone(), source })?;
        let root = serde_json::from_str(&text)
            .map_err(|source| StoreError::Parse { path: path.clone(), source })?;
        debug!("opened results file {}", path.display());
        Ok(Self { path, root })
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Find the graph called `name` anywhere in the file. The current level
    /// is searched before nested directories, which are visited in key order.
    pub fn find_object_any(&self, name: &str) -> Result<Series, StoreError> {
        match find_entry(&self.root, name) {
            Some(Entry::Graph(g)) => {
                let series = g.to_series().map_err(|reason| self.malformed(name, reason))?;
                debug!("found '{}' in {} ({} points)", name, self.path.display(), series.len());
                Ok(series)
            }
            Some(_) => Err(self.malformed(name, "object is not a graph".to_string())),
            None => Err(StoreError::NotFound { name: name.to_string(), path: self.path.clone() }),
        }
    }

    fn malformed(&self, name: &str, reason: String) -> StoreError {
        StoreError::Malformed { name: name.to_string(), path: self.path.clone(), reason }
    }
}

fn find_entry<'a>(dir: &'a BTreeMap<String, Entry>, name: &str) -> Option<&'a Entry> {
    if let Some(e) = dir.get(name) {
        return Some(e);
    }
    dir.values().find_map(|e| match e {
        Entry::Directory(sub) => find_entry(sub, name),
        _ => None,
    })
}

/// Open `path` and return the series called `name`.
pub fn load_series(path: impl AsRef<Path>, name: &str) -> Result<Series, StoreError> {
    ResultsFile::open(path)?.find_object_any(name)
}
