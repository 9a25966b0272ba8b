// File: loader.rs
// Description: fixture writers shared by the integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use rand::Rng;

/// Fresh scratch directory for one test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("boabench_it_{}_{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Unable to create scratch directory");
    dir
}

pub fn domain_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}abc{}{:02}", i % 10, (b'A' + (i / 10) as u8) as char, i)).collect()
}

pub fn write_domains(path: &PathBuf, labels: &[String]) {
    let content: String = labels.iter().map(|l| format!("{}\tsome description\n", l)).collect();
    std::fs::write(path, content).expect("Unable to write domain list");
}

/// Full square matrix text, one row per line.
pub fn matrix_to_string(matrix: &[Vec<f64>]) -> String {
    matrix
        .iter()
        .map(|row| row.iter().map(|v| format!("{}", v)).collect::<Vec<_>>().join(" ") + "\n")
        .collect()
}

pub fn write_matrix(path: &PathBuf, matrix: &[Vec<f64>]) {
    std::fs::write(path, matrix_to_string(matrix)).expect("Unable to write matrix");
}

/// Symmetric matrix with zero diagonal and off-diagonal values drawn from
/// `low..high`.
pub fn random_symmetric<R: Rng>(rng: &mut R, n: usize, low: f64, high: f64) -> Vec<Vec<f64>> {
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let v = rng.gen_range(low..high);
            matrix[i][j] = v;
            matrix[j][i] = v;
        }
    }
    matrix
}

pub fn map_off_diagonal<F: FnMut(f64) -> f64>(matrix: &[Vec<f64>], mut f: F) -> Vec<Vec<f64>> {
    let n = matrix.len();
    let mut out = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i != j {
                out[i][j] = f(matrix[i][j]);
            }
        }
    }
    out
}

pub fn read_auc(path: &PathBuf) -> f64 {
    std::fs::read_to_string(path)
        .expect("Unable to read AUC file")
        .trim()
        .parse()
        .expect("AUC file must hold one number")
}
