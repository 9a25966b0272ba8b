// File: cath.rs
// Description: CATH domain path resolution

use std::path::{Path, PathBuf};

/// Directory holding one structure file per CATH domain, named by domain id.
#[derive(Debug, Clone, PartialEq)]
pub struct CathDir {
    root: PathBuf,
}

impl CathDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the structure file for a domain. Labels that already carry a
    /// directory component are taken as is.
    pub fn path(&self, domain: &str) -> PathBuf {
        if domain.contains(std::path::MAIN_SEPARATOR) || domain.contains('/') {
            PathBuf::from(domain)
        } else {
            self.root.join(domain)
        }
    }

    pub fn exists(&self, domain: &str) -> bool {
        self.path(domain).exists()
    }
}

/// Reduce a label to the basename of its path, cut at the first `.`.
/// `dompdb/1cukA01.pdb` and `1cukA01` both become `1cukA01`.
pub fn normalize_domain_label(label: &str) -> &str {
    let base = Path::new(label)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(label);
    match base.find('.') {
        Some(i) => &base[..i],
        None => base,
    }
}
