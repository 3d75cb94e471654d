//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get an fq command
pub fn fq() -> Command {
    Command::new(cargo::cargo_bin!("fq"))
}

/// Write a two-row resource table into a temp dir and return its path
pub fn write_custom_catalog(tmp: &TempDir) -> PathBuf {
    let path = tmp.path().join("custom.csv");
    std::fs::write(
        &path,
        "id,name,kind,category,unit,unit_cost\n\
         cctv-1,Thermal Camera,equipment,detection,ea,2500.00\n\
         foam-1,AFFF Foam Concentrate,material,water,l,22.00\n",
    )
    .unwrap();
    path
}

/// Write a one-row labor table into a temp dir and return its path
pub fn write_custom_roles(tmp: &TempDir) -> PathBuf {
    let path = tmp.path().join("rates.csv");
    std::fs::write(&path, "title,hourly_cost\nRope Access Technician,80.00\n").unwrap();
    path
}
