//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::store::RecordStore;
use crate::types::Record;

/// Create a record with just a code.
pub fn make_record(code: &str) -> Record {
    Record::new(code)
}

/// Create a record with a code and a display name.
pub fn make_record_with_name(code: &str, name: &str) -> Record {
    let mut record = Record::new(code);
    record.name = Some(name.to_string());
    record
}

/// Create a fully priced package: code, name, source, price (VND), data (GB).
pub fn make_package(code: &str, name: &str, source: &str, price: f64, data_gb: f64) -> Record {
    let mut record = make_record_with_name(code, name);
    record.source = Some(source.to_string());
    record.price = Some(price);
    record.data_gb = Some(data_gb);
    record
}

/// The two-record store used throughout the scenario tests.
pub fn scenario_store() -> RecordStore {
    RecordStore::new(vec![
        make_record_with_name("D15", "Super Data 15GB"),
        make_record_with_name("D10", "Data 10"),
    ])
}

/// A small catalog across three sources with prices, data and descriptions.
pub fn sample_catalog() -> Vec<Record> {
    let mut records = vec![
        make_package("D15", "Super Data 15GB", "vnpt", 15_000.0, 15.0),
        make_package("D10", "Data 10", "vnpt", 10_000.0, 10.0),
        make_package("BIG70", "Big 70", "vinaphone", 70_000.0, 1.5),
        make_package("BIG90", "Big 90", "vinaphone", 90_000.0, 2.5),
        make_package("ST30", "Sieu toc 30", "myvnpt", 30_000.0, 7.0),
        make_package("GAME50", "Game thu vi", "digishop", 50_000.0, 5.0),
        make_package("d5", "Data 5 ngay", "VNPT", 5_000.0, 5.0),
        make_package("VD149", "Vinaphone Data 149", "vinaphone", 149_000.0, 120.0),
    ];

    records[2].description = Some("Goi data toc do cao 1.5GB/ngay".to_string());
    records[5].description = Some("Mien phi data choi game".to_string());
    records[7].full_description =
        Some("Uu dai: mien phi goi noi mang duoi 10 phut, 120GB data".to_string());
    records
}
