//! Tables operation - list what a generation run would cover.

use eyre::{Context, Result};
use wink_codegen::filter_tables;
use wink_core::class_name;
use wink_manifest::Manifest;
use wink_schema::SchemaReader;

use crate::{
    ops::{ConnectionTarget, open_reader},
    reports::{TableEntry, TablesReport},
};

/// Execute the tables operation.
pub async fn tables(manifest: &Manifest, connection: Option<&str>) -> Result<TablesReport> {
    let target = ConnectionTarget::resolve(manifest, connection, |var| std::env::var(var).ok())?;
    let reader = open_reader(&target).await?;

    let all = reader
        .list_tables()
        .await
        .wrap_err("failed to list tables")?;
    let total = all.len();
    let tables = filter_tables(all, &manifest.generator.excluded_tables);

    Ok(TablesReport {
        excluded: total - tables.len(),
        tables: tables
            .into_iter()
            .map(|table| TableEntry {
                class_name: class_name(&table),
                table,
            })
            .collect(),
        connection: target.name,
        driver: target.driver,
    })
}
