//! PostgreSQL schema catalog
//!
//! Reads `information_schema` and `pg_class` to describe the public schema.
//! Row counts come from the planner estimate in `pg_class.reltuples`; an
//! exact `COUNT(*)` per table would be far too expensive for a console that
//! refreshes its sidebar on every visit.

use sqlx::{PgPool, Row};

use crate::{CatalogError, CatalogResult, ColumnSchema, SchemaCatalog, TableSchema};

/// Catalog backed by a live PostgreSQL connection pool
pub struct PostgresCatalog {
    pool: PgPool,
}

impl PostgresCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn table_names(&self) -> CatalogResult<Vec<String>> {
        let rows = sqlx::query(
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema = 'public' AND table_type = 'BASE TABLE' \
             ORDER BY table_name",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("table_name").map_err(CatalogError::from))
            .collect()
    }

    async fn columns_for(&self, table: &str) -> CatalogResult<Vec<ColumnSchema>> {
        let rows = sqlx::query(
            "SELECT column_name, data_type FROM information_schema.columns \
             WHERE table_schema = 'public' AND table_name = $1 \
             ORDER BY ordinal_position",
        )
        .bind(table)
        .fetch_all(&self.pool)
        .await?;

        let key_rows = sqlx::query(
            "SELECT kcu.column_name, tc.constraint_type \
             FROM information_schema.table_constraints tc \
             JOIN information_schema.key_column_usage kcu \
               ON tc.constraint_name = kcu.constraint_name \
              AND tc.table_schema = kcu.table_schema \
             WHERE tc.table_schema = 'public' AND tc.table_name = $1 \
               AND tc.constraint_type IN ('PRIMARY KEY', 'FOREIGN KEY')",
        )
        .bind(table)
        .fetch_all(&self.pool)
        .await?;

        let mut primary_keys = Vec::new();
        let mut foreign_keys = Vec::new();
        for row in &key_rows {
            let column: String = row.try_get("column_name")?;
            let constraint: String = row.try_get("constraint_type")?;
            if constraint == "PRIMARY KEY" {
                primary_keys.push(column);
            } else {
                foreign_keys.push(column);
            }
        }

        rows.iter()
            .map(|row| {
                let name: String = row.try_get("column_name")?;
                let data_type: String = row.try_get("data_type")?;
                Ok(ColumnSchema {
                    is_primary_key: primary_keys.contains(&name),
                    is_foreign_key: foreign_keys.contains(&name),
                    name,
                    data_type,
                })
            })
            .collect()
    }

    async fn estimated_row_count(&self, table: &str) -> CatalogResult<i64> {
        let row = sqlx::query("SELECT reltuples::bigint AS estimate FROM pg_class WHERE relname = $1")
            .bind(table)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let estimate: i64 = row.try_get("estimate")?;
                // reltuples is -1 for never-analyzed tables
                Ok(estimate.max(0))
            }
            None => Ok(0),
        }
    }
}

#[async_trait::async_trait]
impl SchemaCatalog for PostgresCatalog {
    async fn list_tables(&self) -> CatalogResult<Vec<TableSchema>> {
        let names = self.table_names().await?;
        tracing::debug!(tables = names.len(), "introspected public schema");

        let mut tables = Vec::with_capacity(names.len());
        for name in names {
            let columns = self.columns_for(&name).await?;
            let row_count = self.estimated_row_count(&name).await?;
            tables.push(TableSchema {
                name,
                row_count,
                columns,
            });
        }
        Ok(tables)
    }
}
