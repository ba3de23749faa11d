//! PostgreSQL execution invoker
//!
//! Runs prepared statements through sqlx. Result cells are converted to
//! JSON keyed on the column's reported type name, with a to-string fallback
//! for anything unrecognized.

use std::collections::HashMap;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgRow;
use sqlx::{Column, PgPool, Row, TypeInfo};

use crate::error::QueryResult;
use crate::model::StatementKind;

use super::{ExecutionInvoker, ExecutionOutcome, PreparedQuery};

/// Invoker backed by a PostgreSQL connection pool
pub struct PostgresInvoker {
    pool: PgPool,
}

impl PostgresInvoker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExecutionInvoker for PostgresInvoker {
    async fn execute(&self, query: &PreparedQuery) -> QueryResult<ExecutionOutcome> {
        let started = Instant::now();
        let mut prepared = sqlx::query(&query.sql);
        for param in &query.params {
            prepared = prepared.bind(param.as_str());
        }

        match query.kind {
            StatementKind::Select => match prepared.fetch_all(&self.pool).await {
                Ok(rows) => {
                    let columns = rows
                        .first()
                        .map(|row| {
                            row.columns().iter().map(|c| c.name().to_string()).collect()
                        })
                        .unwrap_or_default();
                    let rows = rows.iter().map(row_to_map).collect::<QueryResult<Vec<_>>>()?;
                    Ok(ExecutionOutcome {
                        columns,
                        rows,
                        execution_time_ms: elapsed_ms(started),
                        affected_rows: None,
                        error: None,
                    })
                }
                Err(err) => Ok(failed(err, started)),
            },
            StatementKind::Insert | StatementKind::Update | StatementKind::Delete => {
                match prepared.execute(&self.pool).await {
                    Ok(done) => Ok(ExecutionOutcome {
                        execution_time_ms: elapsed_ms(started),
                        affected_rows: Some(done.rows_affected()),
                        ..Default::default()
                    }),
                    Err(err) => Ok(failed(err, started)),
                }
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

fn failed(err: sqlx::Error, started: Instant) -> ExecutionOutcome {
    tracing::warn!(error = %err, "statement failed");
    ExecutionOutcome {
        execution_time_ms: elapsed_ms(started),
        error: Some(err.to_string()),
        ..Default::default()
    }
}

fn row_to_map(row: &PgRow) -> QueryResult<HashMap<String, JsonValue>> {
    let mut map = HashMap::new();
    for (index, column) in row.columns().iter().enumerate() {
        let value = cell_to_json(row, index, column.type_info().name())?;
        map.insert(column.name().to_string(), value);
    }
    Ok(map)
}

fn cell_to_json(row: &PgRow, index: usize, type_name: &str) -> QueryResult<JsonValue> {
    let value = match type_name {
        "BOOL" => row.try_get::<Option<bool>, _>(index)?.map(JsonValue::from),
        "INT2" => row.try_get::<Option<i16>, _>(index)?.map(JsonValue::from),
        "INT4" => row.try_get::<Option<i32>, _>(index)?.map(JsonValue::from),
        "INT8" => row.try_get::<Option<i64>, _>(index)?.map(JsonValue::from),
        "FLOAT4" => row.try_get::<Option<f32>, _>(index)?.map(JsonValue::from),
        "FLOAT8" => row.try_get::<Option<f64>, _>(index)?.map(JsonValue::from),
        "UUID" => row
            .try_get::<Option<uuid::Uuid>, _>(index)?
            .map(|v| JsonValue::from(v.to_string())),
        "TIMESTAMPTZ" => row
            .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(index)?
            .map(|v| JsonValue::from(v.to_rfc3339())),
        "TIMESTAMP" => row
            .try_get::<Option<chrono::NaiveDateTime>, _>(index)?
            .map(|v| JsonValue::from(v.to_string())),
        "DATE" => row
            .try_get::<Option<chrono::NaiveDate>, _>(index)?
            .map(|v| JsonValue::from(v.to_string())),
        "JSON" | "JSONB" => row.try_get::<Option<JsonValue>, _>(index)?,
        _ => row.try_get::<Option<String>, _>(index)?.map(JsonValue::from),
    };
    Ok(value.unwrap_or(JsonValue::Null))
}
