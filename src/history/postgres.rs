use super::*;
use crate::Price;
use crate::Scalar;
use crate::features::FeatureVector;
use crate::features::Field;
use crate::features::Kind;
use chrono::DateTime;
use chrono::Utc;
use std::sync::Arc;
use tokio_postgres::Client;

/// Feature columns, in `Field::all()` order.
const COLUMNS: &str = "square_feet, bedrooms, bathrooms, age_years, garage_spaces, lot_size_sqft, floors, crime_rate, school_rating, distance_to_city_miles, has_pool, has_fireplace, has_renovated, neighborhood_quality";

/// Table metadata and DDL generation.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

impl Schema for Record {
    fn name() -> &'static str {
        HISTORY
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            HISTORY,
            " (
                id                      BIGSERIAL PRIMARY KEY,
                square_feet             BIGINT NOT NULL,
                bedrooms                BIGINT NOT NULL,
                bathrooms               BIGINT NOT NULL,
                age_years               BIGINT NOT NULL,
                garage_spaces           BIGINT NOT NULL,
                lot_size_sqft           BIGINT NOT NULL,
                floors                  BIGINT NOT NULL,
                crime_rate              DOUBLE PRECISION NOT NULL,
                school_rating           BIGINT NOT NULL,
                distance_to_city_miles  DOUBLE PRECISION NOT NULL,
                has_pool                BIGINT NOT NULL,
                has_fireplace           BIGINT NOT NULL,
                has_renovated           BIGINT NOT NULL,
                neighborhood_quality    BIGINT NOT NULL,
                predicted_price         DOUBLE PRECISION NOT NULL,
                created_at              TIMESTAMPTZ NOT NULL DEFAULT NOW()
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_",
            HISTORY,
            "_created ON ",
            HISTORY,
            " (created_at DESC, id DESC);"
        )
    }
}

/// Connects to PostgreSQL and makes sure the history table exists.
///
/// Returns an `Arc<Client>` suitable for sharing across workers.
pub async fn db(url: &str) -> anyhow::Result<Arc<Client>> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    client.batch_execute(Record::creates()).await?;
    client.batch_execute(Record::indices()).await?;
    log::info!("history table {} ready", Record::name());
    Ok(Arc::new(client))
}

/// Columns: id, the 14 features in `Field::all()` order, price, timestamp.
fn hydrate(row: &tokio_postgres::Row) -> Record {
    let x = Field::all().map(|field| match field.kind() {
        Kind::Integer => row.get::<_, i64>(1 + field as usize) as Scalar,
        Kind::Float => row.get::<_, f64>(1 + field as usize),
    });
    Record::new(
        row.get::<_, i64>(0),
        FeatureVector::from(x),
        row.get::<_, f64>(1 + Field::N),
        row.get::<_, DateTime<Utc>>(2 + Field::N),
    )
}

#[async_trait::async_trait]
impl History for Client {
    async fn append(&self, features: &FeatureVector, price: Price) -> Result<RecordId, StoreError> {
        let f = features;
        self.query_one(
            const_format::concatcp!(
                "INSERT INTO ",
                HISTORY,
                " (",
                COLUMNS,
                ", predicted_price) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) RETURNING id"
            ),
            &[
                &f.square_feet,
                &f.bedrooms,
                &f.bathrooms,
                &f.age_years,
                &f.garage_spaces,
                &f.lot_size_sqft,
                &f.floors,
                &f.crime_rate,
                &f.school_rating,
                &f.distance_to_city_miles,
                &f.has_pool,
                &f.has_fireplace,
                &f.has_renovated,
                &f.neighborhood_quality,
                &price,
            ],
        )
        .await
        .map(|row| row.get::<_, i64>(0))
        .map_err(StoreError::from)
    }

    async fn list(&self, limit: i64) -> Result<Vec<Record>, StoreError> {
        self.query(
            const_format::concatcp!(
                "SELECT id, ",
                COLUMNS,
                ", predicted_price, created_at FROM ",
                HISTORY,
                " ORDER BY created_at DESC, id DESC LIMIT $1"
            ),
            &[&limit],
        )
        .await
        .map(|rows| rows.iter().map(hydrate).collect())
        .map_err(StoreError::from)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.query_one(const_format::concatcp!("SELECT COUNT(*) FROM ", HISTORY), &[])
            .await
            .map(|row| row.get::<_, i64>(0))
            .map_err(StoreError::from)
    }
}
