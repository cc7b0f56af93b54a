//! Ship Repository Implementation
//!
//! PostgreSQL implementation of the ShipRepository trait. Filters are
//! rendered into `WHERE` clauses with bound parameters.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::{
    Bounds, NewShip, PageRequest, Ship, ShipFilter, ShipOrder, ShipPredicate, ShipRepository,
};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

const SHIP_COLUMNS: &str =
    "id, name, planet, ship_type, prod_date, is_used, speed, crew_size, rating";

/// Database row representation of the ships table.
#[derive(Debug, sqlx::FromRow)]
struct ShipRow {
    id: i64,
    name: String,
    planet: String,
    ship_type: String,
    prod_date: DateTime<Utc>,
    is_used: bool,
    speed: f64,
    crew_size: i32,
    rating: f64,
}

impl ShipRow {
    /// Convert database row to domain Ship entity.
    fn into_ship(self) -> Result<Ship, AppError> {
        Ok(Ship {
            id: self.id,
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type.parse()?,
            prod_date: self.prod_date,
            is_used: self.is_used,
            speed: self.speed,
            crew_size: self.crew_size,
            rating: self.rating,
        })
    }
}

/// Renders a filter fragment as SQL.
pub trait PushSql {
    fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>);
}

impl PushSql for ShipPredicate {
    fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            // strpos keeps the match literal; LIKE would treat % and _ as wildcards
            ShipPredicate::NameContains(needle) => {
                builder.push("strpos(name, ");
                builder.push_bind(needle.clone());
                builder.push(") > 0");
            }
            ShipPredicate::PlanetContains(needle) => {
                builder.push("strpos(planet, ");
                builder.push_bind(needle.clone());
                builder.push(") > 0");
            }
            ShipPredicate::ShipTypeIs(ship_type) => {
                builder.push("ship_type = ");
                builder.push_bind(ship_type.as_str());
            }
            ShipPredicate::ProdDateWithin(bounds) => push_bounds(builder, "prod_date", bounds),
            ShipPredicate::UsedIs(is_used) => {
                builder.push("is_used = ");
                builder.push_bind(*is_used);
            }
            ShipPredicate::SpeedWithin(bounds) => push_bounds(builder, "speed", bounds),
            ShipPredicate::CrewSizeWithin(bounds) => push_bounds(builder, "crew_size", bounds),
            ShipPredicate::RatingWithin(bounds) => push_bounds(builder, "rating", bounds),
        }
    }
}

fn push_bounds<'args, T>(builder: &mut QueryBuilder<'args, Postgres>, column: &str, bounds: &Bounds<T>)
where
    T: PartialOrd + Copy + Send + 'args + sqlx::Encode<'args, Postgres> + sqlx::Type<Postgres>,
{
    match (bounds.min, bounds.max) {
        (Some(min), Some(max)) => {
            builder.push(column).push(" BETWEEN ");
            builder.push_bind(min);
            builder.push(" AND ");
            builder.push_bind(max);
        }
        (Some(min), None) => {
            builder.push(column).push(" >= ");
            builder.push_bind(min);
        }
        (None, Some(max)) => {
            builder.push(column).push(" <= ");
            builder.push_bind(max);
        }
        (None, None) => {
            builder.push("TRUE");
        }
    }
}

fn push_where(builder: &mut QueryBuilder<'_, Postgres>, filter: &ShipFilter) {
    for (i, predicate) in filter.predicates().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        predicate.push_sql(builder);
    }
}

fn order_column(order: ShipOrder) -> &'static str {
    match order {
        ShipOrder::Id => "id",
        // byte order, matching `str::cmp`
        ShipOrder::Name => r#"name COLLATE "C""#,
        ShipOrder::Date => "prod_date",
        ShipOrder::Speed => "speed",
        ShipOrder::Used => "is_used",
        ShipOrder::CrewSize => "crew_size",
        ShipOrder::Rating => "rating",
    }
}

/// Build the `SELECT` for a filtered, ordered and optionally paged listing.
fn select_query(filter: &ShipFilter, order: ShipOrder, page: Option<PageRequest>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {SHIP_COLUMNS} FROM ships"));
    push_where(&mut builder, filter);

    builder.push(" ORDER BY ");
    builder.push(order_column(order));
    if order != ShipOrder::Id {
        builder.push(", id");
    }

    if let Some(page) = page {
        builder.push(" LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset().unwrap_or(i64::MAX));
    }

    builder
}

/// PostgreSQL ship repository implementation.
#[derive(Clone)]
pub struct PgShipRepository {
    pool: PgPool,
}

impl PgShipRepository {
    /// Create a new PgShipRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShipRepository for PgShipRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, ShipRow>(&format!(
            "SELECT {SHIP_COLUMNS} FROM ships WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("select", "ships", started.elapsed().as_secs_f64());

        row.map(ShipRow::into_ship).transpose()
    }

    async fn find_all(
        &self,
        filter: &ShipFilter,
        order: ShipOrder,
        page: Option<PageRequest>,
    ) -> Result<Vec<Ship>, AppError> {
        let started = Instant::now();
        let mut query = select_query(filter, order, page);
        let rows = query
            .build_query_as::<ShipRow>()
            .fetch_all(&self.pool)
            .await?;
        metrics::record_db_query("select", "ships", started.elapsed().as_secs_f64());

        rows.into_iter().map(ShipRow::into_ship).collect()
    }

    async fn count(&self, filter: &ShipFilter) -> Result<i64, AppError> {
        let started = Instant::now();
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM ships");
        push_where(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        metrics::record_db_query("count", "ships", started.elapsed().as_secs_f64());

        Ok(count)
    }

    async fn create(&self, ship: &NewShip) -> Result<Ship, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, ShipRow>(&format!(
            r#"
            INSERT INTO ships (name, planet, ship_type, prod_date, is_used, speed, crew_size, rating)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {SHIP_COLUMNS}
            "#
        ))
        .bind(&ship.name)
        .bind(&ship.planet)
        .bind(ship.ship_type.as_str())
        .bind(ship.prod_date)
        .bind(ship.is_used)
        .bind(ship.speed)
        .bind(ship.crew_size)
        .bind(ship.rating)
        .fetch_one(&self.pool)
        .await?;
        metrics::record_db_query("insert", "ships", started.elapsed().as_secs_f64());

        row.into_ship()
    }

    async fn update(&self, ship: &Ship) -> Result<Ship, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, ShipRow>(&format!(
            r#"
            UPDATE ships
            SET name = $2,
                planet = $3,
                ship_type = $4,
                prod_date = $5,
                is_used = $6,
                speed = $7,
                crew_size = $8,
                rating = $9
            WHERE id = $1
            RETURNING {SHIP_COLUMNS}
            "#
        ))
        .bind(ship.id)
        .bind(&ship.name)
        .bind(&ship.planet)
        .bind(ship.ship_type.as_str())
        .bind(ship.prod_date)
        .bind(ship.is_used)
        .bind(ship.speed)
        .bind(ship.crew_size)
        .bind(ship.rating)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ship with id {} not found", ship.id)))?;
        metrics::record_db_query("update", "ships", started.elapsed().as_secs_f64());

        row.into_ship()
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let started = Instant::now();
        let result = sqlx::query("DELETE FROM ships WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        metrics::record_db_query("delete", "ships", started.elapsed().as_secs_f64());

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Ship with id {} not found", id)));
        }

        Ok(())
    }
}
