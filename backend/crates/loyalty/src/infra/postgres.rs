//! PostgreSQL Repository Implementations
//!
//! Each method opens its own transaction. Any early return drops `tx`,
//! which rolls the transaction back.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    analytic::{Analytic, AnalyticBucket},
    client::{Client, ClientPatch},
    event::{Event, EventPatch},
    merch::{Merch, MerchPatch},
    point::Point,
    stand::{Stand, StandPatch},
};
use crate::domain::repository::{
    AnalyticRepository, ClientRepository, EventRepository, MerchRepository, PointRepository,
    StandRepository,
};
use crate::domain::value_object::{
    client_password::ClientPassword,
    email::Email,
    ids::{AnalyticId, ClientId, EventId, MerchId, StandId},
};
use crate::error::LoyaltyResult;

/// PostgreSQL-backed loyalty repository
#[derive(Clone)]
pub struct PgLoyaltyRepository {
    pool: PgPool,
}

impl PgLoyaltyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ============================================================================
// Client Repository Implementation
// ============================================================================

impl ClientRepository for PgLoyaltyRepository {
    async fn create(&self, client: &Client) -> LoyaltyResult<Client> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            INSERT INTO clients (id, name, surname, email, password_hash, image_url, tg_username)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, surname, email, password_hash, image_url, tg_username
            "#,
        )
        .bind(client.client_id.as_uuid())
        .bind(&client.name)
        .bind(&client.surname)
        .bind(client.email.as_str())
        .bind(client.password.as_phc_string())
        .bind(&client.image_url)
        .bind(&client.tg_username)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.into_client())
    }

    async fn find_by_id(&self, client_id: &ClientId) -> LoyaltyResult<Option<Client>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, surname, email, password_hash, image_url, tg_username
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(client_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.map(ClientRow::into_client))
    }

    async fn find_by_email(&self, email: &Email) -> LoyaltyResult<Option<Client>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, surname, email, password_hash, image_url, tg_username
            FROM clients
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.map(ClientRow::into_client))
    }

    async fn update(
        &self,
        client_id: &ClientId,
        patch: ClientPatch,
    ) -> LoyaltyResult<Option<Client>> {
        let mut tx = self.pool.begin().await?;

        let Some(current) = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, surname, email, password_hash, image_url, tg_username
            FROM clients
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(client_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        let mut client = current.into_client();
        client.apply(patch);

        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            UPDATE clients SET
                name = $2,
                surname = $3,
                image_url = $4,
                tg_username = $5,
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, surname, email, password_hash, image_url, tg_username
            "#,
        )
        .bind(client.client_id.as_uuid())
        .bind(&client.name)
        .bind(&client.surname)
        .bind(&client.image_url)
        .bind(&client.tg_username)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(row.into_client()))
    }

    async fn delete(&self, client_id: &ClientId) -> LoyaltyResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(client_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Stand Repository Implementation
// ============================================================================

impl StandRepository for PgLoyaltyRepository {
    async fn create(&self, stand: &Stand) -> LoyaltyResult<Stand> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, StandRow>(
            r#"
            INSERT INTO stands (id, name, info, location, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, info, location, image_url
            "#,
        )
        .bind(stand.stand_id.as_uuid())
        .bind(&stand.name)
        .bind(&stand.info)
        .bind(&stand.location)
        .bind(&stand.image_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.into_stand())
    }

    async fn find_by_id(&self, stand_id: &StandId) -> LoyaltyResult<Option<Stand>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, StandRow>(
            "SELECT id, name, info, location, image_url FROM stands WHERE id = $1",
        )
        .bind(stand_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.map(StandRow::into_stand))
    }

    async fn list(&self) -> LoyaltyResult<Vec<Stand>> {
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query_as::<_, StandRow>(
            "SELECT id, name, info, location, image_url FROM stands ORDER BY name, id",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(rows.into_iter().map(StandRow::into_stand).collect())
    }

    async fn update(&self, stand_id: &StandId, patch: StandPatch) -> LoyaltyResult<Option<Stand>> {
        let mut tx = self.pool.begin().await?;

        let Some(current) = sqlx::query_as::<_, StandRow>(
            "SELECT id, name, info, location, image_url FROM stands WHERE id = $1 FOR UPDATE",
        )
        .bind(stand_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        let mut stand = current.into_stand();
        stand.apply(patch);

        let row = sqlx::query_as::<_, StandRow>(
            r#"
            UPDATE stands SET
                name = $2,
                info = $3,
                location = $4,
                image_url = $5
            WHERE id = $1
            RETURNING id, name, info, location, image_url
            "#,
        )
        .bind(stand.stand_id.as_uuid())
        .bind(&stand.name)
        .bind(&stand.info)
        .bind(&stand.location)
        .bind(&stand.image_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(row.into_stand()))
    }

    async fn delete(&self, stand_id: &StandId) -> LoyaltyResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM stands WHERE id = $1")
            .bind(stand_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Event Repository Implementation
// ============================================================================

impl EventRepository for PgLoyaltyRepository {
    async fn create(&self, event: &Event) -> LoyaltyResult<Event> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (id, name, info, image_url, points, stand_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, info, image_url, points, stand_id
            "#,
        )
        .bind(event.event_id.as_uuid())
        .bind(&event.name)
        .bind(&event.info)
        .bind(&event.image_url)
        .bind(event.points)
        .bind(event.stand_id.map(StandId::into_uuid))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.into_event())
    }

    async fn find_by_id(&self, event_id: &EventId) -> LoyaltyResult<Option<Event>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, EventRow>(
            "SELECT id, name, info, image_url, points, stand_id FROM events WHERE id = $1",
        )
        .bind(event_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.map(EventRow::into_event))
    }

    async fn list(&self) -> LoyaltyResult<Vec<Event>> {
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, name, info, image_url, points, stand_id FROM events ORDER BY name, id",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(rows.into_iter().map(EventRow::into_event).collect())
    }

    async fn update(&self, event_id: &EventId, patch: EventPatch) -> LoyaltyResult<Option<Event>> {
        let mut tx = self.pool.begin().await?;

        let Some(current) = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, info, image_url, points, stand_id
            FROM events
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(event_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        let mut event = current.into_event();
        event.apply(patch);

        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE events SET
                name = $2,
                info = $3,
                image_url = $4,
                points = $5,
                stand_id = $6
            WHERE id = $1
            RETURNING id, name, info, image_url, points, stand_id
            "#,
        )
        .bind(event.event_id.as_uuid())
        .bind(&event.name)
        .bind(&event.info)
        .bind(&event.image_url)
        .bind(event.points)
        .bind(event.stand_id.map(StandId::into_uuid))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(row.into_event()))
    }

    async fn delete(&self, event_id: &EventId) -> LoyaltyResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(event_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Merch Repository Implementation
// ============================================================================

impl MerchRepository for PgLoyaltyRepository {
    async fn create(&self, merch: &Merch) -> LoyaltyResult<Merch> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, MerchRow>(
            r#"
            INSERT INTO merch (id, name, info, image_url, points_needed)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, info, image_url, points_needed
            "#,
        )
        .bind(merch.merch_id.as_uuid())
        .bind(&merch.name)
        .bind(&merch.info)
        .bind(&merch.image_url)
        .bind(merch.points_needed)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.into_merch())
    }

    async fn find_by_id(&self, merch_id: &MerchId) -> LoyaltyResult<Option<Merch>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, MerchRow>(
            "SELECT id, name, info, image_url, points_needed FROM merch WHERE id = $1",
        )
        .bind(merch_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.map(MerchRow::into_merch))
    }

    async fn list(&self) -> LoyaltyResult<Vec<Merch>> {
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query_as::<_, MerchRow>(
            "SELECT id, name, info, image_url, points_needed FROM merch ORDER BY name, id",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(rows.into_iter().map(MerchRow::into_merch).collect())
    }

    async fn update(&self, merch_id: &MerchId, patch: MerchPatch) -> LoyaltyResult<Option<Merch>> {
        let mut tx = self.pool.begin().await?;

        let Some(current) = sqlx::query_as::<_, MerchRow>(
            r#"
            SELECT id, name, info, image_url, points_needed
            FROM merch
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(merch_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        let mut merch = current.into_merch();
        merch.apply(patch);

        let row = sqlx::query_as::<_, MerchRow>(
            r#"
            UPDATE merch SET
                name = $2,
                info = $3,
                image_url = $4,
                points_needed = $5
            WHERE id = $1
            RETURNING id, name, info, image_url, points_needed
            "#,
        )
        .bind(merch.merch_id.as_uuid())
        .bind(&merch.name)
        .bind(&merch.info)
        .bind(&merch.image_url)
        .bind(merch.points_needed)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(row.into_merch()))
    }

    async fn delete(&self, merch_id: &MerchId) -> LoyaltyResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM merch WHERE id = $1")
            .bind(merch_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Point Repository Implementation
// ============================================================================

impl PointRepository for PgLoyaltyRepository {
    async fn upsert(&self, point: &Point) -> LoyaltyResult<Point> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PointRow>(
            r#"
            INSERT INTO points (user_id, total_points)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET
                total_points = EXCLUDED.total_points,
                updated_at = now()
            RETURNING user_id, total_points
            "#,
        )
        .bind(point.client_id.as_uuid())
        .bind(point.total_points)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.into_point())
    }

    async fn find_by_client_id(&self, client_id: &ClientId) -> LoyaltyResult<Option<Point>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PointRow>(
            "SELECT user_id, total_points FROM points WHERE user_id = $1",
        )
        .bind(client_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.map(PointRow::into_point))
    }
}

// ============================================================================
// Analytic Repository Implementation
// ============================================================================

impl AnalyticRepository for PgLoyaltyRepository {
    async fn create(&self, analytic: &Analytic) -> LoyaltyResult<Analytic> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, AnalyticRow>(
            r#"
            INSERT INTO analytics (id, user_id, stand_id, visited_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, stand_id, visited_at
            "#,
        )
        .bind(analytic.analytic_id.as_uuid())
        .bind(analytic.client_id.map(ClientId::into_uuid))
        .bind(analytic.stand_id.map(StandId::into_uuid))
        .bind(analytic.visited_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.into_analytic())
    }

    async fn grouped(&self) -> LoyaltyResult<Vec<AnalyticBucket>> {
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query_as::<_, AnalyticBucketRow>(
            r#"
            SELECT
                (visited_at AT TIME ZONE 'UTC')::date AS date,
                EXTRACT(HOUR FROM visited_at AT TIME ZONE 'UTC')::int AS hour,
                COUNT(*) AS count
            FROM analytics
            GROUP BY 1, 2
            ORDER BY 1, 2
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(rows
            .into_iter()
            .map(|r| AnalyticBucket {
                date: r.date,
                hour: r.hour,
                count: r.count,
            })
            .collect())
    }
}

// ============================================================================
// Database Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ClientRow {
    id: Uuid,
    name: String,
    surname: String,
    email: String,
    password_hash: String,
    image_url: String,
    tg_username: Option<String>,
}

impl ClientRow {
    fn into_client(self) -> Client {
        Client {
            client_id: ClientId::from_uuid(self.id),
            name: self.name,
            surname: self.surname,
            email: Email::from_db(self.email),
            password: ClientPassword::from_db(self.password_hash),
            image_url: self.image_url,
            tg_username: self.tg_username,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StandRow {
    id: Uuid,
    name: String,
    info: String,
    location: String,
    image_url: String,
}

impl StandRow {
    fn into_stand(self) -> Stand {
        Stand {
            stand_id: StandId::from_uuid(self.id),
            name: self.name,
            info: self.info,
            location: self.location,
            image_url: self.image_url,
        }
    }
}

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    name: String,
    info: String,
    image_url: String,
    points: i32,
    stand_id: Option<Uuid>,
}

impl EventRow {
    fn into_event(self) -> Event {
        Event {
            event_id: EventId::from_uuid(self.id),
            name: self.name,
            info: self.info,
            image_url: self.image_url,
            points: self.points,
            stand_id: self.stand_id.map(StandId::from_uuid),
        }
    }
}

#[derive(sqlx::FromRow)]
struct MerchRow {
    id: Uuid,
    name: String,
    info: String,
    image_url: String,
    points_needed: i32,
}

impl MerchRow {
    fn into_merch(self) -> Merch {
        Merch {
            merch_id: MerchId::from_uuid(self.id),
            name: self.name,
            info: self.info,
            image_url: self.image_url,
            points_needed: self.points_needed,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PointRow {
    user_id: Uuid,
    total_points: i32,
}

impl PointRow {
    fn into_point(self) -> Point {
        Point::new(ClientId::from_uuid(self.user_id), self.total_points)
    }
}

#[derive(sqlx::FromRow)]
struct AnalyticRow {
    id: Uuid,
    user_id: Option<Uuid>,
    stand_id: Option<Uuid>,
    visited_at: DateTime<Utc>,
}

impl AnalyticRow {
    fn into_analytic(self) -> Analytic {
        Analytic {
            analytic_id: AnalyticId::from_uuid(self.id),
            client_id: self.user_id.map(ClientId::from_uuid),
            stand_id: self.stand_id.map(StandId::from_uuid),
            visited_at: self.visited_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AnalyticBucketRow {
    date: NaiveDate,
    hour: i32,
    count: i64,
}
