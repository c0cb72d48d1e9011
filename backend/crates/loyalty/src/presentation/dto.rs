//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire. Requests are checked here,
//! before any use case runs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{SignInInput, SignUpInput};
use crate::domain::entity::{
    analytic::{Analytic, AnalyticBucket},
    client::{Client, ClientPatch},
    event::{Event, EventPatch, NewEvent},
    merch::{Merch, MerchPatch, NewMerch},
    point::Point,
    stand::{NewStand, Stand, StandPatch},
};
use crate::domain::value_object::ids::StandId;
use crate::error::{LoyaltyError, LoyaltyResult};

fn not_blank(field: &str, value: String) -> LoyaltyResult<String> {
    if value.trim().is_empty() {
        return Err(LoyaltyError::Validation(format!("{field} must not be blank")));
    }
    Ok(value)
}

fn maybe_not_blank(field: &str, value: Option<String>) -> LoyaltyResult<Option<String>> {
    value.map(|v| not_blank(field, v)).transpose()
}

fn non_negative(field: &str, value: i32) -> LoyaltyResult<i32> {
    if value < 0 {
        return Err(LoyaltyError::Validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(value)
}

// ============================================================================
// Clients
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub image_url: String,
    pub tg_username: Option<String>,
}

impl SignUpRequest {
    pub fn into_input(self) -> LoyaltyResult<SignUpInput> {
        Ok(SignUpInput {
            name: not_blank("name", self.name)?,
            surname: not_blank("surname", self.surname)?,
            email: self.email,
            password: self.password,
            image_url: not_blank("image_url", self.image_url)?,
            tg_username: maybe_not_blank("tg_username", self.tg_username)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl From<SignInRequest> for SignInInput {
    fn from(req: SignInRequest) -> Self {
        SignInInput {
            email: req.email,
            password: req.password,
        }
    }
}

/// Sign-up and sign-in response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub id: Uuid,
    /// Bearer token for `/clients/{id}`
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub image_url: Option<String>,
    pub tg_username: Option<String>,
}

impl UpdateClientRequest {
    pub fn into_patch(self) -> LoyaltyResult<ClientPatch> {
        Ok(ClientPatch {
            name: maybe_not_blank("name", self.name)?,
            surname: maybe_not_blank("surname", self.surname)?,
            image_url: maybe_not_blank("image_url", self.image_url)?,
            tg_username: maybe_not_blank("tg_username", self.tg_username)?,
        })
    }
}

/// Client as returned to its owner. The password digest never leaves the
/// server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub image_url: String,
    pub tg_username: Option<String>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.client_id.into_uuid(),
            name: client.name,
            surname: client.surname,
            email: client.email.into_db(),
            image_url: client.image_url,
            tg_username: client.tg_username,
        }
    }
}

// ============================================================================
// Stands
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStandRequest {
    pub name: String,
    pub info: String,
    pub location: String,
    pub image_url: String,
}

impl CreateStandRequest {
    pub fn into_new_stand(self) -> LoyaltyResult<NewStand> {
        Ok(NewStand {
            name: not_blank("name", self.name)?,
            info: self.info,
            location: not_blank("location", self.location)?,
            image_url: self.image_url,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStandRequest {
    pub name: Option<String>,
    pub info: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateStandRequest {
    pub fn into_patch(self) -> LoyaltyResult<StandPatch> {
        Ok(StandPatch {
            name: maybe_not_blank("name", self.name)?,
            info: self.info,
            location: maybe_not_blank("location", self.location)?,
            image_url: self.image_url,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandResponse {
    pub id: Uuid,
    pub name: String,
    pub info: String,
    pub location: String,
    pub image_url: String,
}

impl From<Stand> for StandResponse {
    fn from(stand: Stand) -> Self {
        Self {
            id: stand.stand_id.into_uuid(),
            name: stand.name,
            info: stand.info,
            location: stand.location,
            image_url: stand.image_url,
        }
    }
}

// ============================================================================
// Events
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub info: String,
    pub image_url: String,
    pub points: i32,
    pub stand_id: Option<Uuid>,
}

impl CreateEventRequest {
    pub fn into_new_event(self) -> LoyaltyResult<NewEvent> {
        Ok(NewEvent {
            name: not_blank("name", self.name)?,
            info: self.info,
            image_url: self.image_url,
            points: non_negative("points", self.points)?,
            stand_id: self.stand_id.map(StandId::from_uuid),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub info: Option<String>,
    pub image_url: Option<String>,
    pub points: Option<i32>,
    pub stand_id: Option<Uuid>,
}

impl UpdateEventRequest {
    pub fn into_patch(self) -> LoyaltyResult<EventPatch> {
        Ok(EventPatch {
            name: maybe_not_blank("name", self.name)?,
            info: self.info,
            image_url: self.image_url,
            points: self.points.map(|p| non_negative("points", p)).transpose()?,
            stand_id: self.stand_id.map(StandId::from_uuid),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub name: String,
    pub info: String,
    pub image_url: String,
    pub points: i32,
    pub stand_id: Option<Uuid>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.event_id.into_uuid(),
            name: event.name,
            info: event.info,
            image_url: event.image_url,
            points: event.points,
            stand_id: event.stand_id.map(StandId::into_uuid),
        }
    }
}

// ============================================================================
// Merch
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMerchRequest {
    pub name: String,
    pub info: String,
    pub image_url: String,
    pub points_needed: i32,
}

impl CreateMerchRequest {
    pub fn into_new_merch(self) -> LoyaltyResult<NewMerch> {
        Ok(NewMerch {
            name: not_blank("name", self.name)?,
            info: self.info,
            image_url: self.image_url,
            points_needed: non_negative("points_needed", self.points_needed)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMerchRequest {
    pub name: Option<String>,
    pub info: Option<String>,
    pub image_url: Option<String>,
    pub points_needed: Option<i32>,
}

impl UpdateMerchRequest {
    pub fn into_patch(self) -> LoyaltyResult<MerchPatch> {
        Ok(MerchPatch {
            name: maybe_not_blank("name", self.name)?,
            info: self.info,
            image_url: self.image_url,
            points_needed: self
                .points_needed
                .map(|p| non_negative("points_needed", p))
                .transpose()?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchResponse {
    pub id: Uuid,
    pub name: String,
    pub info: String,
    pub image_url: String,
    pub points_needed: i32,
}

impl From<Merch> for MerchResponse {
    fn from(merch: Merch) -> Self {
        Self {
            id: merch.merch_id.into_uuid(),
            name: merch.name,
            info: merch.info,
            image_url: merch.image_url,
            points_needed: merch.points_needed,
        }
    }
}

// ============================================================================
// Points
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPointsRequest {
    pub user_id: Uuid,
    /// New balance, replacing the old one
    pub points: i32,
}

impl UpsertPointsRequest {
    pub fn validated_points(&self) -> LoyaltyResult<i32> {
        non_negative("points", self.points)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointResponse {
    pub user_id: Uuid,
    pub total_points: i32,
}

impl From<Point> for PointResponse {
    fn from(point: Point) -> Self {
        Self {
            user_id: point.client_id.into_uuid(),
            total_points: point.total_points,
        }
    }
}

// ============================================================================
// Analytics
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnalyticRequest {
    pub user_id: Option<Uuid>,
    pub stand_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticResponse {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub stand_id: Option<Uuid>,
    pub time: DateTime<Utc>,
}

impl From<Analytic> for AnalyticResponse {
    fn from(analytic: Analytic) -> Self {
        Self {
            id: analytic.analytic_id.into_uuid(),
            user_id: analytic.client_id.map(|id| id.into_uuid()),
            stand_id: analytic.stand_id.map(StandId::into_uuid),
            time: analytic.visited_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticGroupedResponse {
    pub date: NaiveDate,
    pub hour: i32,
    pub count: i64,
}

impl From<AnalyticBucket> for AnalyticGroupedResponse {
    fn from(bucket: AnalyticBucket) -> Self {
        Self {
            date: bucket.date,
            hour: bucket.hour,
            count: bucket.count,
        }
    }
}
