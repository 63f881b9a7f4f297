use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use log::{debug, info};
use rsvp_shared::store::RsvpStore;
use rsvp_shared::summary::ConfirmedSummary;
use std::sync::Arc;

use crate::error::Result;
use crate::models::ConfirmAttendanceRequest;

// POST /guests
pub async fn confirm_attendance<S>(
    State(store): State<Arc<S>>,
    payload: std::result::Result<Json<ConfirmAttendanceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>)>
where
    S: RsvpStore,
{
    let Json(payload) = payload?;
    let new_guest = payload.into_new_guest()?;
    debug!(
        "Confirming attendance, has_companions={}",
        new_guest.has_companions
    );

    let id = store.add_guest(new_guest).await?;

    info!("Attendance confirmed, guest id={}", id);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": id,
            "message": "Attendance confirmed"
        })),
    ))
}

// GET /guests
pub async fn get_guests<S>(State(store): State<Arc<S>>) -> Result<Json<ConfirmedSummary>>
where
    S: RsvpStore,
{
    let guests = store.get_guests().await?;
    let summary = ConfirmedSummary::from_guests(guests);

    debug!(
        "Loaded {} confirmations, {} people in total",
        summary.confirmations, summary.total_people
    );

    Ok(Json(summary))
}
