use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use log::{debug, info};
use rsvp_shared::store::RsvpStore;
use rsvp_shared::summary::DeclinedSummary;
use std::sync::Arc;

use crate::error::Result;
use crate::models::RecordIntentionRequest;

// POST /intentions
pub async fn record_intention<S>(
    State(store): State<Arc<S>>,
    payload: std::result::Result<Json<RecordIntentionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>)>
where
    S: RsvpStore,
{
    let Json(payload) = payload?;
    let intention = payload.into_new_intention()?;
    let will_attend = intention.will_attend;

    let id = store.add_intention(intention).await?;

    info!("Intention recorded, id={}, will_attend={}", id, will_attend);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": id,
            "message": "Answer recorded"
        })),
    ))
}

// GET /intentions
pub async fn get_intentions<S>(State(store): State<Arc<S>>) -> Result<Json<serde_json::Value>>
where
    S: RsvpStore,
{
    let intentions = store.get_intentions().await?;
    debug!("Loaded {} intentions", intentions.len());

    Ok(Json(serde_json::json!({ "intentions": intentions })))
}

// GET /intentions/declined
pub async fn get_declined<S>(State(store): State<Arc<S>>) -> Result<Json<DeclinedSummary>>
where
    S: RsvpStore,
{
    let intentions = store.get_intentions().await?;
    let summary = DeclinedSummary::from_intentions(&intentions);

    debug!("{} of {} intentions are declines", summary.count, intentions.len());

    Ok(Json(summary))
}
