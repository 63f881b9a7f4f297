use rsvp_shared::error::ValidationError;
use rsvp_shared::form::GuestForm;
use rsvp_shared::models::{NewGuest, NewIntention};
use serde::Deserialize;

// Request DTOs
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmAttendanceRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub has_companions: bool,
    #[serde(default)]
    pub companions: Option<Vec<String>>,
}

impl ConfirmAttendanceRequest {
    /// Runs the submitted fields through the same checks as the form.
    pub fn into_new_guest(self) -> Result<NewGuest, ValidationError> {
        let form = GuestForm {
            name: self.name,
            has_companions: self.has_companions,
            companions: self.companions.unwrap_or_default(),
        };
        form.submit()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecordIntentionRequest {
    #[serde(default)]
    pub name: String,
    pub will_attend: bool,
}

impl RecordIntentionRequest {
    pub fn into_new_intention(self) -> Result<NewIntention, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankName);
        }

        Ok(NewIntention {
            name: name.to_string(),
            will_attend: self.will_attend,
        })
    }
}
