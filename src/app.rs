use crate::models::{RideRequest, SubmitOutcome};
use crate::services::RideApi;
use crate::ui;
use crate::utils::{validate_ride_request, AppError};

/// In-memory form state for a ride posting. Cleared only after the
/// server accepts the submission, so a failed attempt can be retried
/// without retyping.
#[derive(Debug, Default, Clone)]
pub struct RideForm {
    pub name: String,
    pub location: String,
    pub destination: String,
    pub contact: String,
    pub passengers: Option<u32>,
}

impl RideForm {
    pub fn to_request(&self) -> RideRequest {
        RideRequest {
            name: self.name.clone(),
            location: self.location.clone(),
            destination: self.destination.clone(),
            contact: self.contact.clone(),
            passengers: self.passengers,
        }
    }

    pub fn clear(&mut self) {
        *self = RideForm::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.location.is_empty()
            && self.destination.is_empty()
            && self.contact.is_empty()
            && self.passengers.is_none()
    }
}

/// Result of the submit gesture, already folded down for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Server accepted the ride; carries the success message and the
    /// freshly reloaded listing view.
    Accepted { message: String, groups_view: String },
    /// Validation, transport or server rejection; the form was left as-is
    Rejected { reason: String },
}

/// Loads the group listing and renders it to a complete view.
///
/// This is the only producer of listing content. Any failure yields the
/// error view instead, so content and error are mutually exclusive.
pub async fn load_groups(api: &dyn RideApi) -> String {
    match api.fetch_groups().await {
        Ok(groups) => ui::render_groups(&groups),
        Err(err) => {
            log::error!("Failed to load groups: {}", err);
            ui::render_error(&err.to_string())
        }
    }
}

/// The submit gesture: validate, post, and on acceptance clear the form
/// and reload the listing exactly once.
pub async fn submit_ride(form: &mut RideForm, api: &dyn RideApi) -> SubmitAction {
    let request = form.to_request();

    if let Err(err) = validate_ride_request(&request) {
        return SubmitAction::Rejected {
            reason: err.to_string(),
        };
    }

    match api.submit_ride(&request).await {
        Ok(SubmitOutcome::Accepted { message }) => {
            form.clear();
            let groups_view = load_groups(api).await;
            SubmitAction::Accepted {
                message,
                groups_view,
            }
        }
        Ok(SubmitOutcome::Rejected { reason }) => SubmitAction::Rejected { reason },
        Err(err) => SubmitAction::Rejected {
            reason: err.to_string(),
        },
    }
}

/// Join an existing ride group by id
pub async fn join_ride(api: &dyn RideApi, ride_id: i64) -> Result<String, AppError> {
    let response = api.join_ride(ride_id).await?;
    if response.success {
        Ok(response.message)
    } else {
        Err(AppError::Api(response.message))
    }
}

/// Cancel a booking by id
pub async fn cancel_booking(api: &dyn RideApi, booking_id: i64) -> Result<String, AppError> {
    let response = api.cancel_booking(booking_id).await?;
    if response.success {
        Ok(response.message)
    } else {
        Err(AppError::Api(response.message))
    }
}
