use crate::models::RideRequest;
use crate::utils::AppError;

const NAME_MIN_LEN: usize = 2;
const CONTACT_MIN_DIGITS: usize = 10;
const CONTACT_MAX_DIGITS: usize = 15;
const MAX_PASSENGERS: u32 = 8;

/// Advisory client-side checks, mirrored from the booking form. The
/// server remains the authority; a request that fails here is simply
/// never sent.
pub fn validate_ride_request(request: &RideRequest) -> Result<(), AppError> {
    let mut problems = Vec::new();

    if request.name.trim().chars().count() < NAME_MIN_LEN {
        problems.push(format!("Name must be at least {} characters", NAME_MIN_LEN));
    }

    if request.location.trim().is_empty() {
        problems.push("Location must not be empty".to_string());
    }

    if request.destination.trim().is_empty() {
        problems.push("Destination must not be empty".to_string());
    }

    if !is_valid_contact(&request.contact) {
        problems.push(format!(
            "Contact must be a phone number of {}-{} digits",
            CONTACT_MIN_DIGITS, CONTACT_MAX_DIGITS
        ));
    }

    if let Some(passengers) = request.passengers {
        if passengers < 1 || passengers > MAX_PASSENGERS {
            problems.push(format!(
                "Number of passengers must be between 1 and {}",
                MAX_PASSENGERS
            ));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidRequest(problems.join(", ")))
    }
}

fn is_valid_contact(contact: &str) -> bool {
    let trimmed = contact.trim();
    (CONTACT_MIN_DIGITS..=CONTACT_MAX_DIGITS).contains(&trimmed.len())
        && trimmed.chars().all(|c| c.is_ascii_digit())
}
