use async_trait::async_trait;
use std::time::Duration;

use crate::config::Config;
use crate::models::{ActionResponse, Groups, JoinRequest, RideRequest, SubmitOutcome, SubmitResponse};
use crate::utils::AppError;

/// Transport seam for the ride-share API. The application actions only
/// ever talk to this trait, so tests can script responses without a
/// running backend.
#[async_trait]
pub trait RideApi: Send + Sync {
    /// POST /submit - create a ride
    async fn submit_ride(&self, request: &RideRequest) -> Result<SubmitOutcome, AppError>;

    /// GET /groups - riders grouped by destination
    async fn fetch_groups(&self) -> Result<Groups, AppError>;

    /// POST /join - join an existing ride group
    async fn join_ride(&self, ride_id: i64) -> Result<ActionResponse, AppError>;

    /// POST /cancel_booking/{id} - cancel a booking
    async fn cancel_booking(&self, booking_id: i64) -> Result<ActionResponse, AppError>;
}

/// reqwest-backed implementation against a configurable base URL
pub struct HttpRideApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRideApi {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        // Bounded wait: a request still pending after the timeout is
        // abandoned client-side and treated as a transport failure.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(HttpRideApi {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl RideApi for HttpRideApi {
    async fn submit_ride(&self, request: &RideRequest) -> Result<SubmitOutcome, AppError> {
        log::info!("🚗 Posting ride to {} -> {}", request.location, request.destination);

        let response = self
            .client
            .post(self.endpoint("/submit"))
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await
            .map_err(AppError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(AppError::Api(format!("Submit failed: {}", response.status())));
        }

        let body: SubmitResponse = response
            .json()
            .await
            .map_err(|e| AppError::UnexpectedResponse(format!("Failed to parse submit response: {}", e)))?;

        Ok(SubmitOutcome::classify(body))
    }

    async fn fetch_groups(&self) -> Result<Groups, AppError> {
        log::info!("📋 Fetching ride groups from {}", self.base_url);

        let response = self
            .client
            .get(self.endpoint("/groups"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(AppError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(AppError::Api(format!("Groups request failed: {}", response.status())));
        }

        let groups: Groups = response
            .json()
            .await
            .map_err(|e| AppError::UnexpectedResponse(format!("Failed to parse groups: {}", e)))?;

        log::info!("✅ Retrieved {} destination group(s)", groups.len());

        Ok(groups)
    }

    async fn join_ride(&self, ride_id: i64) -> Result<ActionResponse, AppError> {
        log::info!("🤝 Joining ride {}", ride_id);

        let response = self
            .client
            .post(self.endpoint("/join"))
            .header("Accept", "application/json")
            .json(&JoinRequest { ride_id })
            .send()
            .await
            .map_err(AppError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(AppError::Api(format!("Join failed: {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::UnexpectedResponse(format!("Failed to parse join response: {}", e)))
    }

    async fn cancel_booking(&self, booking_id: i64) -> Result<ActionResponse, AppError> {
        log::info!("❌ Cancelling booking {}", booking_id);

        let response = self
            .client
            .post(self.endpoint(&format!("/cancel_booking/{}", booking_id)))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(AppError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(AppError::Api(format!("Cancel failed: {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::UnexpectedResponse(format!("Failed to parse cancel response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpRideApi {
        let config = Config {
            base_url: crate::config::normalize_base_url(base),
            timeout_secs: 1,
        };
        HttpRideApi::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joining() {
        let api = api("http://localhost:5000");
        assert_eq!(api.endpoint("/groups"), "http://localhost:5000/groups");
        assert_eq!(api.endpoint("/cancel_booking/3"), "http://localhost:5000/cancel_booking/3");
    }

    #[test]
    fn test_endpoint_joining_with_trailing_slash_base() {
        let api = api("http://localhost:5000/");
        assert_eq!(api.endpoint("/submit"), "http://localhost:5000/submit");
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_transport_error() {
        // Reserved TEST-NET-1 address, nothing listens there
        let api = api("http://192.0.2.1:9");
        let err = api.fetch_groups().await.unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }
}
