//! Tracking data returned by a provider.
//!
//! A [`TrackingData`] is the successful half of a provider reply: the shipment
//! number, the provider that answered, an optional destination and the recorded
//! history of the package as a list of [`TrackingStep`]s.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One waypoint in a shipment's recorded history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingStep {
    pub datetime: NaiveDateTime,
    pub message: String,
    /// Empty when the provider did not report a location.
    #[serde(default)]
    pub location: String,
}

impl TrackingStep {
    /// Creates a step without a location.
    pub fn new(datetime: NaiveDateTime, message: impl Into<String>) -> Self {
        Self {
            datetime,
            message: message.into(),
            location: String::new(),
        }
    }

    /// Attaches a location label to the step.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// Everything a provider knows about one shipment.
///
/// # Ordering
/// `tracking_steps` is chronological as supplied by the provider. The last
/// element is the most recent known state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingData {
    pub shipment_number: String,
    pub provider_name: String,
    /// Empty when unknown.
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub tracking_steps: Vec<TrackingStep>,
}

impl TrackingData {
    pub fn new(shipment_number: impl Into<String>, provider_name: impl Into<String>) -> Self {
        Self {
            shipment_number: shipment_number.into(),
            provider_name: provider_name.into(),
            destination: String::new(),
            tracking_steps: Vec::new(),
        }
    }

    pub fn with_steps(mut self, steps: Vec<TrackingStep>) -> Self {
        self.tracking_steps = steps;
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// The most recent step, if any.
    pub fn latest_step(&self) -> Option<&TrackingStep> {
        self.tracking_steps.last()
    }
}
