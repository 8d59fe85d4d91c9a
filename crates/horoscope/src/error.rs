use thiserror::Error;

/// Errors surfaced by chart computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A formula was evaluated at a point where it is undefined.
    #[error("{quantity} is undefined for {input} = {value}°: {message}")]
    Domain {
        quantity: &'static str,
        input: &'static str,
        value: f64,
        message: String,
    },
    /// A longitude fell outside every sign or house interval.
    #[error("Cannot classify longitude {longitude}° into a {target}")]
    Classification { longitude: f64, target: &'static str },
    #[error("Invalid location: latitude {lat}, longitude {lon}. {message}")]
    InvalidLocation { lat: f64, lon: f64, message: String },
    #[error("Location not found: {name}")]
    LocationNotFound { name: String },
    #[error("No ephemeris position for {body}: {message}")]
    EphemerisUnavailable { body: String, message: String },
}
