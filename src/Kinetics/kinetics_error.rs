use crate::Kinetics::rate_laws::RateLawKind;
use thiserror::Error;

/// error types for building rate laws, rate managers and reaction mechanisms.
/// Every variant is raised while a mixture is being assembled; nothing inside
/// `RateManager::update` or `ThirdbodyManager::multiply_thirdbodies` can fail.
#[derive(Debug, Error)]
pub enum KineticsError {
    #[error("Unknown unit '{unit}' in unit string '{units}'")]
    UnknownUnit { unit: String, units: String },
    #[error("Unit string '{0}' has the wrong number of components")]
    MalformedUnits(String),
    #[error("Unknown rate law '{0}'")]
    UnknownRateLaw(String),
    #[error("Missing coefficient '{coefficient}' for rate law {kind}")]
    MissingCoefficient {
        kind: RateLawKind,
        coefficient: &'static str,
    },
    #[error("Invalid value {value} for coefficient '{coefficient}' of rate law {kind}")]
    InvalidCoefficient {
        kind: RateLawKind,
        coefficient: &'static str,
        value: f64,
    },
    #[error("Rate law {0} accepts either 'Ea' or 'T', not both")]
    ConflictingActivation(RateLawKind),
    #[error("Rate law {kind} of reaction {reaction} is not implemented in RateManager")]
    UnsupportedRateLaw { reaction: usize, kind: RateLawKind },
    #[error("Reaction {reaction} refers to species {species} but the mixture has {n_species} species")]
    InvalidSpeciesIndex {
        reaction: usize,
        species: usize,
        n_species: usize,
    },
    #[error("Reaction {reaction} refers to species group {group} but the mixture has {n_sgroups} groups")]
    InvalidGroupIndex {
        reaction: usize,
        group: usize,
        n_sgroups: usize,
    },
    #[error("Could not find fitted source data for transition '{0}'")]
    MissingTransferData(String),
    #[error("Unknown transfer model '{0}'")]
    UnknownTransferModel(String),
    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),
    #[error("Failed to initialize logger: {0}")]
    LoggerError(#[from] log::SetLoggerError),
    #[error("Failed to deserialize kinetics data: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
