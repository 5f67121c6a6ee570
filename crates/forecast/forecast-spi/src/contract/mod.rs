//! Contract module containing trait definitions for forecast operations

mod reliability_classifier;
mod trend_fitter;
mod uncertainty_estimator;

pub use reliability_classifier::ReliabilityClassifier;
pub use trend_fitter::TrendFitter;
pub use uncertainty_estimator::UncertaintyEstimator;
