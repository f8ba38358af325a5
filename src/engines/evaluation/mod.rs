pub mod features;
pub mod fitness;
pub mod printability;
pub mod validator;

pub use features::{analyze_feature_sizes, FeatureAnalysis, RunFeature, TrackFeatures};
pub use fitness::{FitnessBreakdown, FitnessEvaluator};
pub use printability::{analyze, PrintabilityReport, PrinterConstraints};
pub use validator::{validate, ValidationReport};
