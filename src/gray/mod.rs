pub mod analyzer;
pub mod converter;

pub use analyzer::{
    analyze_runs, analyze_transitions, validate_encoder_pattern, PatternReport, Run,
    TransitionStats,
};
pub use converter::{
    binary_to_gray, encoding_efficiency, extract_track_pattern, generate_gray_sequence,
    gray_code_bits, gray_sequence, gray_to_binary, validate_gray_sequence, EncodingEfficiency,
};
