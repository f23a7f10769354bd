//! Generation parameters sent with every model request.
//!
//! These are fixed application-level constants, not per-turn knobs: the
//! same set is passed uniformly to every request the gateway makes.

use serde::{Deserialize, Serialize};

/// Sampling and output-length parameters for the generative model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let params = GenerationParams::default();
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.top_p, 0.95);
        assert_eq!(params.top_k, 40);
        assert_eq!(params.max_output_tokens, 5000);
    }
}
