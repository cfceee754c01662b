//! Generation parameters for a completion request.

/// Fixed parameters applied to every completion request.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// The model to use
    pub model: String,

    /// The number of max tokens to generate
    pub tokens: usize,

    /// The temperature of the model
    pub temperature: f32,
}

impl GenerationConfig {
    /// Create a new configuration for a model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".into(),
            tokens: 512,
            temperature: 0.2,
        }
    }
}
