#[cfg(test)]
#[path = "run_form_test.rs"]
mod run_form_test;

use crate::net::types::CreateRunRequest;

/// Raw text of the "new run" form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunForm {
    pub prompt: String,
    pub negative_prompt: String,
    pub seed: String,
    pub logo_image: String,
    pub mood_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("a prompt is required")]
    MissingPrompt,
    #[error("seed must be a whole number, got '{0}'")]
    InvalidSeed(String),
    #[error("{field} must be an absolute http(s) URL, got '{value}'")]
    InvalidUrl { field: &'static str, value: String },
}

impl RunForm {
    /// Submit is enabled once the prompt has non-whitespace text and no
    /// submission is in flight.
    pub fn can_submit(&self, submitting: bool) -> bool {
        !submitting && !self.prompt.trim().is_empty()
    }

    /// Build the create-run body. Empty optional fields are left out.
    pub fn to_request(&self) -> Result<CreateRunRequest, FormError> {
        if self.prompt.trim().is_empty() {
            return Err(FormError::MissingPrompt);
        }

        let seed = match non_empty(&self.seed) {
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| FormError::InvalidSeed(raw.to_owned()))?),
            None => None,
        };

        Ok(CreateRunRequest {
            prompt: self.prompt.clone(),
            negative_prompt: non_empty(&self.negative_prompt).map(ToOwned::to_owned),
            seed,
            logo_image: url_field("logo_image", &self.logo_image)?,
            mood_image: url_field("mood_image", &self.mood_image)?,
        })
    }
}

fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn url_field(field: &'static str, raw: &str) -> Result<Option<String>, FormError> {
    let Some(value) = non_empty(raw) else {
        return Ok(None);
    };
    match reqwest::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Some(value.to_owned())),
        _ => Err(FormError::InvalidUrl { field, value: value.to_owned() }),
    }
}
