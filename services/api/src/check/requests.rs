use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CheckLinkRequest {
    pub url: String,
}
