use serde::Deserialize;

/// Raw form fields as submitted. Enum fields arrive as free text and are
/// validated in the handler so a bad value yields a 400 with a message
/// instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct SubmitReportRequest {
    pub scam_url: String,
    pub scam_type: String,
    pub how_received: Option<String>,
    pub details: String,
    pub contact_email: Option<String>,
}
