use serde::{Deserialize, Serialize};

/// Base of every generated deep-link.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// A formatted phone paired with the deep-link that opens a chat with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub phone: String,
    pub link: String,
}

impl LinkRecord {
    pub fn new(phone: &str, message: &str) -> Self {
        Self {
            phone: phone.to_string(),
            link: create_whatsapp_link(phone, message),
        }
    }
}

/// Builds `https://wa.me/{phone}?text={message}` with the message percent-encoded.
///
/// The phone is used as given; callers only pass numbers that already passed validation.
pub fn create_whatsapp_link(phone: &str, message: &str) -> String {
    let encoded = urlencoding::encode(message);
    format!("{WHATSAPP_BASE_URL}/{phone}?text={encoded}")
}
