//! Messaging deep links (`https://wa.me/<digits>?text=...`).

use url::Url;

use crate::error::{CoreResult, GearError};

pub const MESSAGING_BASE: &str = "https://wa.me/";

/// Builder for a messaging link pre-filled with text.
///
/// # Example
///
/// ```
/// use gearhire_core::deeplink::MessagingLink;
///
/// let url = MessagingLink::new("+52 (55) 1234-5678")
///     .text("Hi, I'm interested in the 10x20 tent")
///     .to_url()
///     .unwrap();
/// assert!(url.as_str().starts_with("https://wa.me/525512345678?text="));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingLink {
    phone: String,
    text: Option<String>,
}

impl MessagingLink {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            text: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Phone number reduced to its digits.
    pub fn digits(&self) -> String {
        normalize_phone(&self.phone)
    }

    pub fn to_url(&self) -> CoreResult<Url> {
        let digits = self.digits();
        if digits.is_empty() {
            return Err(GearError::InvalidPhone(self.phone.clone()));
        }

        let mut url = Url::parse(MESSAGING_BASE)?;
        url.set_path(&digits);
        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            url.query_pairs_mut().append_pair("text", text);
        }
        Ok(url)
    }
}

/// Strip everything but ASCII digits (`+`, spaces, dashes, parentheses).
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
