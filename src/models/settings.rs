use serde::{Deserialize, Serialize};

/// Site name used when the settings endpoint does not provide one
pub const DEFAULT_SITE_NAME: &str = "Migronis Brazil";

/// Markup supplied by site administrators through the settings endpoint.
///
/// It is emitted unescaped, so it can only be obtained by deserializing
/// settings and only the page shell writes it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Site-wide cosmetic and contact configuration.
///
/// Every field is optional; accessors treat blank strings as missing so the
/// dependent UI is omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub chat_widget: Option<TrustedMarkup>,
    #[serde(default)]
    pub crm_code: Option<String>,
    #[serde(default)]
    pub gtm_id: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

impl Settings {
    pub fn site_name(&self) -> &str {
        present(&self.site_name).unwrap_or(DEFAULT_SITE_NAME)
    }

    pub fn contact_email(&self) -> Option<&str> {
        present(&self.contact_email)
    }

    pub fn contact_phone(&self) -> Option<&str> {
        present(&self.contact_phone)
    }

    /// Analytics container id, only if it is safe to splice into a script
    pub fn gtm_id(&self) -> Option<&str> {
        present(&self.gtm_id).filter(|id| {
            id.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
    }

    pub fn chat_widget(&self) -> Option<&TrustedMarkup> {
        self.chat_widget.as_ref().filter(|markup| !markup.is_blank())
    }

    /// Digits of the contact phone, as messaging deep-links expect them
    pub fn phone_digits(&self) -> Option<String> {
        let digits: String = self
            .contact_phone()?
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            None
        } else {
            Some(digits)
        }
    }
}
