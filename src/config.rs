pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_SERVICE_ID: &str = "service_nj44xwq";
pub const DEFAULT_TEMPLATE_ID: &str = "template_q7bec1v";
pub const DEFAULT_PUBLIC_KEY: &str = "Z5-0QIXhvTjbQjBVl";

/// Identifiers for the EmailJS account the contact form relays through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            service_id: DEFAULT_SERVICE_ID.into(),
            template_id: DEFAULT_TEMPLATE_ID.into(),
            public_key: DEFAULT_PUBLIC_KEY.into(),
            private_key: None,
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: lookup("EMAILJS_API_URL").unwrap_or(defaults.api_url),
            service_id: lookup("EMAILJS_SERVICE_ID").unwrap_or(defaults.service_id),
            template_id: lookup("EMAILJS_TEMPLATE_ID").unwrap_or(defaults.template_id),
            public_key: lookup("EMAILJS_PUBLIC_KEY").unwrap_or(defaults.public_key),
            private_key: lookup("EMAILJS_PRIVATE_KEY").filter(|key| !key.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = RelayConfig::from_lookup(|_| None);
        assert_eq!(config, RelayConfig::default());
        assert_eq!(config.service_id, "service_nj44xwq");
    }

    #[test]
    fn environment_overrides_defaults() {
        let env: HashMap<&str, &str> = [
            ("EMAILJS_SERVICE_ID", "service_test"),
            ("EMAILJS_PRIVATE_KEY", "secret"),
        ]
        .into_iter()
        .collect();

        let config = RelayConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.service_id, "service_test");
        assert_eq!(config.template_id, DEFAULT_TEMPLATE_ID);
        assert_eq!(config.private_key.as_deref(), Some("secret"));
    }

    #[test]
    fn empty_private_key_is_ignored() {
        let config = RelayConfig::from_lookup(|key| {
            (key == "EMAILJS_PRIVATE_KEY").then(String::new)
        });
        assert_eq!(config.private_key, None);
    }
}
