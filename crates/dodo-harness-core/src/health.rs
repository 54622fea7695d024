//! System status panel rendering

use crate::error::HarnessError;
use crate::models::HealthStatus;

const CONFIGURED: &str = "✅ Configured";
const MISSING: &str = "❌ Missing";

/// One labeled line in the status panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub label: &'static str,
    pub value: String,
}

impl StatusLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// `✅ Configured` / `❌ Missing`
pub const fn configured(flag: bool) -> &'static str {
    if flag { CONFIGURED } else { MISSING }
}

impl HealthStatus {
    /// Snapshot recorded when the health probe itself failed
    pub fn probe_failed(err: &HarnessError) -> Self {
        Self {
            status: Some("error".into()),
            message: Some(err.user_message()),
            dodo_payments: None,
            database: None,
        }
    }

    /// Lines shown in the status panel.
    ///
    /// Provider and database lines appear only when the backend sent those
    /// sections; absent flags inside a section render as missing.
    pub fn status_lines(&self) -> Vec<StatusLine> {
        let mut lines = vec![StatusLine::new(
            "API Status",
            self.status.as_deref().unwrap_or("unknown"),
        )];

        if let Some(message) = &self.message {
            lines.push(StatusLine::new("Message", message.as_str()));
        }

        if let Some(provider) = &self.dodo_payments {
            lines.push(StatusLine::new("Dodo API Key", configured(provider.api_key_configured)));
            lines.push(StatusLine::new(
                "Webhook Secret",
                configured(provider.webhook_secret_configured),
            ));
            lines.push(StatusLine::new("Mode", provider.mode.as_deref().unwrap_or("unknown")));
        }

        if let Some(database) = &self.database {
            let state = if database.connected { "✅ Connected" } else { "❌ Disconnected" };
            let value = match &database.name {
                Some(name) => format!("{state} ({name})"),
                None => state.to_string(),
            };
            lines.push(StatusLine::new("Database", value));
        }

        lines
    }
}
