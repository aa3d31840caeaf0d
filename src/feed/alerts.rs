//! Alert manager
//!
//! Holds transient notifications in insertion order. Expiry is the display
//! surface's job; this type only appends and removes.

use chrono::Utc;

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Success => "success",
            AlertType::Info => "info",
            AlertType::Warning => "warning",
            AlertType::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Milliseconds since the Unix epoch, strictly increasing per manager
    pub id: i64,
    pub alert_type: AlertType,
    pub headline: String,
    pub message: String,
}

/// Ordered queue of live alerts
///
/// There is no upper bound: if alerts are raised faster than they are
/// dismissed the queue keeps growing.
#[derive(Debug, Default)]
pub struct AlertManager {
    alerts: Vec<Alert>,
    last_id: i64,
}

impl AlertManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new alert and return a copy of it
    pub fn raise(
        &mut self,
        alert_type: AlertType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Alert {
        let alert = Alert {
            id: self.next_id(),
            alert_type,
            headline: title.into(),
            message: message.into(),
        };
        tracing::debug!(
            "Alert raised: [{}] {} ({} queued)",
            alert.alert_type.as_str(),
            alert.headline,
            self.alerts.len() + 1
        );
        self.alerts.push(alert.clone());
        alert
    }

    /// Remove the first alert equal to `alert`
    ///
    /// Returns false (and changes nothing) if it was already gone.
    pub fn dismiss(&mut self, alert: &Alert) -> bool {
        match self.alerts.iter().position(|a| a == alert) {
            Some(idx) => {
                self.alerts.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    // Time-derived, bumped when two alerts land in the same millisecond
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_then_dismiss_restores_queue() {
        let mut manager = AlertManager::new();
        manager.raise(AlertType::Info, "first", "kept");
        let before = manager.alerts().to_vec();

        let alert = manager.raise(AlertType::Danger, "Playback error", "no source");
        assert_eq!(manager.len(), 2);
        assert!(manager.dismiss(&alert));

        assert_eq!(manager.alerts(), before.as_slice());
    }

    #[test]
    fn test_double_dismiss_is_noop() {
        let mut manager = AlertManager::new();
        let alert = manager.raise(AlertType::Success, "Saved", "ok");
        manager.raise(AlertType::Info, "Other", "still here");

        assert!(manager.dismiss(&alert));
        assert_eq!(manager.len(), 1);
        assert!(!manager.dismiss(&alert));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.alerts()[0].headline, "Other");
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut manager = AlertManager::new();
        let ids: Vec<i64> = (0..50)
            .map(|i| manager.raise(AlertType::Info, format!("alert {}", i), "").id)
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_alerts_keep_insertion_order() {
        let mut manager = AlertManager::new();
        manager.raise(AlertType::Info, "a", "");
        manager.raise(AlertType::Warning, "b", "");
        manager.raise(AlertType::Danger, "c", "");

        let headlines: Vec<&str> = manager.alerts().iter().map(|a| a.headline.as_str()).collect();
        assert_eq!(headlines, vec!["a", "b", "c"]);
    }
}
