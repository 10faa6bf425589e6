// Leads captured by the landing page form, kept in memory for the process lifetime

use std::sync::Arc;
use std::time::SystemTime;

use interfacing::LeadForm;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LeadError {
    #[error("Email is required")]
    MissingEmail,
}

/// A validated form, not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewLead {
    pub fn parse(form: LeadForm) -> Result<Self, LeadError> {
        let email = form
            .email
            .filter(|email| !email.is_empty())
            .ok_or(LeadError::MissingEmail)?;

        Ok(Self {
            name: form
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Anonymous".into()),
            email,
            message: form.message.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    /// RFC 3339, UTC
    pub timestamp: String,
}

#[derive(Clone, Default)]
pub struct LeadBook {
    leads: Arc<RwLock<Vec<Lead>>>,
}

impl LeadBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, new_lead: NewLead) -> Lead {
        let lead = Lead {
            id: Uuid::new_v4(),
            name: new_lead.name,
            email: new_lead.email,
            message: new_lead.message,
            timestamp: humantime::format_rfc3339_millis(SystemTime::now()).to_string(),
        };
        self.leads.write().await.push(lead.clone());
        lead
    }

    pub async fn all(&self) -> Vec<Lead> {
        self.leads.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.leads.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err_eq, assert_ok};

    fn form(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> LeadForm {
        LeadForm {
            name: name.map(Into::into),
            email: email.map(Into::into),
            message: message.map(Into::into),
        }
    }

    #[test]
    fn email_is_required() {
        assert_err_eq!(
            NewLead::parse(form(Some("Ursula"), None, None)),
            LeadError::MissingEmail
        );
        assert_err_eq!(
            NewLead::parse(form(Some("Ursula"), Some(""), None)),
            LeadError::MissingEmail
        );
    }

    #[test]
    fn optional_fields_get_defaults() {
        let lead = assert_ok!(NewLead::parse(form(None, Some("ursula@example.com"), None)));
        assert_eq!(lead.name, "Anonymous");
        assert_eq!(lead.message, "");
    }

    #[tokio::test]
    async fn recorded_leads_get_id_and_timestamp() {
        let book = LeadBook::new();
        let new_lead = assert_ok!(NewLead::parse(form(
            Some("Ursula"),
            Some("ursula@example.com"),
            Some("hi")
        )));

        let lead = book.record(new_lead).await;
        assert!(lead.timestamp.ends_with('Z'));
        assert!(humantime::parse_rfc3339(&lead.timestamp).is_ok());

        let all = book.all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, lead.id);
        assert_eq!(all[0].email, "ursula@example.com");
    }

    #[tokio::test]
    async fn clones_share_the_book() {
        let book = LeadBook::new();
        let other = book.clone();
        let new_lead = assert_ok!(NewLead::parse(form(None, Some("a@b.c"), None)));
        other.record(new_lead).await;
        assert_eq!(book.len().await, 1);
    }
}
