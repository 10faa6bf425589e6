use crate::imports::*;

/// Contact form as posted by the landing page.
///
/// Every field is optional on the wire so that a missing email is reported
/// as a validation failure rather than a malformed request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct LeadForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeadAck {
    pub success: bool,
    pub message: String,
}

impl LeadAck {
    pub fn thanks() -> Self {
        Self {
            success: true,
            message: "Thank you for reaching out!".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_as_none() {
        let form: LeadForm = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(form.name, None);
        assert_eq!(form.email.as_deref(), Some("a@b.c"));
        assert_eq!(form.message, None);
    }

    #[test]
    fn empty_object_is_a_valid_form() {
        let form: LeadForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form, LeadForm::default());
    }

    #[test]
    fn none_fields_are_not_serialized() {
        let form = LeadForm {
            email: Some("a@b.c".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&form).unwrap(), r#"{"email":"a@b.c"}"#);
    }
}
