/// Replaces one phone number of a client with another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneChange {
    pub old: String,
    pub new: String,
}

/// Partial update of a client
///
/// `None` leaves a column untouched. `email` is nested so that
/// `Some(None)` clears the address while `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<Option<String>>,
    pub phone: Option<PhoneChange>,
}

impl ClientUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(Some(email.into()));
        self
    }

    pub fn clear_email(mut self) -> Self {
        self.email = Some(None);
        self
    }

    pub fn phone(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.phone = Some(PhoneChange {
            old: old.into(),
            new: new.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_update_changes_nothing() {
        assert!(ClientUpdate::new().is_empty());
    }

    #[test]
    fn set_and_clear_email_are_distinct() {
        let set = ClientUpdate::new().email("redirina@topmail.com");
        let clear = ClientUpdate::new().clear_email();

        assert_eq!(set.email, Some(Some("redirina@topmail.com".to_string())));
        assert_eq!(clear.email, Some(None));
        assert!(!clear.is_empty());
        assert_ne!(set, clear);
    }

    #[test]
    fn phone_change_names_both_numbers() {
        let update = ClientUpdate::new().phone("+79226067314", "+79412347565");
        assert_eq!(
            update.phone,
            Some(PhoneChange {
                old: "+79226067314".to_string(),
                new: "+79412347565".to_string(),
            })
        );
    }
}
