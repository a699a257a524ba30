/// Optional search fields for `find_clients`
///
/// Every field that is set must match for a client to be returned. A criteria
/// value with no fields set matches every client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl SearchCriteria {
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
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
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
    fn default_criteria_is_empty() {
        assert!(SearchCriteria::new().is_empty());
    }

    #[test]
    fn any_field_makes_criteria_non_empty() {
        assert!(!SearchCriteria::new().name("Boris").is_empty());
        assert!(!SearchCriteria::new().surname("Petrov").is_empty());
        assert!(!SearchCriteria::new().email("petrbor444@letmail.org").is_empty());
        assert!(!SearchCriteria::new().phone("+79226067314").is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let criteria = SearchCriteria::new().name("Boris").surname("Petrov");
        assert_eq!(criteria.name.as_deref(), Some("Boris"));
        assert_eq!(criteria.surname.as_deref(), Some("Petrov"));
        assert_eq!(criteria.email, None);
        assert_eq!(criteria.phone, None);
    }
}
