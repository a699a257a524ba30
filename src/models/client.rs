use std::fmt;

/// A row of the `clients` table
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub client_id: i32,
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
}

/// A client together with every phone number it owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub client_id: i32,
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phones: Vec<String>,
}

impl ClientRecord {
    pub fn new(client: Client, phones: Vec<String>) -> Self {
        Self {
            client_id: client.client_id,
            name: client.name,
            surname: client.surname,
            email: client.email,
            phones,
        }
    }
}

impl fmt::Display for ClientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Client #{}", self.client_id)?;
        writeln!(f, "  Name:    {} {}", self.name, self.surname)?;
        writeln!(f, "  Email:   {}", self.email.as_deref().unwrap_or("-"))?;
        if self.phones.is_empty() {
            write!(f, "  Phones:  -")
        } else {
            write!(f, "  Phones:  {}", self.phones.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boris() -> Client {
        Client {
            client_id: 1,
            name: "Boris".to_string(),
            surname: "Nefedov".to_string(),
            email: Some("bornefed67@write.org".to_string()),
        }
    }

    #[test]
    fn record_keeps_client_fields_and_phones() {
        let record = ClientRecord::new(boris(), vec!["+74959956348".to_string()]);

        assert_eq!(record.client_id, 1);
        assert_eq!(record.name, "Boris");
        assert_eq!(record.surname, "Nefedov");
        assert_eq!(record.email.as_deref(), Some("bornefed67@write.org"));
        assert_eq!(record.phones, vec!["+74959956348"]);
    }

    #[test]
    fn display_lists_every_phone() {
        let record = ClientRecord::new(
            boris(),
            vec!["+74959956348".to_string(), "+79534898123".to_string()],
        );

        let rendered = record.to_string();
        assert!(rendered.starts_with("Client #1\n"));
        assert!(rendered.contains("Boris Nefedov"));
        assert!(rendered.contains("+74959956348, +79534898123"));
    }

    #[test]
    fn display_marks_missing_email_and_phones() {
        let mut client = boris();
        client.email = None;
        let rendered = ClientRecord::new(client, Vec::new()).to_string();

        assert!(rendered.contains("Email:   -"));
        assert!(rendered.ends_with("Phones:  -"));
    }
}
