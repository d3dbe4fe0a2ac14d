use serde::Serialize;

use super::Service;

/// Field map of a single booking row, as stored in the Grist table. Prices
/// are whole dinars.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingFields {
    pub service: String,
    pub price: u32,
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    pub fields: BookingFields,
}

/// Payload the wizard sends. The proxy forwards whatever JSON it receives and
/// never decodes into this type.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingRecord {
    pub records: Vec<Record>,
}

impl BookingRecord {
    pub fn single(fields: BookingFields) -> Self {
        Self {
            records: vec![Record { fields }],
        }
    }
}

/// In-progress form state. Empty strings mean "unset".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    service: Option<Service>,
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl BookingDraft {
    pub fn service(&self) -> Option<Service> {
        self.service
    }

    /// Price always follows the selected service; 0 while unset.
    pub fn price(&self) -> u32 {
        self.service.map(|s| s.price()).unwrap_or(0)
    }

    pub fn select_service(&mut self, service: Service) {
        self.service = Some(service);
    }

    pub fn to_fields(&self) -> BookingFields {
        BookingFields {
            service: self
                .service
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            price: self.price(),
            date: self.date.clone(),
            time: self.time.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_has_zero_price() {
        let draft = BookingDraft::default();
        assert_eq!(draft.service(), None);
        assert_eq!(draft.price(), 0);
        assert_eq!(draft.to_fields().service, "");
    }

    #[test]
    fn test_price_follows_service() {
        let mut draft = BookingDraft::default();
        draft.select_service(Service::WithTrainingAndSuivi);
        assert_eq!(draft.price(), 45);
        draft.select_service(Service::WithoutTraining);
        assert_eq!(draft.price(), 20);
    }

    #[test]
    fn test_record_wire_shape() {
        let mut draft = BookingDraft::default();
        draft.select_service(Service::WithTraining);
        draft.date = "2025-06-01".to_string();
        draft.time = "18:00".to_string();
        draft.name = "Amine".to_string();
        draft.email = "amine@example.com".to_string();
        draft.phone = "+21650112233".to_string();

        let json = serde_json::to_value(BookingRecord::single(draft.to_fields())).unwrap();
        let fields = &json["records"][0]["fields"];
        assert_eq!(fields["service"], "1 hour with training");
        assert_eq!(fields["price"], serde_json::json!(35));
        assert!(fields["price"].is_u64());
        assert_eq!(fields["date"], "2025-06-01");
        assert_eq!(fields["time"], "18:00");
        assert_eq!(fields["name"], "Amine");
        assert_eq!(fields["email"], "amine@example.com");
        assert_eq!(fields["phone"], "+21650112233");
        assert_eq!(json["records"].as_array().unwrap().len(), 1);
    }
}
