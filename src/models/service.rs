/// Session types offered on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    WithoutTraining,
    WithTraining,
    WithTrainingAndSuivi,
}

impl Service {
    pub const ALL: [Service; 3] = [
        Service::WithoutTraining,
        Service::WithTraining,
        Service::WithTrainingAndSuivi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::WithoutTraining => "1 hour without training",
            Service::WithTraining => "1 hour with training",
            Service::WithTrainingAndSuivi => "1 hour with training and suivi",
        }
    }

    /// Price in dinars.
    pub fn price(&self) -> u32 {
        match self {
            Service::WithoutTraining => 20,
            Service::WithTraining => 35,
            Service::WithTrainingAndSuivi => 45,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|svc| svc.as_str() == s)
    }

    pub fn label(&self) -> String {
        format!("{} - {}dt", self.as_str(), self.price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_pairs() {
        assert_eq!(Service::WithoutTraining.price(), 20);
        assert_eq!(Service::WithTraining.price(), 35);
        assert_eq!(Service::WithTrainingAndSuivi.price(), 45);
    }

    #[test]
    fn test_parse_known_names() {
        for svc in Service::ALL {
            assert_eq!(Service::parse(svc.as_str()), Some(svc));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Service::parse(""), None);
        assert_eq!(Service::parse("2 hours"), None);
        assert_eq!(Service::parse("1 Hour With Training"), None);
    }

    #[test]
    fn test_label_matches_menu() {
        assert_eq!(Service::WithTraining.label(), "1 hour with training - 35dt");
    }
}
