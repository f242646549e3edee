use serde::{Deserialize, Serialize};

/// Relative allegiance of one owner toward another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Stance {
    Enemy,
    Neutral,
    Ally,
}

string_enum!(Stance {
    Enemy => "enemy",
    Neutral => "neutral",
    Ally => "ally",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stance_round_trips_through_json() {
        let json = serde_json::to_string(&Stance::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
        let back: Stance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Stance::Neutral);
    }

    #[test]
    fn stance_parse_is_case_insensitive() {
        assert_eq!(Stance::try_from("Enemy".to_string()), Ok(Stance::Enemy));
        assert_eq!(Stance::try_from("ALLY".to_string()), Ok(Stance::Ally));
    }

    #[test]
    fn unknown_stance_rejected() {
        assert!(Stance::try_from("frenemy".to_string()).is_err());
        assert!(serde_json::from_str::<Stance>("\"frenemy\"").is_err());
    }

    #[test]
    fn all_lists_every_variant() {
        assert_eq!(Stance::ALL, &[Stance::Enemy, Stance::Neutral, Stance::Ally]);
    }
}
