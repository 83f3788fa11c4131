//! Typed Identifiers
//!
//! Newtype wrappers around UUIDs so that ids of different entities cannot be mixed up.

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Create a new random id
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            #[must_use]
            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = uuid::Error;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Ok(Self(uuid::Uuid::parse_str(value)?))
            }
        }
    };
}

define_id!(
    /// Identifier of a campaign block
    BlockId
);
define_id!(
    /// Identifier of an email template
    EmailTemplateId
);
define_id!(
    /// Identifier of a survey template
    SurveyTemplateId
);
define_id!(
    /// Identifier of a submitted survey response
    SurveyResponseId
);
define_id!(
    /// Identifier of an email/survey connection
    ConnectionId
);
define_id!(
    /// Identifier of a custom influencer field definition
    InfluencerFieldId
);
define_id!(
    /// Identifier of an influencer record
    InfluencerId
);
define_id!(
    /// Identifier of a linked Instagram account
    InstagramAccountId
);
define_id!(
    /// Identifier of an outbound email record
    EmailSentId
);
define_id!(
    /// Identifier of an inbound email record
    EmailReceivedId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_random() {
        assert_ne!(InfluencerId::new(), InfluencerId::new());
    }

    #[test]
    fn id_parses_from_str() {
        let raw = "550e8400-e29b-41d4-a716-446655440000";
        let id = SurveyTemplateId::try_from(raw).unwrap();
        assert_eq!(id.to_string(), raw);
        assert!(BlockId::try_from("not-a-uuid").is_err());
    }
}
