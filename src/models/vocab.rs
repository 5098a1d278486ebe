use thiserror::Error;

/// Raised when a string does not belong to a fixed vocabulary.
///
/// The request boundary treats this as "drop the value" rather than a hard
/// failure; the catalog loader treats it as a rejected record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vocabulary value: {0:?}")]
pub struct UnknownValue(pub String);

/// Defines a vocabulary enum together with its wire strings.
///
/// The wire string is the single source of truth: Display, FromStr and the
/// serde impls all go through `as_str` so the catalog JSON, the HTTP layer
/// and log output agree on spelling.
macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(UnknownValue(other.to_string())),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

vocabulary! {
    /// Category of the idea's intended adopter
    OrganizationType {
        SportsTeam => "Sports Team",
        Brand => "Brand",
        EventOrganizer => "Event Organizer",
        MediaCompany => "Media Company",
        EntertainmentVenue => "Entertainment Venue",
    }
}

vocabulary! {
    /// Kind of engagement activity an idea describes
    Category {
        ArVrExperience => "AR/VR Experience",
        Contest => "Contest",
        CommunityEvent => "Community Event",
        SocialMediaCampaign => "Social Media Campaign",
        FanRecognition => "Fan Recognition",
        InteractiveContent => "Interactive Content",
        LoyaltyProgram => "Loyalty Program",
        CoCreation => "Co-Creation",
    }
}

vocabulary! {
    /// Target audience age bracket
    AgeGroup {
        Under18 => "Under 18",
        Age18To24 => "18-24",
        Age25To34 => "25-34",
        Age35To44 => "35-44",
        Age45To54 => "45-54",
        Age55Plus => "55+",
    }
}

vocabulary! {
    /// Audience engagement level
    FanType {
        Casual => "Casual",
        Dedicated => "Dedicated",
        Superfan => "Superfan",
        New => "New",
        Lapsed => "Lapsed",
    }
}

vocabulary! {
    /// Budget bracket, ordered Low < Medium < High
    BudgetRange {
        Low => "Low (Under $5,000)",
        Medium => "Medium ($5,000-$25,000)",
        High => "High ($25,000+)",
    }
}

vocabulary! {
    /// How hard an idea is to put in place
    Difficulty {
        Easy => "Easy",
        Moderate => "Moderate",
        Complex => "Complex",
    }
}

vocabulary! {
    /// Resource an idea needs from the adopting organization
    Resource {
        SocialMedia => "Social Media",
        Website => "Website",
        EmailList => "Email List",
        PhysicalSpace => "Physical Space",
        Staff => "Staff",
        Technology => "Technology",
        Partners => "Partners",
    }
}

vocabulary! {
    /// Outcome metric an idea is expected to move
    SuccessMetric {
        EngagementRate => "Engagement Rate",
        Attendance => "Attendance",
        UserGeneratedContent => "User-Generated Content",
        SalesConversion => "Sales Conversion",
        SocialSharing => "Social Sharing",
        EmailSignups => "Email Signups",
        AppDownloads => "App Downloads",
    }
}

vocabulary! {
    /// Engagement goal an organization can request
    Goal {
        IncreaseBrandLoyalty => "Increase Brand Loyalty",
        DriveSales => "Drive Sales/Conversions",
        BuildCommunity => "Build Community",
        IncreaseSocialPresence => "Increase Social Media Presence",
        GenerateUserContent => "Generate User Content",
        CollectCustomerData => "Collect Customer Data",
        ImproveAttendance => "Improve Game/Event Attendance",
    }
}
