use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

/// Declares a closed vocabulary whose variants travel over the wire as fixed labels.
macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_wire(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            pub fn from_wire(raw: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|value| value.as_wire() == raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_wire())
            }
        }
    };
}

id_newtype!(GroupId);

vocabulary!(
    /// Destinations the recommendation service has inventory for.
    Region {
        PhuQuoc => "푸꾸옥",
        NhaTrang => "나트랑",
    }
);

vocabulary!(
    Gender {
        Male => "male",
        Female => "female",
        Undisclosed => "prefer_not_to_say",
    }
);

vocabulary!(
    /// Age brackets. Infants and children only appear in companion groups.
    AgeBand {
        Infant => "유아",
        Child => "소아",
        Teens => "10대",
        Twenties => "20대",
        Thirties => "30대",
        Forties => "40대",
        Fifties => "50대",
        SixtiesPlus => "60대 이상",
    }
);

vocabulary!(
    Relation {
        Partner => "연인·배우자",
        Friend => "친구",
        Colleague => "지인·동료",
        Kid => "아이",
        Parents => "부모님",
        Relatives => "친척·형제",
        Other => "기타",
    }
);

vocabulary!(
    Theme {
        Healing => "#휴양&힐링",
        BeachSunset => "#비치&선셋",
        Snorkeling => "#스노클링",
        ScubaDiving => "#스쿠버다이빙",
        MarineActivity => "#해양액티비티",
        LuxuryResort => "#럭셔리리조트",
        PoolVilla => "#풀빌라",
        LocalFood => "#로컬맛집",
        NightMarket => "#아시장투어",
        PhotoSpot => "#사진핫플",
        SunsetBar => "#선셋바",
        OutdoorTrip => "#야외트로드핑",
        PrivateBeach => "#프라이빗비치",
        CoupleTrip => "#커플여행",
    }
);

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "남성",
            Gender::Female => "여성",
            Gender::Undisclosed => "밝히지 않음",
        }
    }
}

impl AgeBand {
    /// Bands offered for the traveler's own age.
    pub const TRAVELER: &'static [AgeBand] = &[
        AgeBand::Teens,
        AgeBand::Twenties,
        AgeBand::Thirties,
        AgeBand::Forties,
        AgeBand::Fifties,
        AgeBand::SixtiesPlus,
    ];

    pub const COMPANION_DEFAULT: AgeBand = AgeBand::Twenties;

    pub fn hint(self) -> Option<&'static str> {
        match self {
            AgeBand::Infant => Some("2세 미만"),
            AgeBand::Child => Some("2~12세"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_labels_round_trip_through_serde() {
        let encoded = serde_json::to_string(&AgeBand::SixtiesPlus).expect("encode");
        assert_eq!(encoded, "\"60대 이상\"");
        let decoded: Region = serde_json::from_str("\"나트랑\"").expect("decode");
        assert_eq!(decoded, Region::NhaTrang);
    }

    #[test]
    fn from_wire_rejects_unknown_labels() {
        assert_eq!(Theme::from_wire("#풀빌라"), Some(Theme::PoolVilla));
        assert_eq!(Theme::from_wire("투어/액티비티"), None);
        assert_eq!(Gender::from_wire("prefer_not_to_say"), Some(Gender::Undisclosed));
    }

    #[test]
    fn traveler_bands_exclude_companion_only_brackets() {
        assert!(!AgeBand::TRAVELER.contains(&AgeBand::Infant));
        assert!(!AgeBand::TRAVELER.contains(&AgeBand::Child));
        assert_eq!(AgeBand::TRAVELER.len(), 6);
    }
}
