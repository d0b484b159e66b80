//! Biography fact sheet and the hero's headline numbers.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileFact {
    pub label: &'static str,
    pub value: &'static str,
}

/// Rounded appearance count shown on the hero portrait.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const HERO_BACKGROUND: &str = "https://images.news18.com/ibnlive/uploads/2024/07/rohit-sharma-t20-world-cup-bcci-2024-07-774540470fa7a3cb905af92112e420ad-16x9.jpg?impolicy=website&width=640&height=360";
pub const HERO_PORTRAIT: &str = "https://img.theweek.in/content/dam/week/magazine/theweek/sports/images/2023/11/25/56-Rohit-Sharma.jpg";
pub const BIOGRAPHY_PORTRAIT: &str = "https://i2.wp.com/m.timesofindia.com/photo/104376768/104376768.jpg?strip=all";

pub const QUICK_STATS: &[QuickStat] = &[
    QuickStat { label: "Tests", value: "50+" },
    QuickStat { label: "ODIs", value: "250+" },
    QuickStat { label: "T20Is", value: "140+" },
];

pub const FACTS: &[ProfileFact] = &[
    ProfileFact { label: "Full Name", value: "Rohit Gurunath Sharma" },
    ProfileFact { label: "Born", value: "April 30, 1987" },
    ProfileFact { label: "Birthplace", value: "Nagpur, Maharashtra, India" },
    ProfileFact { label: "Height", value: "5'9\" (175 cm)" },
    ProfileFact { label: "Batting", value: "Right-handed" },
    ProfileFact { label: "Bowling", value: "Right-arm off break" },
    ProfileFact { label: "Role", value: "Opening batsman, Captain" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_sheet_rows() {
        assert_eq!(FACTS.len(), 7);
        assert_eq!(FACTS[0].value, "Rohit Gurunath Sharma");
        assert_eq!(FACTS[6].label, "Role");
    }

    #[test]
    fn hero_quick_stats() {
        let stats: Vec<_> = QUICK_STATS.iter().map(|s| (s.label, s.value)).collect();
        assert_eq!(stats, [("Tests", "50+"), ("ODIs", "250+"), ("T20Is", "140+")]);
    }
}
