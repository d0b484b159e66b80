#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormatStats {
    pub title: &'static str,
    pub matches: &'static str,
    pub runs: &'static str,
    pub average: &'static str,
    pub centuries: &'static str,
    pub high_score: &'static str,
    pub format: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchResult {
    pub date: &'static str,
    pub tournament: &'static str,
    pub opponent: &'static str,
    pub score: &'static str,
    pub result: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Other,
}

impl MatchResult {
    pub fn outcome(&self) -> Outcome {
        if self.result.contains("Won") {
            Outcome::Won
        } else if self.result.contains("Lost") {
            Outcome::Lost
        } else {
            Outcome::Other
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

/// One point of the career runs chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeasonRuns {
    pub year: &'static str,
    pub runs: u32,
}

pub const FORMAT_STATS: &[FormatStats] = &[
    FormatStats {
        title: "Test Cricket",
        matches: "56",
        runs: "4,004",
        average: "46.2",
        centuries: "10",
        high_score: "212",
        format: "Test",
    },
    FormatStats {
        title: "One Day Internationals",
        matches: "262",
        runs: "10,709",
        average: "49.1",
        centuries: "31",
        high_score: "264",
        format: "ODI",
    },
    FormatStats {
        title: "T20 Internationals",
        matches: "148",
        runs: "3,853",
        average: "31.3",
        centuries: "4",
        high_score: "118",
        format: "T20I",
    },
    FormatStats {
        title: "Indian Premier League",
        matches: "247",
        runs: "6,211",
        average: "30.2",
        centuries: "1",
        high_score: "109*",
        format: "IPL",
    },
];

pub const CAREER_RUNS: &[SeasonRuns] = &[
    SeasonRuns { year: "2014", runs: 220 },
    SeasonRuns { year: "2015", runs: 310 },
    SeasonRuns { year: "2016", runs: 280 },
    SeasonRuns { year: "2017", runs: 210 },
    SeasonRuns { year: "2018", runs: 180 },
    SeasonRuns { year: "2019", runs: 520 },
    SeasonRuns { year: "2021", runs: 920 },
    SeasonRuns { year: "2022", runs: 100 },
    SeasonRuns { year: "2023", runs: 520 },
    SeasonRuns { year: "2024", runs: 600 },
];

pub const RECENT_INTERNATIONAL: &[MatchResult] = &[
    MatchResult {
        date: "Mar 14, 2024",
        tournament: "Test Series",
        opponent: "England",
        score: "103 (162)",
        result: "Won by 5 wickets",
    },
    MatchResult {
        date: "Mar 7, 2024",
        tournament: "Test Series",
        opponent: "England",
        score: "87 (147)",
        result: "Won by 4 wickets",
    },
    MatchResult {
        date: "Feb 25, 2024",
        tournament: "Test Series",
        opponent: "England",
        score: "131 (196)",
        result: "Won by innings and 64 runs",
    },
];

pub const RECENT_IPL: &[MatchResult] = &[
    MatchResult {
        date: "Apr 2, 2024",
        tournament: "IPL 2024",
        opponent: "Chennai Super Kings",
        score: "74 (43)",
        result: "Won by 6 wickets",
    },
    MatchResult {
        date: "Mar 29, 2024",
        tournament: "IPL 2024",
        opponent: "Gujarat Titans",
        score: "43 (29)",
        result: "Lost by 3 wickets",
    },
    MatchResult {
        date: "Mar 25, 2024",
        tournament: "IPL 2024",
        opponent: "Rajasthan Royals",
        score: "89 (54)",
        result: "Won by 5 wickets",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Triple ODI Double Centuries",
        body: "Only player in history to score three double centuries in ODIs, including the highest ever individual score of 264.",
    },
    Highlight {
        title: "World Cup Performance",
        body: "Most centuries in a single World Cup edition (5 in 2019), breaking Kumar Sangakkara's record.",
    },
    Highlight {
        title: "T20 Achievements",
        body: "First Indian to score a century in all three formats of international cricket.",
    },
    Highlight {
        title: "IPL Success",
        body: "Led Mumbai Indians to a record five IPL titles as captain (2013, 2015, 2017, 2019, 2020).",
    },
    Highlight {
        title: "Opening Partnership",
        body: "Holds several records for opening partnerships with Shikhar Dhawan in limited-overs cricket.",
    },
    Highlight {
        title: "Test Cricket",
        body: "Scored centuries in both innings of his debut Test as an opener against South Africa.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_cards_in_fixed_order() {
        let formats: Vec<_> = FORMAT_STATS.iter().map(|s| s.format).collect();
        assert_eq!(formats, ["Test", "ODI", "T20I", "IPL"]);

        let test = &FORMAT_STATS[0];
        assert_eq!(test.matches, "56");
        assert_eq!(test.runs, "4,004");
        assert_eq!(FORMAT_STATS[3].high_score, "109*");
    }

    #[test]
    fn career_runs_series() {
        assert_eq!(CAREER_RUNS.len(), 10);
        assert_eq!(CAREER_RUNS[0], SeasonRuns { year: "2014", runs: 220 });
        assert_eq!(CAREER_RUNS[6], SeasonRuns { year: "2021", runs: 920 });
        assert!(CAREER_RUNS.iter().all(|p| p.year != "2020"));
    }

    #[test]
    fn match_outcomes() {
        let ipl: Vec<_> = RECENT_IPL.iter().map(MatchResult::outcome).collect();
        assert_eq!(ipl, [Outcome::Won, Outcome::Lost, Outcome::Won]);
        assert!(RECENT_INTERNATIONAL.iter().all(|m| m.outcome() == Outcome::Won));

        let drawn = MatchResult { result: "Match drawn", ..RECENT_IPL[0] };
        assert_eq!(drawn.outcome(), Outcome::Other);
    }

    #[test]
    fn six_highlights() {
        assert_eq!(HIGHLIGHTS.len(), 6);
        assert_eq!(HIGHLIGHTS[0].title, "Triple ODI Double Centuries");
    }
}
