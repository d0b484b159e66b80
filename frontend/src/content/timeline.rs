/// Which side of the centre line a timeline card sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub side: Side,
}

impl TimelineEvent {
    /// Two-digit year for the marker on the centre line ("2007" -> "07").
    pub fn short_year(&self) -> &'static str {
        self.year.get(2..4).unwrap_or(self.year)
    }
}

pub const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        year: "2007",
        title: "International Debut",
        description: "Made his ODI debut against Ireland and T20I debut during the World T20, which India won.",
        side: Side::Left,
    },
    TimelineEvent {
        year: "2013",
        title: "Opening Breakthrough",
        description: "Promoted to open in ODIs by MS Dhoni, scored his first double century against Australia (209).",
        side: Side::Right,
    },
    TimelineEvent {
        year: "2014",
        title: "Record-Breaking 264",
        description: "Scored highest individual ODI score of 264 against Sri Lanka at Eden Gardens.",
        side: Side::Left,
    },
    TimelineEvent {
        year: "2015",
        title: "IPL Success",
        description: "Led Mumbai Indians to their second IPL title as captain.",
        side: Side::Right,
    },
    TimelineEvent {
        year: "2017",
        title: "Champions Trophy",
        description: "Named in the ICC Champions Trophy Team of the Tournament after impressive performances.",
        side: Side::Left,
    },
    TimelineEvent {
        year: "2019",
        title: "World Cup Heroics",
        description: "Scored five centuries in a single World Cup, becoming the first batsman to achieve this feat.",
        side: Side::Right,
    },
    TimelineEvent {
        year: "2021",
        title: "India Captaincy",
        description: "Appointed as India's full-time T20I and ODI captain, succeeding Virat Kohli.",
        side: Side::Left,
    },
    TimelineEvent {
        year: "2023",
        title: "World Cup Success",
        description: "Led India to the ODI World Cup final with stellar performances throughout the tournament.",
        side: Side::Right,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_events_from_debut_to_world_cup() {
        assert_eq!(TIMELINE.len(), 8);

        let first = TIMELINE.first().unwrap();
        assert_eq!((first.year, first.title), ("2007", "International Debut"));

        let last = TIMELINE.last().unwrap();
        assert_eq!((last.year, last.title), ("2023", "World Cup Success"));
    }

    #[test]
    fn sides_alternate_starting_left() {
        for (i, event) in TIMELINE.iter().enumerate() {
            let expected = if i % 2 == 0 { Side::Left } else { Side::Right };
            assert_eq!(event.side, expected, "event {}", event.year);
        }
    }

    #[test]
    fn short_year_keeps_last_two_digits() {
        assert_eq!(TIMELINE[0].short_year(), "07");
        assert_eq!(TIMELINE[7].short_year(), "23");

        let odd = TimelineEvent { year: "9", ..TIMELINE[0] };
        assert_eq!(odd.short_year(), "9");
    }
}
