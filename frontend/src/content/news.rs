#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewsItem {
    pub date: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
}

pub const NEWS: &[NewsItem] = &[
    NewsItem {
        date: "June 12, 2023",
        title: "Rohit Leads India to Victory in Thrilling Match",
        excerpt: "Captain Rohit Sharma's century helps India secure a dramatic win against Australia in the series opener.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRzZL4PmrTsmiwJQPyp__AkPEQvs2MVTDWTqQ&s",
    },
    NewsItem {
        date: "May 29, 2023",
        title: "Sharma to Lead India in Upcoming World Championship",
        excerpt: "Rohit Sharma has been confirmed as India's captain for the ICC World Championship next month.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR6SpRVA1xDPeRHId2BnorzWI_haeOic-IoTQ&s",
    },
    NewsItem {
        date: "April 14, 2023",
        title: "Rohit Climbs to Second Position in ICC Rankings",
        excerpt: "After consistent performances, Rohit Sharma has moved up to second position in the ICC ODI Rankings.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQ0bkX-Ojc2VBPLFdv6DCgM753VNUSCwkb4dg&s",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_story_first() {
        let dates: Vec<_> = NEWS.iter().map(|n| n.date).collect();
        assert_eq!(dates, ["June 12, 2023", "May 29, 2023", "April 14, 2023"]);
    }
}
