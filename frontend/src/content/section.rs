/// Top-level regions of the page, in the order they are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Biography,
    Statistics,
    Timeline,
    Gallery,
    News,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Biography,
        Section::Statistics,
        Section::Timeline,
        Section::Gallery,
        Section::News,
    ];

    /// Element id, doubling as the same-page link target.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Biography => "biography",
            Section::Statistics => "statistics",
            Section::Timeline => "timeline",
            Section::Gallery => "gallery",
            Section::News => "news",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Biography => "Biography",
            Section::Statistics => "Statistics",
            Section::Timeline => "Timeline",
            Section::Gallery => "Gallery",
            Section::News => "News",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_follow_page_order() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            ["home", "biography", "statistics", "timeline", "gallery", "news"]
        );
    }

    #[test]
    fn href_points_at_anchor() {
        assert_eq!(Section::Gallery.href(), "#gallery");
        assert_eq!(Section::News.label(), "News");
    }
}
