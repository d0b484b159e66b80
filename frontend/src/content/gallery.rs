#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        src: "https://img.theweek.in/content/dam/week/magazine/theweek/sports/images/2023/11/25/56-Rohit-Sharma.jpg",
        alt: "Cricket Match Action",
    },
    GalleryImage {
        src: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSN4sH5w5FOiE33MY6mYmOYYbMRCsQR53U-Nw&s",
        alt: "Cricket Stadium",
    },
    GalleryImage {
        src: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTZDX5ZHC54p0P5D2cmiRIc8lI-QheNlwxV1w&s",
        alt: "Cricket Celebration",
    },
    GalleryImage {
        src: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTCafSZFbWWGOQbU-I8r8RbTXTaKz_JtySnwA&s",
        alt: "Cricket Team",
    },
    GalleryImage {
        src: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRKUzoCWvtbNQsyhgvlYFaz0950_ZjNiRpvOg&s",
        alt: "Cricket Trophy",
    },
    GalleryImage {
        src: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR6SpRVA1xDPeRHId2BnorzWI_haeOic-IoTQ&s",
        alt: "Cricket Fans",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_images_in_order() {
        let alts: Vec<_> = GALLERY.iter().map(|img| img.alt).collect();
        assert_eq!(
            alts,
            [
                "Cricket Match Action",
                "Cricket Stadium",
                "Cricket Celebration",
                "Cricket Team",
                "Cricket Trophy",
                "Cricket Fans",
            ]
        );
        assert!(GALLERY.iter().all(|img| img.src.starts_with("https://")));
    }
}
