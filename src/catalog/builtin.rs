use super::{Catalog, CatalogError, CatalogItem, CatalogResult};

struct Entry {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    year: i32,
    size: Option<u32>,
    image: &'static str,
    description: &'static str,
    dedicated: Option<&'static str>,
}

const ALBUM: &[Entry] = &[
    Entry {
        id: "saltlake",
        name: "Salt Lake Temple",
        location: "Salt Lake City, USA",
        year: 1893,
        size: None,
        image: "images/temples/salt-lake.jpg",
        description: "Historic temple built over many years.",
        dedicated: None,
    },
    Entry {
        id: "accra",
        name: "Accra Ghana Temple",
        location: "Accra, Ghana",
        year: 2004,
        size: None,
        image: "images/temples/accra.jpg",
        description: "Serving West Africa.",
        dedicated: None,
    },
    Entry {
        id: "lagos",
        name: "Lagos Nigeria Temple",
        location: "Lagos, Nigeria",
        year: 2022,
        size: None,
        image: "images/temples/lagos.jpg",
        description: "A recent temple in Nigeria.",
        dedicated: None,
    },
    Entry {
        id: "manila",
        name: "Manila Philippines Temple",
        location: "Manila, Philippines",
        year: 1984,
        size: None,
        image: "images/temples/manila.jpg",
        description: "Beautiful gardens and architecture.",
        dedicated: None,
    },
    Entry {
        id: "london",
        name: "London England Temple",
        location: "London, UK",
        year: 1958,
        size: None,
        image: "images/temples/london.jpg",
        description: "A center for members in the UK.",
        dedicated: None,
    },
];

const GALLERY: &[Entry] = &[
    Entry {
        id: "saltlake",
        name: "Salt Lake Temple",
        location: "Salt Lake City, USA",
        year: 1893,
        size: Some(253_000),
        image: "images2/salt1.jpg",
        description: "Historic centerpiece of Salt Lake City.",
        dedicated: None,
    },
    Entry {
        id: "lagos",
        name: "Lagos Nigeria Temple",
        location: "Lagos, Nigeria",
        year: 2019,
        size: Some(40_000),
        image: "images2/lagos.jpg",
        description: "First temple in Nigeria.",
        dedicated: None,
    },
    Entry {
        id: "laie",
        name: "Laie, Hawaii, Temple",
        location: "Laie, Hawaii, USA",
        year: 1919,
        size: Some(42_000),
        image: "images2/Laie.jpg",
        description: "Modern temple in Hawaii.",
        dedicated: None,
    },
    Entry {
        id: "manila",
        name: "Manila Philippines Temple",
        location: "Manila, Philippines",
        year: 1984,
        size: Some(19_000),
        image: "images2/manila.jpg",
        description: "Beautiful gardens and architecture.",
        dedicated: None,
    },
    Entry {
        id: "papeete",
        name: "Papeete, Tahiti Temple",
        location: "Papeete, Tahiti",
        year: 1983,
        size: Some(12_877),
        image: "images2/papeete.jpeg",
        description: "Papeete, Tahiti",
        dedicated: None,
    },
    Entry {
        id: "hongkong",
        name: "Hong Kong China Temple",
        location: "Hong Kong, China",
        year: 2016,
        size: Some(20_000),
        image: "images2/hong2.jpeg",
        description: "First temple in China.",
        dedicated: None,
    },
];

const DEDICATIONS: &[Entry] = &[
    Entry {
        id: "salt-lake",
        name: "Salt Lake Temple",
        location: "Salt Lake City, Utah, USA",
        year: 1893,
        size: Some(253_015),
        image: "image/temple3.jpg",
        description: "",
        dedicated: Some("April 6, 1893"),
    },
    Entry {
        id: "nauvoo-illinois",
        name: "Nauvoo Illinois Temple",
        location: "Nauvoo, Illinois, USA",
        year: 2002,
        size: Some(54_000),
        image: "image/nauvoo.jpeg",
        description: "",
        dedicated: Some("June 27, 2002"),
    },
    Entry {
        id: "accra-ghana",
        name: "Accra Ghana Temple",
        location: "Accra, Ghana",
        year: 2004,
        size: Some(17_500),
        image: "image/accra.jpeg",
        description: "",
        dedicated: Some("January 11, 2004"),
    },
    Entry {
        id: "aba-nigeria",
        name: "Aba Nigeria Temple",
        location: "Aba, Nigeria",
        year: 2005,
        size: Some(11_500),
        image: "image/aba.webp",
        description: "",
        dedicated: Some("August 7, 2005"),
    },
    Entry {
        id: "rome-italy",
        name: "Rome Italy Temple",
        location: "Rome, Italy",
        year: 2019,
        size: Some(41_010),
        image: "image/rome.jpeg",
        description: "",
        dedicated: Some("March 10, 2019"),
    },
    Entry {
        id: "laie-hawaii",
        name: "Laie Hawaii Temple",
        location: "Laie, Hawaii, USA",
        year: 1919,
        size: Some(42_000),
        image: "image/Laie.jpg",
        description: "",
        dedicated: Some("November 27, 1919"),
    },
    Entry {
        id: "papeete-tahiti",
        name: "Papeete Tahiti Temple",
        location: "Papeete, Tahiti",
        year: 1983,
        size: Some(12_877),
        image: "image/papeete.jpeg",
        description: "",
        dedicated: Some("October 27, 1983"),
    },
    Entry {
        id: "manhattan-new-york",
        name: "Manhattan New York Temple",
        location: "New York City, New York, USA",
        year: 2004,
        size: Some(20_630),
        image: "image/manhattan.jpeg",
        description: "",
        dedicated: Some("June 13, 2004"),
    },
    Entry {
        id: "hong-kong-china",
        name: "Hong Kong China Temple",
        location: "Hong Kong, China",
        year: 1996,
        size: Some(21_900),
        image: "image/hong.jpeg",
        description: "",
        dedicated: Some("May 26, 1996"),
    },
    Entry {
        id: "colonia-juarez-chihuahua",
        name: "Colonia Juárez Chihuahua Temple",
        location: "Colonia Juárez, Mexico",
        year: 1999,
        size: Some(6_800),
        image: "image/colonia.jpeg",
        description: "",
        dedicated: Some("March 6, 1999"),
    },
];

fn build(entries: &[Entry]) -> Catalog {
    let items = entries
        .iter()
        .map(|entry| CatalogItem {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            location: entry.location.to_string(),
            year: entry.year,
            size: entry.size,
            image: entry.image.to_string(),
            description: entry.description.to_string(),
            dedicated: entry.dedicated.map(str::to_string),
        })
        .collect();
    // Built-in tables carry unique non-empty ids.
    Catalog { items }
}

pub fn album_catalog() -> Catalog {
    build(ALBUM)
}

pub fn gallery_catalog() -> Catalog {
    build(GALLERY)
}

pub fn dedications_catalog() -> Catalog {
    build(DEDICATIONS)
}

pub fn builtin_catalog(name: &str) -> CatalogResult<Catalog> {
    match name {
        "album" => Ok(album_catalog()),
        "gallery" => Ok(gallery_catalog()),
        "dedications" => Ok(dedications_catalog()),
        other => Err(CatalogError::UnknownBuiltin(other.to_string())),
    }
}
