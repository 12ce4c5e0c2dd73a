use serde::{Deserialize, Serialize};

/// Category selector of the gallery; exactly one applies per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[serde(rename = "all")]
    #[default]
    All,
    #[serde(rename = "before1900")]
    Before1900,
    #[serde(rename = "1900to2000")]
    Historic,
    #[serde(rename = "after2000")]
    After2000,
    #[serde(rename = "largest")]
    Largest,
    #[serde(rename = "favorites")]
    FavoritesOnly,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Before1900,
        Category::Historic,
        Category::After2000,
        Category::Largest,
        Category::FavoritesOnly,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Before1900 => "before1900",
            Category::Historic => "1900to2000",
            Category::After2000 => "after2000",
            Category::Largest => "largest",
            Category::FavoritesOnly => "favorites",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "nameAsc")]
    NameAsc,
    #[serde(rename = "yearAsc")]
    YearAsc,
    #[serde(rename = "yearDesc")]
    YearDesc,
}

impl SortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::NameAsc => "nameAsc",
            SortKey::YearAsc => "yearAsc",
            SortKey::YearDesc => "yearDesc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [SortKey::NameAsc, SortKey::YearAsc, SortKey::YearDesc]
            .into_iter()
            .find(|key| key.as_str() == value)
    }
}

/// Current selection of the gallery controls. Derived views are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub sort: Option<SortKey>,
    #[serde(default)]
    pub query: String,
}

impl FilterState {
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_string();
    }
}
