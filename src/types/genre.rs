use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The fixed set of genre labels the catalog accepts. Serializes to the
/// exact label strings the catalog service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-fiction")]
    NonFiction,
    Fantasy,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Mystery,
    Thriller,
    Romance,
    Biography,
    History,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    Business,
    Classics,
    #[serde(rename = "Young Adult")]
    YoungAdult,
    Children,
    Poetry,
    Drama,
}

impl Genre {
    pub const ALL: [Genre; 16] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Fantasy,
        Genre::ScienceFiction,
        Genre::Mystery,
        Genre::Thriller,
        Genre::Romance,
        Genre::Biography,
        Genre::History,
        Genre::SelfHelp,
        Genre::Business,
        Genre::Classics,
        Genre::YoungAdult,
        Genre::Children,
        Genre::Poetry,
        Genre::Drama,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-fiction",
            Genre::Fantasy => "Fantasy",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Mystery => "Mystery",
            Genre::Thriller => "Thriller",
            Genre::Romance => "Romance",
            Genre::Biography => "Biography",
            Genre::History => "History",
            Genre::SelfHelp => "Self-Help",
            Genre::Business => "Business",
            Genre::Classics => "Classics",
            Genre::YoungAdult => "Young Adult",
            Genre::Children => "Children",
            Genre::Poetry => "Poetry",
            Genre::Drama => "Drama",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Genre;

    #[test]
    fn all_lists_each_genre_once() {
        let distinct: HashSet<Genre> = Genre::ALL.into_iter().collect();
        assert_eq!(distinct.len(), Genre::ALL.len());
    }

    #[test]
    fn serializes_to_the_catalog_labels() {
        for genre in Genre::ALL {
            let json = serde_json::to_string(&genre).unwrap();
            assert_eq!(json, format!("\"{}\"", genre.label()));
            let back: Genre = serde_json::from_str(&json).unwrap();
            assert_eq!(back, genre);
        }
    }
}
