use serde::{Deserialize, Serialize};

/// A single person in the register.
///
/// Every field is free-form text. Missing keys in the store file load as
/// empty strings so older or hand-edited files still display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Human {
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub name: String,
    // On-disk key keeps the "zodiak" spelling used by existing data files.
    #[serde(default, rename = "zodiak")]
    pub zodiac: String,
    #[serde(default)]
    pub date: String,
}

impl Human {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        zodiac: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            zodiac: zodiac.into(),
            date: date.into(),
        }
    }

    /// "Surname Name", as shown in confirmation messages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.surname, self.name)
    }
}

/// A human paired with its 1-based position in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayHuman {
    pub index: usize,
    pub human: Human,
}

/// Numbers humans from 1 in the order given.
pub fn indexed<I>(humans: I) -> Vec<DisplayHuman>
where
    I: IntoIterator<Item = Human>,
{
    humans
        .into_iter()
        .enumerate()
        .map(|(i, human)| DisplayHuman {
            index: i + 1,
            human,
        })
        .collect()
}
