use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest boat name kept, in characters.
pub const MAX_NAME_CHARS: usize = 127;

/// Longest trailer tag kept, in characters.
pub const MAX_TAG_CHARS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Slip,
    Land,
    Trailer,
    Storage,
}

impl Category {
    /// Token used in the data file. Trailer keeps its historical spelling.
    pub fn token(&self) -> &'static str {
        match self {
            Category::Slip => "slip",
            Category::Land => "land",
            Category::Trailer => "trailor",
            Category::Storage => "storage",
        }
    }

    /// Case-insensitive; anything unrecognised is Storage.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("slip") {
            Category::Slip
        } else if token.eq_ignore_ascii_case("land") {
            Category::Land
        } else if token.eq_ignore_ascii_case("trailor") {
            Category::Trailer
        } else {
            Category::Storage
        }
    }
}

/// Where a boat is kept. The variant always agrees with the boat's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Slip(i32),
    Land(char),
    Trailer(String),
    Storage(i32),
}

impl Location {
    pub fn category(&self) -> Category {
        match self {
            Location::Slip(_) => Category::Slip,
            Location::Land(_) => Category::Land,
            Location::Trailer(_) => Category::Trailer,
            Location::Storage(_) => Category::Storage,
        }
    }

    /// Location used when a row carries no location field.
    pub fn default_for(category: Category) -> Self {
        match category {
            Category::Slip => Location::Slip(0),
            Category::Land => Location::Land(' '),
            Category::Trailer => Location::Trailer(String::new()),
            Category::Storage => Location::Storage(0),
        }
    }

    /// Builds a trailer location, clipping the tag to its bound.
    pub fn trailer(tag: &str) -> Self {
        Location::Trailer(clip(tag, MAX_TAG_CHARS))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Slip(n) => write!(f, "Slip #{}", n),
            Location::Land(bay) => write!(f, "Bay {}", bay),
            Location::Trailer(tag) => write!(f, "Trailer {}", tag),
            Location::Storage(n) => write!(f, "Storage #{}", n),
        }
    }
}

/// One customer record. Only `balance` changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    name: String,
    length: f64,
    location: Location,
    balance: f64,
}

impl Boat {
    pub fn new(name: &str, length: f64, location: Location, balance: f64) -> Self {
        let location = match location {
            Location::Trailer(tag) => Location::trailer(&tag),
            other => other,
        };
        Self {
            name: clip(name, MAX_NAME_CHARS),
            length,
            location,
            balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn category(&self) -> Category {
        self.location.category()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub(crate) fn charge(&mut self, amount: f64) {
        self.balance += amount;
    }

    pub(crate) fn credit(&mut self, amount: f64) {
        self.balance -= amount;
    }
}

impl fmt::Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {:.0} ft | {} | Owes: ${:.2}",
            self.name, self.length, self.location, self.balance
        )
    }
}

fn clip(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
