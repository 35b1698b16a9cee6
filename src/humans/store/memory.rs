use super::DataStore;
use crate::error::Result;
use crate::model::Human;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    humans: Vec<Human>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_humans(humans: Vec<Human>) -> Self {
        Self { humans, saves: 0 }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn humans(&self) -> &[Human] {
        &self.humans
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Human>> {
        Ok(self.humans.clone())
    }

    fn save(&mut self, humans: &[Human]) -> Result<()> {
        self.humans = humans.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Three Leos, two Virgos and an Aries, interleaved.
    pub fn mixed_zodiacs() -> InMemoryStore {
        InMemoryStore::with_humans(vec![
            Human::new("Ivan", "Ivanov", "Leo", "1990-08-01"),
            Human::new("Maria", "Petrova", "Virgo", "1992-09-03"),
            Human::new("Oleg", "Sidorov", "Leo", "1988-07-30"),
            Human::new("Anna", "Smirnova", "Aries", "1999-04-10"),
            Human::new("Pavel", "Kuznetsov", "Virgo", "1979-09-12"),
            Human::new("Olga", "Popova", "Leo", "2000-08-20"),
        ])
    }
}
