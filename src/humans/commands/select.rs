use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{indexed, Human};
use crate::store::DataStore;
use log::debug;

/// Humans whose zodiac equals `zodiac` exactly, in stored order.
pub fn filter_by_zodiac(humans: Vec<Human>, zodiac: &str) -> Vec<Human> {
    humans.into_iter().filter(|h| h.zodiac == zodiac).collect()
}

/// Lists the humans born under `zodiac`, numbered from 1 within the selection.
pub fn run<S: DataStore>(store: &S, zodiac: &str) -> Result<CmdResult> {
    let humans = store.load()?;
    let total = humans.len();
    let selected = filter_by_zodiac(humans, zodiac);
    debug!(
        "selected {} of {} humans for {:?}",
        selected.len(),
        total,
        zodiac
    );
    Ok(CmdResult::default().with_listed_humans(indexed(selected)))
}
