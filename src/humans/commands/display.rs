use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::indexed;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let humans = store.load()?;
    Ok(CmdResult::default().with_listed_humans(indexed(humans)))
}
