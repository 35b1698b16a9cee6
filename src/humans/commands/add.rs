use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Human;
use crate::store::DataStore;
use log::info;

/// Appends `human` to the end of the register and saves once.
pub fn run<S: DataStore>(store: &mut S, human: Human) -> Result<CmdResult> {
    let mut humans = store.load()?;
    humans.push(human.clone());
    store.save(&humans)?;
    info!("added {} (now {} humans)", human.full_name(), humans.len());

    let mut result = CmdResult::default().with_affected_humans(vec![human.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Added {}.",
        human.full_name()
    )));
    Ok(result)
}
