use crate::model::{DisplayHuman, Human};

pub mod add;
pub mod display;
pub mod select;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_humans: Vec<Human>,
    pub listed_humans: Vec<DisplayHuman>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_humans(mut self, humans: Vec<Human>) -> Self {
        self.affected_humans = humans;
        self
    }

    pub fn with_listed_humans(mut self, humans: Vec<DisplayHuman>) -> Self {
        self.listed_humans = humans;
        self
    }
}
