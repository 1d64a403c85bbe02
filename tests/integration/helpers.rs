use chatterm::app::App;
use chatterm::chat::{ChannelEntry, ChatDirectory, Message, NameLookup, UserId};
use chrono::Utc;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Directory fixture: a fixed roster plus a settable typing list.
/// No real protocol client, no TUI -- just state.
pub struct TestDirectory {
    users: HashMap<UserId, String>,
    typing: RefCell<Vec<UserId>>,
}

impl TestDirectory {
    pub fn new(roster: &[(&str, &str)]) -> Self {
        let users = roster
            .iter()
            .map(|(id, name)| (UserId::from(*id), (*name).to_owned()))
            .collect();
        Self { users, typing: RefCell::new(Vec::new()) }
    }

    pub fn set_typing(&self, ids: &[&str]) {
        *self.typing.borrow_mut() = ids.iter().map(|id| UserId::from(*id)).collect();
    }
}

impl NameLookup for TestDirectory {
    fn display_name(&self, user: &UserId) -> Option<String> {
        self.users.get(user).cloned()
    }
}

impl ChatDirectory for TestDirectory {
    fn typing_users(&self, _channel: &str) -> Vec<UserId> {
        self.typing.borrow().clone()
    }
}

pub fn test_directory() -> Rc<TestDirectory> {
    Rc::new(TestDirectory::new(&[("U1", "alice"), ("U2", "bob"), ("U3", "carl")]))
}

/// Build an `App` over the standard roster with a 40x5 content viewport.
pub fn test_app() -> App {
    let mut app = App::new(test_directory());
    app.resize(40, 5);
    app
}

pub fn message(author: &str, text: &str) -> ChannelEntry {
    ChannelEntry::Message(Message {
        author: UserId::from(author),
        text: Some(text.to_owned()),
        ts: Utc::now(),
    })
}
