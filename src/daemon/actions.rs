// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::Action;
use crate::services::store;
use crate::sinfo;

use super::Daemon;

impl Daemon {
    pub(super) fn exec_action(&mut self, action: Action) {
        let key = self.manager.config().store_key.clone();

        match action {
            Action::Persist => {
                store::persist_session(self.store.as_mut(), &key, &self.session);
            }

            Action::ClearStore => {
                store::clear_session(self.store.as_mut(), &key);
                sinfo!("Daemon", "session reset");
            }

            Action::Started { target, .. } => {
                sinfo!("Daemon", "{} {} started", target.role, target.ability);
            }

            Action::Cancelled { target, .. } => {
                sinfo!("Daemon", "{} {} cancelled", target.role, target.ability);
            }
        }
    }
}
