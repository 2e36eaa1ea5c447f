//! Preference message handler.

use super::MessageHandler;
use crate::message::PreferenceMessage;
use crate::state::AppState;

pub struct PreferenceHandler;

impl MessageHandler<PreferenceMessage> for PreferenceHandler {
    fn handle(&self, state: &mut AppState, msg: PreferenceMessage) -> bool {
        match msg {
            PreferenceMessage::Toggle(name) => state.preferences.toggle(&name).is_applied(),
        }
    }
}
