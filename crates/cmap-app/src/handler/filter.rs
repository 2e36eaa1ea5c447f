//! Filter message handler.

use cmap_state::ChangeOutcome;

use super::MessageHandler;
use crate::message::FilterMessage;
use crate::state::AppState;

pub struct FilterHandler;

impl MessageHandler<FilterMessage> for FilterHandler {
    fn handle(&self, state: &mut AppState, msg: FilterMessage) -> bool {
        let outcome = match msg {
            FilterMessage::FacetChanged { facet, selection } => {
                state.filters.apply_facet_change(&facet, &selection)
            }
            FilterMessage::SetCourses(codes) => state.filters.set_courses(codes),
            FilterMessage::AddCourse(text) => state.filters.add_course(&text),
            FilterMessage::RemoveCourse(index) => state.filters.remove_course(index),
        };

        match outcome {
            ChangeOutcome::Applied => true,
            ChangeOutcome::Ignored(reason) => {
                tracing::debug!(?reason, "Filter event ignored");
                false
            }
        }
    }
}
