use super::{Action, AppState};

/// Applies `action` to `state`, returning the next state.
///
/// Every action that touches the events or the filter recomputes
/// `filtered_events` before returning.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    let recompute = action.affects_filtered_events();

    match action {
        Action::SetUser(user) => next.user = user,
        Action::SetView(view) => next.calendar.view = view,
        Action::SetCurrentDate(date) => next.calendar.current_date = date,
        Action::SetSelectedDate(date) => next.calendar.selected_date = date,
        Action::SetEvents(events) => next.calendar.events = events,
        Action::AddEvent(event) => next.calendar.events.push(event),
        Action::UpdateEvent(event) => {
            if let Some(slot) = next.calendar.events.iter_mut().find(|e| e.id == event.id) {
                *slot = event;
            }
        }
        Action::DeleteEvent(id) => next.calendar.events.retain(|e| e.id != id),
        Action::SetFilter(filter) => next.calendar.filter = filter,
        Action::SetLoading(loading) => next.is_loading = loading,
        Action::SetNotification(message) => next.notification = message,
        Action::Unknown => {}
    }

    if recompute {
        next.calendar.recompute();
    }
    next
}
