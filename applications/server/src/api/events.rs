/// Server-sent event stream
///
/// Pushes playback events and notices to connected clients. Clients that
/// fall behind the broadcast buffer miss events; the player snapshot
/// endpoint is the catch-up path.
use crate::state::AppState;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{Stream, StreamExt};
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;

pub async fn events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let player = BroadcastStream::new(state.engine.subscribe()).filter_map(|item| async move {
        let event = item.ok()?;
        Event::default().event("player").json_data(&event).ok()
    });

    let notices = BroadcastStream::new(state.notices.subscribe()).filter_map(|item| async move {
        let notice = item.ok()?;
        Event::default().event("notice").json_data(&notice).ok()
    });

    let stream = futures::stream::select(player, notices).map(Ok);
    Sse::new(stream).keep_alive(KeepAlive::default())
}
