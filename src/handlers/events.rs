use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, Stream};
use std::convert::Infallible;
use crate::config::Config;
use crate::services::Store;

/// Server-sent events feed of store revisions. Pages reload when a
/// `revision` event arrives, so every open view sees fresh data.
pub async fn revision_events(
    State((store, _)): State<(Store, Config)>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = store.subscribe();
    tracing::debug!("Change feed subscriber joined at revision {}", store.revision());

    let events = stream::unfold(receiver, |mut receiver| async move {
        // Ends the stream once the store is gone
        receiver.changed().await.ok()?;
        let revision = *receiver.borrow_and_update();
        let event = Event::default().event("revision").data(revision.to_string());
        Some((Ok(event), receiver))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
