use crate::events::Event;
use crate::AppState;
use axum::{
    extract::State,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tracing::warn;

fn to_sse(event: &Event) -> Option<SseEvent> {
    let json = serde_json::to_string(event).ok()?;
    Some(SseEvent::default().event(event.event_type()).data(json))
}

/// Stream snapshot events. A new subscriber first receives the snapshot it
/// should render right now, then every later update.
pub(crate) async fn sse_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = state.event_hub.subscribe();
    let current = state.snapshot().await.info();

    let initial = tokio_stream::once(Event::SnapshotUpdated {
        revision: current.revision,
        sample_count: current.sample_count,
        node_count: current.node_count,
        pool_count: current.pool_count,
    });

    let updates = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => Some(event),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            warn!("SSE subscriber lagged, skipped {} events", skipped);
            None
        }
    });

    let stream =
        initial.chain(updates).filter_map(|event| to_sse(&event).map(Ok::<_, Infallible>));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
