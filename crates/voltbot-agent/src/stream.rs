//! Word-by-word streaming of a finished reply.

use std::time::Duration;

use futures::stream::{self, Stream};
use tracing::debug;
use voltbot_core::StreamEvent;

/// Default pause between emitted fragments.
pub const DEFAULT_PACING: Duration = Duration::from_millis(30);

/// Converts a complete reply into a paced sequence of [`StreamEvent`]s.
///
/// The reply is split on single spaces without collapsing runs, so empty
/// tokens between repeated spaces survive as empty fragments. The first
/// fragment is the first token verbatim; every later fragment carries one
/// re-prepended leading space. Concatenating all `Text` fragments therefore
/// reproduces the reply byte-for-byte. After the last fragment the stream
/// yields exactly one [`StreamEvent::Done`] and ends, so the sequence has
/// token count + 1 events.
///
/// Fragments are produced on demand, one `pacing` pause apart. Dropping the
/// stream mid-way stops production without running the remaining pauses.
pub fn stream_reply(reply: &str, pacing: Duration) -> impl Stream<Item = StreamEvent> + Send {
    let tokens: Vec<String> = reply.split(' ').map(str::to_owned).collect();
    debug!(fragments = tokens.len(), "streaming reply");

    stream::unfold((tokens, 0usize), move |(tokens, idx)| async move {
        if idx > tokens.len() {
            return None;
        }
        if idx > 0 {
            tokio::time::sleep(pacing).await;
        }
        let event = if idx < tokens.len() {
            let content = if idx == 0 {
                tokens[idx].clone()
            } else {
                format!(" {}", tokens[idx])
            };
            StreamEvent::Text { content }
        } else {
            StreamEvent::Done
        };
        Some((event, (tokens, idx + 1)))
    })
}
