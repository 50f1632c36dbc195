//! Replays recorded filesystem interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, FsReply, Interaction};

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port method.
pub struct FsReplayer {
    /// Per-method queue of interactions (in order).
    queues: HashMap<&'static str, Vec<Interaction>>,
    /// Per-method cursor tracking position.
    cursors: HashMap<&'static str, usize>,
}

impl FsReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<&'static str, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues.entry(interaction.call.method()).or_default().push(interaction.clone());
        }
        let cursors = queues.keys().map(|k| (*k, 0)).collect();
        Self { queues, cursors }
    }

    /// Return the reply to the next recorded call of the given method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the given
    /// method, printing a clear error showing what was requested versus
    /// what interactions remain.
    pub fn next_reply(&mut self, method: &str) -> FsReply {
        let Some(queue) = self.queues.get(method) else {
            let available: Vec<&str> = self.queues.keys().copied().collect();
            panic!(
                "Cassette exhausted: no interactions recorded for method={method:?}. \
                 Available methods: [{}]",
                available.join(", ")
            );
        };

        let cursor = self.cursors.get_mut(method).expect("cursor must exist");
        assert!(
            *cursor < queue.len(),
            "Cassette exhausted: all {count} interactions for method={method:?} \
             have been consumed. Last interaction was seq={last_seq}.",
            count = queue.len(),
            last_seq = queue.last().map_or(0, |i| i.seq),
        );

        let reply = queue[*cursor].reply.clone();
        *cursor += 1;
        reply
    }
}
