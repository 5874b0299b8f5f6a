//! Local projection of the live-subscribed record collections.
//!
//! DESIGN
//! ======
//! The client holds no authoritative copy of any record; this is a
//! read-through cache fed by the initial REST fetches and then by
//! [`LiveEvent`]s from the WebSocket feed. Creation events are idempotent
//! per record id, so a record the visitor just posted appears exactly once
//! even when the REST response and the broadcast both deliver it.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use std::collections::HashMap;

use records::{Comment, CounterValue, GameScore, GuestbookEntry, LiveEvent, Testimonial};
use uuid::Uuid;

/// All record collections the page renders, keyed state for counters.
#[derive(Clone, Debug, Default)]
pub struct SiteRecords {
    pub comments: Vec<Comment>,
    pub guestbook: Vec<GuestbookEntry>,
    pub testimonials: Vec<Testimonial>,
    pub scores: Vec<GameScore>,
    pub counters: HashMap<String, i64>,
}

impl SiteRecords {
    /// Fold one live event into the projection.
    pub fn apply_event(&mut self, event: LiveEvent) {
        match event {
            LiveEvent::CommentAdded { comment } => {
                insert_once(&mut self.comments, comment, |c| c.id);
            }
            LiveEvent::CommentLiked { id, likes } => {
                if let Some(comment) = self.comments.iter_mut().find(|c| c.id == id) {
                    comment.likes = likes;
                }
            }
            LiveEvent::GuestbookAdded { entry } => {
                insert_once(&mut self.guestbook, entry, |e| e.id);
            }
            LiveEvent::TestimonialAdded { testimonial } => {
                insert_once(&mut self.testimonials, testimonial, |t| t.id);
            }
            LiveEvent::ScoreAdded { score } => {
                insert_once(&mut self.scores, score, |s| s.id);
                // Keep the leaderboard ranked: score descending.
                self.scores.sort_by(|a, b| b.score.cmp(&a.score));
            }
            LiveEvent::CounterChanged { counter: CounterValue { name, value } } => {
                self.counters.insert(name, value);
            }
        }
    }

    /// Current value of a named counter, zero when unknown.
    #[must_use]
    pub fn counter(&self, name: &str) -> i64 {
        self.counters.get(name).copied().unwrap_or(0)
    }
}

fn insert_once<T>(list: &mut Vec<T>, item: T, id: impl Fn(&T) -> Uuid) {
    let item_id = id(&item);
    if !list.iter().any(|existing| id(existing) == item_id) {
        list.push(item);
    }
}
