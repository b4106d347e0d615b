//! Shared shape of editable CMS entities.
//!
//! Service pages, posts and team members all carry the same audit and
//! lifecycle fields: an id, a visibility flag, soft-delete via a
//! `removed_at` timestamp, and created/updated stamps. Visibility and
//! soft-delete are independent axes; restoring a removed entity leaves
//! its visibility flag exactly as it was.

use chrono::{DateTime, Utc};

/// Access to the uniform lifecycle fields of a CMS entity.
pub trait CmsRecord {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);

    fn visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    fn removed_at(&self) -> Option<DateTime<Utc>>;
    fn set_removed_at(&mut self, removed_at: Option<DateTime<Utc>>);

    /// Stamps both audit timestamps; called once at creation.
    fn stamp_created(&mut self, now: DateTime<Utc>);

    /// Refreshes `updated_at`; called on every mutation.
    fn touch(&mut self, now: DateTime<Utc>);

    /// Whether the entity appears in default (public) listings.
    fn listed(&self) -> bool {
        self.visible() && self.removed_at().is_none()
    }
}
