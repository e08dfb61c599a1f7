//! Personal-list update policy.
//!
//! Reaching the last episode or chapter completes an entry: the status moves to
//! `Completed` and the completion date is stamped, unless the caller chose a
//! status outside the in-progress set or a completion date of their own.

use chrono::NaiveDate;

use crate::model::{FuzzyDate, MediaListEntry, MediaListStatus, UNKNOWN};
use crate::types::ListEntryUpdate;

impl ListEntryUpdate {
    /// Applies the completion rule for an entry with `total` episodes or
    /// chapters. `total` of [`UNKNOWN`] or zero disables the rule.
    pub fn complete_if_finished(mut self, total: i32, today: NaiveDate) -> Self {
        let Some(progress) = self.progress else {
            return self;
        };
        if total == UNKNOWN || total <= 0 || progress < total {
            return self;
        }

        let may_complete = match self.status {
            None => true,
            Some(status) => status.is_in_progress() || status == MediaListStatus::Completed,
        };
        if may_complete {
            self.status = Some(MediaListStatus::Completed);
            self.completed_at.get_or_insert(FuzzyDate::from(today));
        }
        self
    }
}

impl MediaListEntry {
    /// This entry with `update` applied locally.
    pub fn with_update(&self, update: &ListEntryUpdate) -> Self {
        let mut entry = self.clone();
        if let Some(status) = update.status {
            entry.status = status;
        }
        if let Some(score) = update.score {
            entry.score = score;
        }
        if let Some(progress) = update.progress {
            entry.progress = progress;
        }
        if let Some(volumes) = update.progress_volumes {
            entry.progress_volumes = volumes;
        }
        if let Some(repeat) = update.repeat {
            entry.repeat = repeat;
        }
        if let Some(private) = update.private {
            entry.private = private;
        }
        if let Some(notes) = &update.notes {
            entry.notes = notes.clone();
        }
        if let Some(started_at) = update.started_at {
            entry.started_at = started_at;
        }
        if let Some(completed_at) = update.completed_at {
            entry.completed_at = completed_at;
        }
        entry
    }

    /// Overlays every field the server actually returned.
    pub fn merged_with(&self, server: &MediaListEntry) -> Self {
        let pick = |ours: i32, theirs: i32| if theirs == UNKNOWN { ours } else { theirs };
        let pick_date = |ours: FuzzyDate, theirs: FuzzyDate| {
            if theirs.is_unknown() { ours } else { theirs }
        };

        Self {
            id: pick(self.id, server.id),
            media_id: pick(self.media_id, server.media_id),
            status: match server.status {
                MediaListStatus::Unknown => self.status,
                status => status,
            },
            progress: pick(self.progress, server.progress),
            progress_volumes: pick(self.progress_volumes, server.progress_volumes),
            score: if server.score == UNKNOWN as f64 {
                self.score
            } else {
                server.score
            },
            private: if server.id == UNKNOWN {
                self.private
            } else {
                server.private
            },
            notes: if server.notes.is_empty() {
                self.notes.clone()
            } else {
                server.notes.clone()
            },
            repeat: pick(self.repeat, server.repeat),
            started_at: pick_date(self.started_at, server.started_at),
            completed_at: pick_date(self.completed_at, server.completed_at),
            updated_at: if server.updated_at == UNKNOWN as i64 {
                self.updated_at
            } else {
                server.updated_at
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ListEntryUpdateBuilder;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 30).unwrap()
    }

    #[test]
    fn finishing_the_last_episode_completes() {
        let update = ListEntryUpdateBuilder::default()
            .progress(12)
            .build()
            .unwrap()
            .complete_if_finished(12, today());
        assert_eq!(update.status, Some(MediaListStatus::Completed));
        assert_eq!(update.completed_at, Some(FuzzyDate::new(2024, 3, 30)));
    }

    #[test]
    fn explicit_completion_date_is_kept() {
        let update = ListEntryUpdateBuilder::default()
            .progress(12)
            .status(MediaListStatus::Current)
            .completed_at(FuzzyDate::new(2024, 1, 1))
            .build()
            .unwrap()
            .complete_if_finished(12, today());
        assert_eq!(update.status, Some(MediaListStatus::Completed));
        assert_eq!(update.completed_at, Some(FuzzyDate::new(2024, 1, 1)));
    }

    #[test]
    fn explicit_dropped_status_wins() {
        let update = ListEntryUpdateBuilder::default()
            .progress(12)
            .status(MediaListStatus::Dropped)
            .build()
            .unwrap()
            .complete_if_finished(12, today());
        assert_eq!(update.status, Some(MediaListStatus::Dropped));
        assert!(update.completed_at.is_none());
    }

    #[test]
    fn unknown_total_never_completes() {
        let update = ListEntryUpdateBuilder::default()
            .progress(500)
            .build()
            .unwrap()
            .complete_if_finished(UNKNOWN, today());
        assert!(update.status.is_none());
    }

    #[test]
    fn server_values_win_where_present() {
        let local = MediaListEntry {
            id: 4,
            media_id: 8,
            status: MediaListStatus::Current,
            progress: 11,
            notes: "rewatch soon".into(),
            ..MediaListEntry::default()
        };
        let server = MediaListEntry {
            id: 4,
            progress: 12,
            status: MediaListStatus::Completed,
            ..MediaListEntry::default()
        };
        let merged = local.merged_with(&server);
        assert_eq!(merged.progress, 12);
        assert_eq!(merged.status, MediaListStatus::Completed);
        assert_eq!(merged.media_id, 8);
        assert_eq!(merged.notes, "rewatch soon");
    }
}
