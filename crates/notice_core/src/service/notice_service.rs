//! Notice use-case service.
//!
//! # Responsibility
//! - Provide list/detail/insert/update/delete entry points over plain
//!   `NoticeRecord` values.
//! - Normalize absent text input to empty strings before use.
//! - Decide when the read-count side effect applies and which calls must
//!   share one transaction.
//!
//! # Invariants
//! - Detail with increment runs increment and read-back in one write
//!   transaction, so the returned `read_cnt` includes this call's view.
//! - Update never resets `read_cnt` and never rewrites `reg_id`/`reg_dt`.
//! - Created/changed stamps use the 24-hour `yyyy-MM-dd HH:mm:ss` format.

use crate::clock::{format_date_time, Clock, SystemClock};
use crate::model::notice::{Notice, NoticeSeq};
use crate::model::record::NoticeRecord;
use crate::repo::notice_repo::{NoticeRepository, RepoError};
use crate::repo::notice_store::NoticeStore;
use log::{debug, info};

/// Service error for notice use-cases.
#[derive(Debug, thiserror::Error)]
pub enum NoticeServiceError {
    /// No notice exists for the requested key.
    #[error("notice not found: {0}")]
    NotFound(NoticeSeq),
    /// Caller-side precondition violation.
    #[error("invalid notice input: {0}")]
    InvalidInput(String),
    /// Persistence-layer failure.
    #[error("notice storage unavailable: {0}")]
    StorageUnavailable(#[source] RepoError),
}

impl From<RepoError> for NoticeServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(notice_seq) => Self::NotFound(notice_seq),
            RepoError::Validation(err) => Self::InvalidInput(err.to_string()),
            RepoError::Constraint(message) => Self::InvalidInput(message),
            other => Self::StorageUnavailable(other),
        }
    }
}

pub type NoticeServiceResult<T> = Result<T, NoticeServiceError>;

/// Notice service facade over a transactional store.
pub struct NoticeService<S: NoticeStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
}

impl<S: NoticeStore> NoticeService<S> {
    /// Creates a service stamping writes with local server time.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: NoticeStore, C: Clock> NoticeService<S, C> {
    /// Creates a service with an explicit time source.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Lists every notice with an existing author, pinned first then newest.
    pub fn get_notice_list(&mut self) -> NoticeServiceResult<Vec<NoticeRecord>> {
        info!("event=notice_list module=service status=start");

        let rows = self.store.read(|repo| repo.list_with_author())?;
        let records: Vec<NoticeRecord> = rows.into_iter().map(NoticeRecord::summary).collect();

        info!(
            "event=notice_list module=service status=ok count={}",
            records.len()
        );
        Ok(records)
    }

    /// Reads one notice, first counting a view when `increment_view` is set.
    pub fn get_notice_info(
        &mut self,
        input: &NoticeRecord,
        increment_view: bool,
    ) -> NoticeServiceResult<NoticeRecord> {
        let notice_seq = require_seq(input)?;
        info!(
            "event=notice_detail module=service status=start notice_seq={notice_seq} increment={increment_view}"
        );

        let notice = if increment_view {
            self.store.write(|repo| {
                let affected = repo.increment_read_count(notice_seq)?;
                debug!(
                    "event=notice_read_count module=service notice_seq={notice_seq} affected={affected}"
                );
                load_notice(repo, notice_seq)
            })?
        } else {
            self.store.read(|repo| load_notice(repo, notice_seq))?
        };

        info!(
            "event=notice_detail module=service status=ok notice_seq={notice_seq} read_cnt={}",
            notice.read_cnt
        );
        Ok(NoticeRecord::detail(notice))
    }

    /// Creates a notice and returns its store-assigned key.
    pub fn insert_notice_info(&mut self, input: &NoticeRecord) -> NoticeServiceResult<NoticeSeq> {
        info!("event=notice_insert module=service status=start");

        let now = format_date_time(self.clock.now());
        let draft = Notice::draft(
            nvl(&input.title),
            nvl(&input.contents),
            nvl(&input.notice_yn),
            nvl(&input.user_id),
            now,
        );

        let saved = self.store.write(|repo| repo.save(&draft))?;
        let notice_seq = saved
            .notice_seq
            .ok_or_else(|| RepoError::InvalidData("insert returned no notice_seq".to_string()))?;

        info!("event=notice_insert module=service status=ok notice_seq={notice_seq}");
        Ok(notice_seq)
    }

    /// Replaces title, pin flag and contents of an existing notice.
    ///
    /// The read counter and created stamps are carried over from the stored
    /// row; changed stamps are refreshed.
    pub fn update_notice_info(&mut self, input: &NoticeRecord) -> NoticeServiceResult<()> {
        let notice_seq = require_seq(input)?;
        info!("event=notice_update module=service status=start notice_seq={notice_seq}");

        let now = format_date_time(self.clock.now());
        let saved = self.store.write(|repo| -> NoticeServiceResult<Notice> {
            let current = load_notice(repo, notice_seq)?;

            let user_id = nvl(&input.user_id);
            let replacement = Notice {
                notice_seq: Some(notice_seq),
                title: nvl(&input.title),
                notice_yn: nvl(&input.notice_yn),
                contents: nvl(&input.contents),
                chg_id: user_id,
                chg_dt: now,
                ..current
            };
            Ok(repo.save(&replacement)?)
        })?;

        info!(
            "event=notice_update module=service status=ok notice_seq={notice_seq} read_cnt={}",
            saved.read_cnt
        );
        Ok(())
    }

    /// Deletes a notice; deleting a missing notice succeeds.
    pub fn delete_notice_info(&mut self, input: &NoticeRecord) -> NoticeServiceResult<()> {
        let notice_seq = require_seq(input)?;
        info!("event=notice_delete module=service status=start notice_seq={notice_seq}");

        let affected = self.store.write(|repo| repo.delete_by_id(notice_seq))?;

        info!(
            "event=notice_delete module=service status=ok notice_seq={notice_seq} affected={affected}"
        );
        Ok(())
    }
}

fn load_notice(
    repo: &dyn NoticeRepository,
    notice_seq: NoticeSeq,
) -> NoticeServiceResult<Notice> {
    repo.find_by_id(notice_seq)?
        .ok_or(NoticeServiceError::NotFound(notice_seq))
}

fn require_seq(input: &NoticeRecord) -> NoticeServiceResult<NoticeSeq> {
    input
        .notice_seq
        .ok_or_else(|| NoticeServiceError::InvalidInput("noticeSeq is required".to_string()))
}

/// Null-coalesces optional text input to an owned string.
fn nvl(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
