//! Notice entity.
//!
//! # Invariants
//! - `notice_seq` is `None` only before the first insert, and immutable after.
//! - `notice_yn` is exactly `"Y"` (pinned) or `"N"`.
//! - `read_cnt` never decreases over the life of a notice.
//! - `reg_id`/`reg_dt` are written once at insert; `chg_id`/`chg_dt` on
//!   every write.

use crate::model::user::UserInfo;
use serde::{Deserialize, Serialize};

/// Store-assigned notice primary key.
pub type NoticeSeq = i64;

/// Flag value marking a pinned notice.
pub const NOTICE_YN_PINNED: &str = "Y";
/// Flag value marking a regular notice.
pub const NOTICE_YN_REGULAR: &str = "N";

/// Validation failures for notice writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoticeValidationError {
    #[error("notice_yn must be `Y` or `N`, got `{0}`")]
    InvalidNoticeYn(String),
    #[error("read_cnt must be non-negative, got {0}")]
    NegativeReadCount(i64),
}

/// Persistent notice row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub notice_seq: Option<NoticeSeq>,
    pub title: String,
    pub contents: String,
    /// `"Y"` floats the notice above regular ones in list views.
    pub notice_yn: String,
    pub read_cnt: i64,
    /// Author; logical FK to `user_info.user_id`.
    pub user_id: String,
    pub reg_id: String,
    /// `yyyy-MM-dd HH:mm:ss`, see [`crate::clock::format_date_time`].
    pub reg_dt: String,
    pub chg_id: String,
    pub chg_dt: String,
}

impl Notice {
    /// Builds a not-yet-persisted notice stamped as created and changed by
    /// `user_id` at `now`, with a zero read counter.
    pub fn draft(
        title: impl Into<String>,
        contents: impl Into<String>,
        notice_yn: impl Into<String>,
        user_id: impl Into<String>,
        now: impl Into<String>,
    ) -> Self {
        let user_id = user_id.into();
        let now = now.into();
        Self {
            notice_seq: None,
            title: title.into(),
            contents: contents.into(),
            notice_yn: notice_yn.into(),
            read_cnt: 0,
            reg_id: user_id.clone(),
            reg_dt: now.clone(),
            chg_id: user_id.clone(),
            chg_dt: now,
            user_id,
        }
    }

    /// Returns whether the notice is pinned above regular ones.
    pub fn is_pinned(&self) -> bool {
        self.notice_yn == NOTICE_YN_PINNED
    }

    /// Checks field-level invariants before persistence.
    pub fn validate(&self) -> Result<(), NoticeValidationError> {
        if !is_valid_notice_yn(&self.notice_yn) {
            return Err(NoticeValidationError::InvalidNoticeYn(
                self.notice_yn.clone(),
            ));
        }
        if self.read_cnt < 0 {
            return Err(NoticeValidationError::NegativeReadCount(self.read_cnt));
        }
        Ok(())
    }
}

/// Returns whether `value` is an accepted pinned flag.
pub fn is_valid_notice_yn(value: &str) -> bool {
    value == NOTICE_YN_PINNED || value == NOTICE_YN_REGULAR
}

/// Notice joined with its author for list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeWithAuthor {
    pub notice: Notice,
    pub author: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::{Notice, NoticeValidationError};

    #[test]
    fn draft_stamps_created_and_changed_fields_alike() {
        let notice = Notice::draft("t", "c", "N", "u1", "2024-01-02 13:04:05");
        assert_eq!(notice.notice_seq, None);
        assert_eq!(notice.read_cnt, 0);
        assert_eq!(notice.reg_id, "u1");
        assert_eq!(notice.chg_id, "u1");
        assert_eq!(notice.reg_dt, notice.chg_dt);
        assert!(!notice.is_pinned());
    }

    #[test]
    fn validate_rejects_unknown_pin_flag() {
        let notice = Notice::draft("t", "c", "y", "u1", "2024-01-02 13:04:05");
        assert_eq!(
            notice.validate(),
            Err(NoticeValidationError::InvalidNoticeYn("y".to_string()))
        );

        let empty = Notice::draft("t", "c", "", "u1", "2024-01-02 13:04:05");
        assert!(empty.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_read_count() {
        let mut notice = Notice::draft("t", "c", "Y", "u1", "2024-01-02 13:04:05");
        assert!(notice.validate().is_ok());
        notice.read_cnt = -1;
        assert_eq!(
            notice.validate(),
            Err(NoticeValidationError::NegativeReadCount(-1))
        );
    }
}
