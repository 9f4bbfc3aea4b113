//! Plain notice carrier used across the service boundary.
//!
//! Every field is optional: list summaries, detail views, and write
//! requests each populate a different subset. Records are built per call
//! and never reference a connection or transaction.

use crate::model::notice::{Notice, NoticeSeq, NoticeWithAuthor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_seq: Option<NoticeSeq>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_yn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_cnt: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_dt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chg_dt: Option<String>,
}

impl NoticeRecord {
    /// Record addressing one notice by key, as used by detail/delete calls.
    pub fn with_seq(notice_seq: NoticeSeq) -> Self {
        Self {
            notice_seq: Some(notice_seq),
            ..Self::default()
        }
    }

    /// List projection: `{noticeSeq, title, noticeYn, readCnt, userId, userName}`.
    pub fn summary(row: NoticeWithAuthor) -> Self {
        let NoticeWithAuthor { notice, author } = row;
        Self {
            notice_seq: notice.notice_seq,
            title: Some(notice.title),
            notice_yn: Some(notice.notice_yn),
            read_cnt: Some(notice.read_cnt),
            user_id: Some(notice.user_id),
            user_name: Some(author.user_name),
            ..Self::default()
        }
    }

    /// Detail projection:
    /// `{noticeSeq, title, noticeYn, regDt, userId, readCnt, contents}`.
    pub fn detail(notice: Notice) -> Self {
        Self {
            notice_seq: notice.notice_seq,
            title: Some(notice.title),
            notice_yn: Some(notice.notice_yn),
            reg_dt: Some(notice.reg_dt),
            user_id: Some(notice.user_id),
            read_cnt: Some(notice.read_cnt),
            contents: Some(notice.contents),
            ..Self::default()
        }
    }
}
