//! Core domain logic for the notice board.
//! This crate is the single source of truth for notice invariants.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{format_date_time, Clock, SystemClock, DATE_TIME_FORMAT};
pub use config::{ConfigError, CoreConfig, DatabaseConfig, LoggingConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::notice::{
    Notice, NoticeSeq, NoticeValidationError, NoticeWithAuthor, NOTICE_YN_PINNED,
    NOTICE_YN_REGULAR,
};
pub use model::record::NoticeRecord;
pub use model::user::UserInfo;
pub use repo::notice_repo::{NoticeRepository, RepoError, RepoResult, SqliteNoticeRepository};
pub use repo::notice_store::{NoticeStore, SqliteNoticeStore};
pub use service::notice_service::{NoticeService, NoticeServiceError, NoticeServiceResult};
