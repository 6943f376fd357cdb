use chrono::Utc;

/// Seconds since unix epoch, as stored in db
pub type UnixDateTime = i64;

pub struct DateTime;

impl DateTime {
    pub fn now() -> UnixDateTime {
        Utc::now().timestamp()
    }
}
