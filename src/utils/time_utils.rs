//! 시간 변환 유틸리티

use chrono::{DateTime, Utc};

/// BSON 시간을 응답용 UTC 시간으로 변환합니다.
///
/// chrono 표현 범위를 벗어나는 값은 Unix epoch로 대체됩니다.
pub fn to_utc(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// 문서에 시간 필드가 없을 때 사용하는 값 (Unix epoch)
pub fn missing_timestamp() -> mongodb::bson::DateTime {
    mongodb::bson::DateTime::from_millis(0)
}
