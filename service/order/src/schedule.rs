use anyhow::anyhow;
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The instant of `time` on `date` in `timezone`.
///
/// An ambiguous wall-clock time resolves to the earlier instant, a time that
/// falls into a daylight saving gap is moved forward by an hour.
pub fn localize(date: NaiveDate, time: NaiveTime, timezone: Tz) -> anyhow::Result<DateTime<Utc>> {
    let naive = date.and_time(time);
    let resolve = |naive: NaiveDateTime| match timezone.from_local_datetime(&naive) {
        LocalResult::Single(el) => Some(el),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    };
    resolve(naive)
        .or_else(|| resolve(naive + Duration::hours(1)))
        .map(|el| el.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("{naive} does not exist in timezone {timezone}."))
}
