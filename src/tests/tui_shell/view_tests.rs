use super::*;

use time::Duration;

#[test]
fn fmt_since_picks_the_largest_unit() {
    let now = OffsetDateTime::UNIX_EPOCH + Duration::days(10);
    assert_eq!(fmt_since(now - Duration::seconds(5), now), "5s ago");
    assert_eq!(fmt_since(now - Duration::minutes(3), now), "3m ago");
    assert_eq!(fmt_since(now - Duration::hours(2), now), "2h ago");
    assert_eq!(fmt_since(now - Duration::days(4), now), "4d ago");
}

#[test]
fn fmt_since_clamps_future_times() {
    let now = OffsetDateTime::UNIX_EPOCH;
    assert_eq!(fmt_since(now + Duration::seconds(30), now), "0s ago");
}

#[test]
fn centered_stays_inside_area() {
    let area = Rect {
        x: 2,
        y: 1,
        width: 40,
        height: 10,
    };
    let r = centered(area, 20, 4);
    assert_eq!((r.x, r.y, r.width, r.height), (12, 4, 20, 4));

    let big = centered(area, 100, 100);
    assert_eq!((big.x, big.y, big.width, big.height), (2, 1, 40, 10));
}
