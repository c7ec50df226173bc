use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn interval_fires_every_period_until_cleared() {
    let mut s = VirtualScheduler::new();
    let t = s.set_interval(ms(50));
    assert_eq!(s.next_due(), Some(ms(50)));

    for i in 1..=3u64 {
        assert_eq!(s.fire_next(), Some(t));
        assert_eq!(s.now(), ms(50 * i));
    }
    s.clear(t);
    assert!(!s.is_live(t));
    assert_eq!(s.fire_next(), None);
}

#[test]
fn defer_fires_once_at_current_time() {
    let mut s = VirtualScheduler::new();
    let d = s.defer();
    assert_eq!(s.fire_next(), Some(d));
    assert_eq!(s.now(), Duration::ZERO);
    assert_eq!(s.fire_next(), None);
    assert_eq!(s.live_timers(), 0);
}

#[test]
fn ties_fire_in_id_order() {
    let mut s = VirtualScheduler::new();
    let a = s.set_interval(ms(10));
    let b = s.set_interval(ms(10));
    assert_eq!(s.fire_next(), Some(a));
    assert_eq!(s.fire_next(), Some(b));
}

#[test]
fn cleared_timer_never_fires_even_if_queued() {
    let mut s = VirtualScheduler::new();
    let a = s.set_interval(ms(10));
    let b = s.set_interval(ms(30));
    s.clear(a);
    s.clear(a);
    assert_eq!(s.fire_next(), Some(b));
    assert_eq!(s.now(), ms(30));
}

#[test]
fn fire_until_respects_horizon() {
    let mut s = VirtualScheduler::new();
    let t = s.set_interval(ms(100));
    assert_eq!(s.fire_until(ms(60)), None);
    assert_eq!(s.now(), ms(60));
    assert_eq!(s.fire_until(ms(100)), Some(t));
    assert_eq!(s.now(), ms(100));
}

#[test]
fn zero_period_is_bumped_to_one_millisecond() {
    let mut s = VirtualScheduler::new();
    let t = s.set_interval(Duration::ZERO);
    assert_eq!(s.fire_next(), Some(t));
    assert_eq!(s.now(), ms(1));
}
