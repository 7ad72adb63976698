// tests/timer_test.rs — Integration test: work/break lifecycle with synthetic time

use std::time::{Duration, Instant};

use jonodoro::infra::errors::JonodoroError;
use jonodoro::timer::{Action, BreakEnd, FractionError, IntervalTimer, Phase};

const EPS: f64 = 1.0;

fn secs(n: f64) -> Duration {
    Duration::from_secs_f64(n)
}

/// Work for `work` seconds, stop with `fraction`, and let the break run out.
fn natural_cycle(timer: &mut IntervalTimer, t: Instant, work: f64, fraction: &str) -> Instant {
    timer.start_work(t).unwrap();
    let stop = t + secs(work);
    let plan = timer.stop_work(stop, fraction).unwrap();
    let done = stop + secs(plan.break_seconds);
    let out = timer.tick(done);
    assert!(out.finished.is_some(), "break should end at its deadline");
    done
}

#[test]
fn test_two_seconds_at_one_third() {
    let t0 = Instant::now();
    let mut timer = IntervalTimer::new();
    timer.start_work(t0).unwrap();
    let plan = timer.stop_work(t0 + secs(2.0), "1/3").unwrap();
    assert!((plan.break_seconds - 2.0 / 3.0).abs() < 0.01);

    // Still counting down just before the deadline.
    let out = timer.tick(t0 + secs(2.5));
    assert!(out.finished.is_none());
    assert!(out.reschedule);

    let out = timer.tick(t0 + secs(2.7));
    let session = out.finished.expect("break over");
    assert!(!out.reschedule);
    assert!((session.work_seconds - 2.0).abs() < EPS);
    assert!((session.break_seconds - 0.67).abs() < 0.01);
    assert_eq!(session.ended, BreakEnd::Natural);
    assert_eq!(timer.phase(), Phase::Idle);
    assert_eq!(timer.sessions().len(), 1);
}

#[test]
fn test_ten_seconds_one_to_one_ended_after_two() {
    let t0 = Instant::now();
    let mut timer = IntervalTimer::new();
    timer.start_work(t0).unwrap();
    timer.stop_work(t0 + secs(10.0), "1/1").unwrap();

    let action = timer.primary_action(t0 + secs(12.0)).unwrap();
    let session = match action {
        Action::BreakEndedEarly(s) => s,
        other => panic!("expected early end, got {other:?}"),
    };
    assert!((session.work_seconds - 10.0).abs() < EPS);
    assert!((session.break_seconds - 2.0).abs() < EPS);
    assert_eq!(session.ended, BreakEnd::Early);
    assert!(matches!(timer.phase(), Phase::Working { .. }));
}

#[test]
fn test_natural_break_matches_work_times_fraction() {
    for (work, fraction, f) in [
        (0.0, "1/3", 1.0 / 3.0),
        (60.0, "1/3", 1.0 / 3.0),
        (1500.0, "0.2", 0.2),
        (3600.0, "1", 1.0),
        (45.0, "3/2", 1.5),
    ] {
        let mut timer = IntervalTimer::new();
        natural_cycle(&mut timer, Instant::now(), work, fraction);
        let s = timer.sessions().last().unwrap();
        assert!((s.work_seconds - work).abs() < EPS, "work for {fraction}");
        assert!((s.break_seconds - work * f).abs() < EPS, "break for {fraction}");
        assert_eq!(timer.sessions().len(), 1);
    }
}

#[test]
fn test_early_end_is_shorter_than_planned() {
    let t0 = Instant::now();
    let mut timer = IntervalTimer::new();
    timer.start_work(t0).unwrap();
    let plan = timer.stop_work(t0 + secs(300.0), "1/3").unwrap();

    let session = timer.end_break(t0 + secs(340.0)).unwrap();
    let remaining = 100.0 - 40.0;
    assert!((session.break_seconds - (plan.break_seconds - remaining)).abs() < EPS);
    assert!(session.break_seconds < plan.break_seconds);
    assert!(session.break_seconds >= 0.0);
}

#[test]
fn test_early_end_immediately_records_zero_break() {
    let t0 = Instant::now();
    let mut timer = IntervalTimer::new();
    timer.start_work(t0).unwrap();
    timer.stop_work(t0 + secs(60.0), "1/3").unwrap();
    let session = timer.end_break(t0 + secs(60.0)).unwrap();
    assert!(session.break_seconds.abs() < 1e-9);
}

#[test]
fn test_log_grows_by_one_per_break() {
    let mut timer = IntervalTimer::new();
    let mut t = Instant::now();
    for n in 1..=5 {
        if n % 2 == 0 {
            timer.start_work(t).unwrap();
            timer.stop_work(t + secs(30.0), "1/2").unwrap();
            timer.end_break(t + secs(35.0)).unwrap();
            // Early end starts new work; close it out through a bad fraction.
            let _ = timer.stop_work(t + secs(36.0), "nope");
            t += secs(40.0);
        } else {
            t = natural_cycle(&mut timer, t, 20.0, "1/4");
        }
        assert_eq!(timer.sessions().len(), n);
    }
}

#[test]
fn test_malformed_fractions_leave_log_unchanged() {
    for bad in ["abc", "1/0", "", "2**10", "1/3; rm -rf /"] {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new();
        natural_cycle(&mut timer, t0, 10.0, "1/2");
        let before = timer.sessions().len();

        let t1 = t0 + secs(100.0);
        timer.start_work(t1).unwrap();
        let err = timer.stop_work(t1 + secs(50.0), bad).unwrap_err();
        assert!(
            matches!(err, JonodoroError::MalformedFraction(_)),
            "'{bad}' should be malformed"
        );
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.sessions().len(), before);

        // Ticks after the error neither record nor reschedule.
        let out = timer.tick(t1 + secs(500.0));
        assert!(out.finished.is_none());
        assert!(!out.reschedule);
        assert_eq!(timer.sessions().len(), before);
    }
}

#[test]
fn test_zero_denominator_reported() {
    let t0 = Instant::now();
    let mut timer = IntervalTimer::new();
    timer.start_work(t0).unwrap();
    let err = timer.stop_work(t0 + secs(1.0), "1/0").unwrap_err();
    assert!(matches!(
        err,
        JonodoroError::MalformedFraction(FractionError::ZeroDenominator)
    ));
}

#[test]
fn test_previous_break_does_not_leak_into_next_session() {
    let t0 = Instant::now();
    let mut timer = IntervalTimer::new();
    let t = natural_cycle(&mut timer, t0, 90.0, "1/3");
    natural_cycle(&mut timer, t, 30.0, "1/3");
    let second = &timer.sessions().as_slice()[1];
    assert!((second.work_seconds - 30.0).abs() < EPS);
    assert!((second.break_seconds - 10.0).abs() < EPS);
}

#[test]
fn test_break_display_floors_at_zero() {
    let t0 = Instant::now();
    let mut timer = IntervalTimer::new();
    timer.start_work(t0).unwrap();
    timer.stop_work(t0 + secs(6.0), "1/2").unwrap();
    let out = timer.tick(t0 + secs(60.0));
    assert_eq!(out.display.as_deref(), Some("Break: 00:00:00"));
}
