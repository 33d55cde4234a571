use timed_animator_core::{AnimationTime, Animator, AnimatorType, TimedAnimator};

fn ms(v: f64) -> AnimationTime {
    AnimationTime::from_millis(v).unwrap()
}

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn identity(total_ms: f64, mode: AnimatorType) -> TimedAnimator<f64> {
    Animator::from_fn(|r| r)
        .to_timed(ms(total_ms), 0.0, mode)
        .expect("valid duration")
}

#[test]
fn one_time_half_half_half() {
    let mut anim = identity(1000.0, AnimatorType::OneTime);

    assert_eq!(*anim.tick(ms(500.0)), 0.5);
    assert!(!anim.finished());

    assert_eq!(*anim.tick(ms(500.0)), 1.0);
    assert!(anim.finished());

    assert_eq!(*anim.tick(ms(500.0)), 1.0);
    assert!(anim.finished());
    assert_eq!(anim.accumulated(), ms(1000.0));
}

#[test]
fn one_time_value_frozen_after_finish() {
    let mut anim = Animator::from_fn(|r| r * r * 40.0)
        .to_timed(ms(1000.0), 0.0, AnimatorType::OneTime)
        .unwrap();
    for tick in [130.0, 270.0, 333.0, 400.0] {
        anim.tick(ms(tick));
    }
    assert!(anim.finished());
    let frozen = *anim.current_value();
    assert_eq!(frozen, 40.0);
    for tick in [1.0, 16.0, 250.0, 5000.0] {
        assert_eq!(*anim.tick(ms(tick)), frozen);
        assert_eq!(anim.ratio(), 1.0);
        assert!(anim.finished());
    }
}

#[test]
fn continue_is_monotonic_and_overshoots() {
    let mut anim = identity(1000.0, AnimatorType::Continue);
    let mut last = f64::NEG_INFINITY;
    let mut first_finished = None;
    for i in 0..10 {
        let r = *anim.tick(ms(150.0));
        assert!(r >= last, "ratio went backwards at tick {i}: {last} -> {r}");
        last = r;
        if anim.finished() && first_finished.is_none() {
            first_finished = Some(i);
        }
        if first_finished.is_some() {
            assert!(anim.finished(), "finished cleared at tick {i}");
        }
    }
    // 7 * 150 = 1050 is the first accumulation >= 1000
    assert_eq!(first_finished, Some(6));
    approx(last, 1.5, 1e-12);
}

#[test]
fn restart_reports_each_crossing() {
    // 3 cycles of 1000ms in 12 equal ticks
    let mut anim = identity(1000.0, AnimatorType::Restart);
    let mut crossings = Vec::new();
    for i in 0..12 {
        let r = *anim.tick(ms(250.0));
        if anim.finished() {
            crossings.push(i);
            assert!((0.0..1.0).contains(&r), "ratio {r} after wrap");
        }
    }
    assert_eq!(crossings, vec![3, 7, 11]);
}

#[test]
fn restart_with_uneven_ticks() {
    let mut anim = identity(1000.0, AnimatorType::Restart);
    let mut wraps = Vec::new();
    for i in 0..10 {
        let r = *anim.tick(ms(300.0));
        if anim.finished() {
            wraps.push((i, r));
        }
    }
    assert_eq!(wraps.len(), 3);
    assert_eq!(wraps[0].0, 3);
    assert_eq!(wraps[1].0, 6);
    assert_eq!(wraps[2].0, 9);
    approx(wraps[0].1, 0.2, 1e-12);
    approx(wraps[1].1, 0.1, 1e-12);
    approx(wraps[2].1, 0.0, 1e-12);
}

#[test]
fn restart_single_long_tick() {
    let mut anim = identity(1000.0, AnimatorType::Restart);
    let r = *anim.tick(ms(1200.0));
    assert!(anim.finished());
    assert_eq!(anim.accumulated(), ms(200.0));
    assert_eq!(r, 0.2);
}

#[test]
fn back_and_forth_follows_reflection_rule() {
    let mut anim = identity(1000.0, AnimatorType::BackAndForth);
    let expected = [
        (0.4, false),
        (0.8, false),
        (0.4, true), // 1200 >= 1000: 1200 - 2*400
        (0.0, true),
        (-0.4, true),
        (-0.8, true),
        (-0.4, false), // dropped below zero: cleared, no reflection
        (0.0, false),
        (0.4, false),
    ];
    for (i, (ratio, finished)) in expected.iter().enumerate() {
        let r = *anim.tick(ms(400.0));
        approx(r, *ratio, 1e-12);
        assert_eq!(anim.finished(), *finished, "tick {i}");
    }
}

#[test]
fn back_and_forth_accepts_negative_ticks() {
    let mut anim = identity(1000.0, AnimatorType::BackAndForth);
    anim.tick(ms(600.0));
    let r = *anim.tick(ms(-200.0));
    approx(r, 0.4, 1e-12);
    assert!(!anim.finished());
}

#[test]
fn tick_accepts_std_duration() {
    let mut anim = identity(1000.0, AnimatorType::Continue);
    anim.tick_duration(std::time::Duration::from_millis(16));
    approx(anim.ratio(), 0.016, 1e-12);
}
