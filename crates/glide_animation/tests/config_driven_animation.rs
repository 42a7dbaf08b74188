//! Integration tests for config-driven animations
//!
//! These tests verify that:
//! - Options loaded from a config file drive durations
//! - Reloading the config changes animations that are already running
//! - Several transitions sharing one duration move in lock-step
//! - The scheduler reports completion exactly once per start

use std::rc::Rc;

use glide_animation::{
    available_smooth_functions, AnimationDescription, AnimationScheduler, Direction, Duration,
    Easing, LengthSource, SimpleAnimation, TimedTransition,
};
use glide_core::{ConfigOption, ManualClock, OptionValue, SharedOption};
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[derive(Deserialize)]
struct AnimateSection {
    open_animation: AnimationDescription,
    close_animation: AnimationDescription,
    minimize_duration: i32,
}

struct AnimateOptions {
    open_animation: SharedOption<AnimationDescription>,
    close_animation: SharedOption<AnimationDescription>,
    minimize_duration: SharedOption<i32>,
}

impl AnimateOptions {
    fn new() -> Self {
        Self {
            open_animation: ConfigOption::shared(
                "animate/open_animation",
                AnimationDescription::new(300, Easing::CIRCLE),
            ),
            close_animation: ConfigOption::shared(
                "animate/close_animation",
                AnimationDescription::new(300, Easing::CIRCLE),
            ),
            minimize_duration: ConfigOption::shared("animate/minimize_duration", 300),
        }
    }

    fn load(&self, source: &str) {
        let section: AnimateSection = toml::from_str(source).unwrap();
        self.open_animation.set_value(section.open_animation);
        self.close_animation.set_value(section.close_animation);
        self.minimize_duration.set_value(section.minimize_duration);
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Test that a loaded config file drives the engine
#[test]
fn test_loaded_config_drives_animation() {
    let options = AnimateOptions::new();
    options.load(
        r#"
            open_animation = "0.2s linear"
            close_animation = "150ms cubic-bezier 0.42 0 0.58 1"
            minimize_duration = 400
        "#,
    );

    assert_eq!(options.open_animation.get_value().to_string(), "200ms linear");
    assert_eq!(
        options.close_animation.get_value(),
        AnimationDescription::parse("150ms cubic-bezier 0.42 0 0.58 1").unwrap()
    );

    let clock = Rc::new(ManualClock::new());
    let mut open = SimpleAnimation::with_clock(
        LengthSource::description(options.open_animation.clone()),
        clock.clone(),
    );
    open.animate_from_to(0.0, 1.0);

    clock.advance_ms(50);
    assert_close(open.value(), 0.25);

    let minimize = Duration::with_clock(
        LengthSource::millis(options.minimize_duration.clone(), Easing::LINEAR),
        clock.clone(),
    );
    assert_eq!(minimize.length_ms(), 400);
}

/// Test that reloading the configuration affects running animations
#[test]
fn test_reload_changes_running_animation() {
    let options = AnimateOptions::new();
    options.load(
        r#"
            open_animation = "100ms linear"
            close_animation = 300
            minimize_duration = 300
        "#,
    );

    let clock = Rc::new(ManualClock::new());
    let mut open = SimpleAnimation::with_clock(
        LengthSource::description(options.open_animation.clone()),
        clock.clone(),
    );
    open.animate_from_to(10.0, 20.0);
    clock.advance_ms(50);
    assert_close(open.value(), 15.0);

    // A bad value is rejected and the previous one kept
    assert!(options.open_animation.set_value_str("100ms wobbly").is_err());
    assert_close(open.value(), 15.0);

    options.open_animation.set_value_str("0.5s linear").unwrap();
    assert_close(open.value(), 11.0);
    assert!(open.running());

    options.open_animation.set_value_str("40").unwrap();
    assert_close(open.value(), 20.0);
    assert!(open.running());
    assert!(!open.running());
}

/// Test that transitions sharing a duration stay in lock-step
#[test]
fn test_property_group_moves_in_lock_step() {
    let clock = Rc::new(ManualClock::new());
    let length = ConfigOption::shared("wobbly/duration", 200);
    let source = LengthSource::millis(length, Easing::SIGMOID);
    let duration = Duration::with_clock(source, clock.clone());

    let x = TimedTransition::new(&duration, 0.0, 400.0);
    let y = TimedTransition::new(&duration, 100.0, 300.0);
    let alpha = TimedTransition::new(&duration, 0.0, 1.0);

    duration.start();
    for _ in 0..10 {
        clock.advance_ms(20);
        let progress = duration.progress();
        assert_close(x.value(), 400.0 * progress);
        assert_close(y.value(), 100.0 + 200.0 * progress);
        assert_close(alpha.value(), progress);
    }

    duration.reverse();
    assert_eq!(duration.direction(), Direction::Reverse);
    clock.advance_ms(200);
    assert_close(alpha.value(), Easing::SIGMOID.apply(0.0));
}

/// Test that a scheduler drives configured animations to completion
#[test]
fn test_scheduler_with_configured_animations() {
    let options = AnimateOptions::new();
    options.load(
        r#"
            open_animation = "100ms easeOutElastic"
            close_animation = "300ms sigmoid"
            minimize_duration = 300
        "#,
    );

    let clock = Rc::new(ManualClock::new());
    let mut scheduler = AnimationScheduler::new();
    let open = scheduler.add(SimpleAnimation::with_clock(
        LengthSource::description(options.open_animation.clone()),
        clock.clone(),
    ));
    let close = scheduler.add(SimpleAnimation::with_clock(
        LengthSource::description(options.close_animation.clone()),
        clock.clone(),
    ));

    for (_, animation) in scheduler.iter_mut() {
        animation.animate_from_to(0.0, 1.0);
    }

    let mut finished = Vec::new();
    for _ in 0..40 {
        clock.advance_ms(10);
        finished.extend(scheduler.tick());
    }

    assert_eq!(finished, vec![open, close]);
    assert_eq!(scheduler.get(open).unwrap().value(), 1.0);
    assert_eq!(scheduler.get(close).unwrap().value(), 1.0);
    assert!(!scheduler.has_active_animations());
}

/// Test that every easing a config UI can offer round-trips through a description
#[test]
fn test_every_listed_easing_is_configurable() {
    for name in available_smooth_functions() {
        let option =
            ConfigOption::new("test/animation", AnimationDescription::new(1, Easing::LINEAR));
        option.set_value_str(&format!("2s {name}")).unwrap();

        let description = option.get_value();
        assert_eq!(description.length_ms, 2000);
        assert_eq!(description.to_string(), format!("2000ms {name}"));
        assert_eq!(AnimationDescription::parse(&description.to_string()), Some(description));
    }
}
