use super::*;
use crate::foundation::core::Point;
use crate::stage::applier::RecordingApplier;
use std::cell::Cell;

const PORTRAIT: Size = Size::new(320.0, 480.0);
const LANDSCAPE: Size = Size::new(480.0, 320.0);

fn xywh(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::from_origin_size(Point::new(x, y), Size::new(w, h))
}

fn controller() -> InterpolationController<RecordingApplier> {
    InterpolationController::new(
        EndpointResolver::default(),
        RecordingApplier::new(),
        ControllerOpts::default(),
    )
    .unwrap()
}

#[derive(Debug, Default)]
struct CountingResolver {
    inner: EndpointResolver,
    calls: Cell<usize>,
    fail_width: Option<f64>,
}

impl EndpointSource for CountingResolver {
    fn resolve(&self, bounds: Size) -> FramemorphResult<FramePair> {
        self.calls.set(self.calls.get() + 1);
        if self.fail_width == Some(bounds.width) {
            return Err(FramemorphError::constraint("forced"));
        }
        self.inner.resolve(bounds)
    }
}

#[test]
fn starts_settled_at_zero_without_geometry() {
    let c = controller();
    assert_eq!(c.state(), InteractionState::Settled);
    assert_eq!(c.committed_progress(), Progress::START);
    assert_eq!(c.provisional_progress(), None);
    assert_eq!(c.frames(), None);
    assert_eq!(c.current_frame(), None);
    assert!(c.applier().frames().is_empty());
}

#[test]
fn zero_progress_applies_start_frame_exactly() {
    let mut c = controller();
    c.on_bounds_changed(PORTRAIT).unwrap();
    let pair = c.frames().unwrap();
    assert_eq!(c.applier().last(), Some(pair.start));
    assert_eq!(pair.start, xywh(38.0, 38.0, 144.0, 44.0));
    assert_eq!(c.applier().layouts(), &[PORTRAIT]);
}

#[test]
fn full_progress_applies_end_frame_exactly() {
    let mut c = controller();
    c.on_bounds_changed(PORTRAIT).unwrap();
    assert_eq!(c.set_progress(1.0), Progress::END);
    assert_eq!(c.applier().last(), Some(c.frames().unwrap().end));
    assert_eq!(c.current_frame(), Some(xywh(258.0, 338.0, 24.0, 104.0)));
}

#[test]
fn incremental_deltas_accumulate_into_provisional_progress() {
    let mut c = controller();
    c.on_bounds_changed(PORTRAIT).unwrap();

    for _ in 0..3 {
        c.on_drag_delta(50.0, 300.0).unwrap();
    }
    let expected = 150.0 / (0.7 * 300.0);
    let p = c.provisional_progress().unwrap().get();
    assert!((p - expected).abs() < 1e-12);
    assert!((p - 0.714).abs() < 1e-3);
    assert_eq!(c.state(), InteractionState::Dragging);
    assert_eq!(c.committed_progress(), Progress::START);

    let pair = c.frames().unwrap();
    assert_eq!(
        c.applier().last(),
        Some(lerp_rect(pair.start, pair.end, p))
    );

    let committed = c.on_drag_end();
    assert_eq!(committed.get(), p);
    assert_eq!(c.state(), InteractionState::Settled);
    assert_eq!(c.provisional_progress(), None);
}

#[test]
fn progress_stays_clamped_and_overshoot_is_reversible() {
    let mut c = controller();
    c.on_bounds_changed(PORTRAIT).unwrap();

    let deltas = [400.0, 900.0, -50.0, -2000.0, 1e6, -1e6, 780.0];
    for d in deltas {
        let p = c.on_drag_delta(d, 320.0).unwrap().get();
        assert!((0.0..=1.0).contains(&p), "delta {d} gave {p}");
    }

    // Total translation is back to 30: overshoot at either end was held, not accumulated.
    let p = c.provisional_progress().unwrap().get();
    assert!((p - 30.0 / (0.7 * 320.0)).abs() < 1e-9);

    c.on_drag_delta(1e9, 320.0).unwrap();
    assert_eq!(c.current_frame(), Some(c.frames().unwrap().end));
    assert_eq!(c.on_drag_end(), Progress::END);
}

#[test]
fn cumulative_translation_matches_original_pan_semantics() {
    let mut c = controller();
    c.on_bounds_changed(PORTRAIT).unwrap();
    c.set_progress(0.5);

    let p = c.on_drag_translation(-112.0, 320.0).unwrap();
    assert!((p.get() - 0.0).abs() < 1e-12);
    let p = c.on_drag_translation(-56.0, 320.0).unwrap();
    assert!((p.get() - 0.25).abs() < 1e-12);
    assert_eq!(c.committed_progress().get(), 0.5);
}

#[test]
fn drag_end_is_idempotent() {
    let mut c = controller();
    c.on_bounds_changed(PORTRAIT).unwrap();
    c.on_drag_delta(70.0, 200.0).unwrap();
    let first = c.on_drag_end();
    let applied = c.applier().frames().len();
    let second = c.on_drag_end();
    assert_eq!(first, second);
    assert_eq!(c.applier().frames().len(), applied);
}

#[test]
fn cancel_reverts_to_committed_geometry() {
    let mut c = controller();
    c.on_bounds_changed(PORTRAIT).unwrap();
    c.on_drag_delta(100.0, 320.0).unwrap();
    assert_ne!(c.applier().last(), Some(c.frames().unwrap().start));

    c.on_drag_cancelled();
    assert_eq!(c.state(), InteractionState::Settled);
    assert_eq!(c.committed_progress(), Progress::START);
    assert_eq!(c.applier().last(), Some(c.frames().unwrap().start));

    let n = c.applier().frames().len();
    c.on_drag_cancelled();
    assert_eq!(c.applier().frames().len(), n);
}

#[test]
fn bounds_change_keeps_progress_and_moves_geometry() {
    let mut c = controller();
    c.on_bounds_changed(PORTRAIT).unwrap();
    c.set_progress(0.5);
    let before = c.applier().last().unwrap();

    c.on_bounds_changed(LANDSCAPE).unwrap();
    let after = c.applier().last().unwrap();
    let pair = c.frames().unwrap();

    assert_eq!(c.committed_progress().get(), 0.5);
    assert_ne!(before, after);
    assert_eq!(after, lerp_rect(pair.start, pair.end, 0.5));
    assert_eq!(pair.end, xywh(418.0, 178.0, 24.0, 104.0));
}

#[test]
fn every_bounds_change_resolves_again() {
    let mut c = InterpolationController::new(
        CountingResolver::default(),
        RecordingApplier::new(),
        ControllerOpts::default(),
    )
    .unwrap();
    c.on_bounds_changed(PORTRAIT).unwrap();
    c.on_bounds_changed(LANDSCAPE).unwrap();
    c.on_bounds_changed(PORTRAIT).unwrap();
    assert_eq!(c.resolver().calls.get(), 3);
}

#[test]
fn failed_resolution_drops_stale_pair() {
    let resolver = CountingResolver {
        fail_width: Some(LANDSCAPE.width),
        ..CountingResolver::default()
    };
    let mut c =
        InterpolationController::new(resolver, RecordingApplier::new(), ControllerOpts::default())
            .unwrap();
    c.on_bounds_changed(PORTRAIT).unwrap();
    let applied = c.applier().frames().len();

    let err = c.on_bounds_changed(LANDSCAPE).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(c.frames(), None);
    assert_eq!(c.bounds(), Some(LANDSCAPE));

    c.set_progress(1.0);
    assert_eq!(c.applier().frames().len(), applied);
}

#[test]
fn drags_before_first_layout_update_progress_only() {
    let mut c = controller();
    let p = c.on_drag_delta(35.0, 100.0).unwrap();
    assert!((p.get() - 0.5).abs() < 1e-12);
    assert!(c.applier().frames().is_empty());
    c.on_drag_end();

    c.on_bounds_changed(PORTRAIT).unwrap();
    let pair = c.frames().unwrap();
    assert_eq!(
        c.applier().last(),
        Some(lerp_rect(pair.start, pair.end, p.get()))
    );
}

#[test]
fn set_progress_ends_active_drag() {
    let mut c = controller();
    c.on_bounds_changed(PORTRAIT).unwrap();
    c.on_drag_delta(10.0, 320.0).unwrap();
    assert_eq!(c.set_progress(-3.0), Progress::START);
    assert_eq!(c.state(), InteractionState::Settled);
    assert_eq!(c.on_drag_end(), Progress::START);
}

#[test]
fn invalid_drag_input_is_rejected() {
    let mut c = controller();
    for w in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            c.on_drag_delta(1.0, w),
            Err(FramemorphError::Validation(_))
        ));
    }
    assert!(c.on_drag_delta(f64::NAN, 100.0).is_err());
    assert_eq!(c.state(), InteractionState::Settled);
}

#[test]
fn throw_fraction_is_configurable() {
    let opts = ControllerOpts {
        drag_throw_fraction: 0.5,
        initial_progress: Progress::new(0.25),
    };
    let mut c =
        InterpolationController::new(EndpointResolver::default(), RecordingApplier::new(), opts)
            .unwrap();
    assert_eq!(c.committed_progress().get(), 0.25);
    let p = c.on_drag_delta(50.0, 200.0).unwrap();
    assert!((p.get() - 0.75).abs() < 1e-12);

    let bad = ControllerOpts {
        drag_throw_fraction: 0.0,
        ..ControllerOpts::default()
    };
    assert!(
        InterpolationController::new(EndpointResolver::default(), RecordingApplier::new(), bad)
            .is_err()
    );
}

#[test]
fn opts_json_defaults() {
    let opts: ControllerOpts = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, ControllerOpts::default());
    assert_eq!(opts.drag_throw_fraction, DEFAULT_DRAG_THROW_FRACTION);
}

#[test]
fn bounds_change_while_dragging_shows_committed_geometry() {
    let mut c = controller();
    c.on_bounds_changed(PORTRAIT).unwrap();
    let provisional = c.on_drag_delta(112.0, 320.0).unwrap();
    assert!((provisional.get() - 0.5).abs() < 1e-12);

    c.on_bounds_changed(LANDSCAPE).unwrap();
    let pair = c.frames().unwrap();

    assert_eq!(c.state(), InteractionState::Dragging);
    assert_eq!(c.provisional_progress(), Some(provisional));
    assert_eq!(c.applier().last(), Some(pair.start));
    assert_eq!(c.displayed_progress(), Progress::START);
    assert_eq!(c.current_frame(), c.applier().last());

    // The next update applies provisional progress against the new pair.
    let p = c.on_drag_delta(0.0, 480.0).unwrap();
    assert_eq!(c.displayed_progress(), p);
    assert_eq!(c.current_frame(), c.applier().last());

    c.on_drag_end();
    assert_eq!(c.committed_progress(), p);
    assert_eq!(c.state(), InteractionState::Settled);
}

#[test]
fn commit_after_bounds_change_keeps_provisional_value() {
    let mut c = controller();
    c.on_bounds_changed(PORTRAIT).unwrap();
    let provisional = c.on_drag_delta(112.0, 320.0).unwrap();
    c.on_bounds_changed(LANDSCAPE).unwrap();

    assert_eq!(c.on_drag_end(), provisional);
    assert_eq!(c.displayed_progress(), Progress::START);
}

#[test]
fn displayed_progress_before_first_render_follows_drag() {
    let mut c = controller();
    let p = c.on_drag_delta(35.0, 100.0).unwrap();
    assert_eq!(c.displayed_progress(), p);
    assert_eq!(c.current_frame(), None);
}
