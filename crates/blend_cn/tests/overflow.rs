use blend_cn::components::{
    compute_cutoff, OverflowConfig, OverflowController, OverflowMetrics, OverflowSplit,
};
use std::time::{Duration, Instant};

const WIDTHS: [f32; 5] = [80.0, 90.0, 70.0, 60.0, 50.0];

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Controller that has already settled at `width` with `WIDTHS` laid out
fn settled_at(t0: Instant, width: f32) -> OverflowController {
    let mut ctrl = OverflowController::new(OverflowConfig::default(), WIDTHS.len());
    ctrl.on_resize(width, t0);
    ctrl.tick(t0 + ms(150), &WIDTHS[..]);
    ctrl
}

#[test]
fn reference_row_hides_two() {
    let metrics = OverflowMetrics::default();
    let cutoff = compute_cutoff(&WIDTHS, WIDTHS.len(), 400.0, &metrics);
    let split = OverflowSplit::new(cutoff, WIDTHS.len());
    assert_eq!(cutoff, 3);
    assert_eq!(split.hidden_count(), 2);
    assert_eq!(split.visible(&WIDTHS), &[80.0f32, 90.0, 70.0]);
}

#[test]
fn oversized_single_item_stays_visible() {
    let cutoff = compute_cutoff(&[500.0f32], 1, 400.0, &OverflowMetrics::default());
    let split = OverflowSplit::new(cutoff, 1);
    assert_eq!(cutoff, 1);
    assert_eq!(split.hidden_count(), 0);
}

#[test]
fn cutoff_is_monotonic_in_width() {
    let metrics = OverflowMetrics::default();
    let rows: [&[f32]; 4] = [
        &WIDTHS,
        &[500.0f32, 20.0, 20.0],
        &[10.0f32; 12],
        &[120.0f32, 40.0, 300.0, 15.0],
    ];
    for widths in rows {
        let n = widths.len();
        let mut previous = 0;
        for step in 0..=300 {
            let container = step as f32 * 5.0;
            let cutoff = compute_cutoff(widths, n, container, &metrics);
            assert!((1..=n).contains(&cutoff), "{cutoff} out of range at {container}");
            assert!(
                cutoff >= previous,
                "cutoff dropped {previous} -> {cutoff} at {container}px for {widths:?}"
            );
            previous = cutoff;
        }
        assert_eq!(previous, n, "wide container should show everything");
    }
}

#[test]
fn small_shrink_is_ignored() {
    let t0 = Instant::now();
    let mut ctrl = settled_at(t0, 400.0);
    assert_eq!(ctrl.cutoff(), 3);
    let recomputes = ctrl.recompute_count();

    ctrl.on_resize(392.0, t0 + ms(200));
    assert!(!ctrl.tick(t0 + ms(350), &WIDTHS[..]));
    assert_eq!(ctrl.cutoff(), 3);
    assert_eq!(ctrl.recompute_count(), recomputes);
    assert_eq!(ctrl.container_width(), Some(400.0));
    assert!(!ctrl.is_settling());
}

#[test]
fn large_shrink_recomputes_immediately() {
    let t0 = Instant::now();
    let mut ctrl = settled_at(t0, 400.0);

    ctrl.on_resize(300.0, t0 + ms(200));
    assert!(ctrl.tick(t0 + ms(350), &WIDTHS[..]));
    // one chip needs 80 + 100 + 8 + 30 = 218, two would need 316
    assert_eq!(ctrl.cutoff(), 1);
    assert!(!ctrl.is_settling());
}

#[test]
fn growth_expands_then_remeasures() {
    let t0 = Instant::now();
    let mut ctrl = settled_at(t0, 300.0);
    assert_eq!(ctrl.cutoff(), 1);

    ctrl.on_resize(600.0, t0 + ms(200));
    assert!(ctrl.tick(t0 + ms(350), &WIDTHS[..1]));
    assert_eq!(ctrl.cutoff(), WIDTHS.len());
    assert!(ctrl.is_settling());

    // every chip is laid out again; 350 + 32 + 30 fits in 600
    assert!(!ctrl.tick(t0 + ms(450), &WIDTHS[..]));
    assert_eq!(ctrl.cutoff(), 5);
    assert!(!ctrl.is_settling());
}

#[test]
fn growth_below_threshold_is_ignored() {
    let t0 = Instant::now();
    let mut ctrl = settled_at(t0, 300.0);
    let recomputes = ctrl.recompute_count();

    ctrl.on_resize(340.0, t0 + ms(200));
    assert!(!ctrl.tick(t0 + ms(350), &WIDTHS[..1]));
    assert_eq!(ctrl.cutoff(), 1);
    assert_eq!(ctrl.recompute_count(), recomputes);
}

#[test]
fn resize_burst_is_debounced() {
    let t0 = Instant::now();
    let mut ctrl = OverflowController::new(OverflowConfig::default(), WIDTHS.len());
    for (i, width) in [700.0, 600.0, 500.0, 400.0].into_iter().enumerate() {
        let at = t0 + ms(i as u64 * 50);
        ctrl.on_resize(width, at);
        ctrl.tick(at, &WIDTHS[..]);
    }
    assert_eq!(ctrl.recompute_count(), 0);
    ctrl.tick(t0 + ms(300), &WIDTHS[..]);
    assert_eq!(ctrl.recompute_count(), 1);
    assert_eq!(ctrl.container_width(), Some(400.0));
    assert_eq!(ctrl.cutoff(), 3);
}

#[test]
fn unmount_cancels_pending_debounce() {
    let t0 = Instant::now();
    let mut ctrl = OverflowController::new(OverflowConfig::default(), WIDTHS.len());
    ctrl.on_resize(400.0, t0);
    ctrl.unmount();

    assert!(!ctrl.tick(t0 + ms(150), &WIDTHS[..]));
    assert!(!ctrl.tick(t0 + ms(1_000), &WIDTHS[..]));
    assert_eq!(ctrl.recompute_count(), 0);
    assert!(!ctrl.is_mounted());
    assert!(!ctrl.has_pending_work());

    ctrl.on_resize(100.0, t0 + ms(1_100));
    ctrl.on_items_changed(2, t0 + ms(1_100));
    assert!(!ctrl.on_layout_committed(&WIDTHS[..]));
    ctrl.tick(t0 + ms(2_000), &WIDTHS[..]);
    assert_eq!(ctrl.recompute_count(), 0);
}

#[test]
fn item_change_resets_to_show_all() {
    let t0 = Instant::now();
    let mut ctrl = settled_at(t0, 400.0);
    assert_eq!(ctrl.cutoff(), 3);

    ctrl.on_items_changed(4, t0 + ms(200));
    assert_eq!(ctrl.cutoff(), 4);
    assert!(ctrl.is_settling());

    let laid_out = [80.0f32, 90.0, 70.0, 160.0];
    assert!(ctrl.tick(t0 + ms(300), &laid_out[..]));
    assert_eq!(ctrl.cutoff(), 3);
}

#[test]
fn config_reads_from_toml() {
    let config: OverflowConfig = toml::from_str(
        r#"
        shrink_threshold = 4.0
        debounce_ms = 50

        [metrics]
        gap = 4.0
        "#,
    )
    .unwrap();
    assert_eq!(config.shrink_threshold, 4.0);
    assert_eq!(config.grow_threshold, 50.0);
    assert_eq!(config.debounce_ms, 50);
    assert_eq!(config.settle_ms, 100);
    let metrics = config.metrics.unwrap();
    assert_eq!(metrics.gap, 4.0);
    assert_eq!(metrics.more_trigger_width, 100.0);
}
