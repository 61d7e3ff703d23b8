use super::*;

#[test]
fn progress_bar_hidden_in_quiet_mode() {
    let progress = ScanProgress::new(100, true);
    progress.inc();
    progress.inc();
    progress.finish();
}

#[test]
fn progress_bar_counts_to_total() {
    let progress = ScanProgress::new(10, true);

    for _ in 0..10 {
        progress.inc();
    }

    assert_eq!(progress.counter.load(Ordering::Relaxed), 10);
    progress.finish();
}

#[test]
fn progress_bar_clones_share_a_counter() {
    let progress = ScanProgress::new(100, true);
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.counter.load(Ordering::Relaxed), 2);
    progress.finish();
}

#[test]
fn visible_progress_bar_renders() {
    let progress = ScanProgress::new_with_visibility(3, false, true);
    progress.inc();
    progress.finish();
}
