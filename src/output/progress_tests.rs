use rayon::prelude::*;

use super::*;

#[test]
fn hidden_in_quiet_mode() {
    let progress = ScanProgress::new(3, true);
    progress.inc();
    progress.inc();
    assert_eq!(progress.position(), 2);
    progress.finish();
}

#[test]
fn visible_bar_counts() {
    let progress = ScanProgress::new_with_visibility(5, false, true);
    for _ in 0..5 {
        progress.inc();
    }
    assert_eq!(progress.position(), 5);
    progress.finish();
}

#[test]
fn clones_share_counter_across_threads() {
    let progress = ScanProgress::new(100, true);
    (0..100).into_par_iter().for_each(|_| progress.clone().inc());
    assert_eq!(progress.position(), 100);
}
