use super::*;

// =============================================================
// DirtyFlags
// =============================================================

#[test]
fn fresh_flags_are_dirty() {
    let flags = DirtyFlags::default();
    assert!(flags.pointer_moved);
    assert!(flags.style_changed);
    assert!(flags.is_dirty());
}

#[test]
fn either_flag_makes_dirty() {
    assert!(DirtyFlags { pointer_moved: true, style_changed: false }.is_dirty());
    assert!(DirtyFlags { pointer_moved: false, style_changed: true }.is_dirty());
    assert!(!DirtyFlags { pointer_moved: false, style_changed: false }.is_dirty());
}

// =============================================================
// RenderScheduler
// =============================================================

#[test]
fn first_tick_redraws() {
    let mut scheduler = RenderScheduler::new();
    let mut redraws = 0;
    assert!(scheduler.tick(|| redraws += 1));
    assert_eq!(redraws, 1);
    assert!(!scheduler.flags().is_dirty());
}

#[test]
fn clean_tick_skips_redraw() {
    let mut scheduler = RenderScheduler::new();
    scheduler.tick(|| {});
    let mut redraws = 0;
    assert!(!scheduler.tick(|| redraws += 1));
    assert!(!scheduler.tick(|| redraws += 1));
    assert_eq!(redraws, 0);
}

#[test]
fn pointer_move_triggers_exactly_one_redraw() {
    let mut scheduler = RenderScheduler::new();
    scheduler.tick(|| {});
    scheduler.mark_pointer_moved();
    scheduler.mark_pointer_moved();
    let mut redraws = 0;
    scheduler.tick(|| redraws += 1);
    scheduler.tick(|| redraws += 1);
    assert_eq!(redraws, 1);
}

#[test]
fn style_change_triggers_redraw_and_clears_both_flags() {
    let mut scheduler = RenderScheduler::new();
    scheduler.tick(|| {});
    scheduler.mark_style_changed();
    scheduler.mark_pointer_moved();
    assert!(scheduler.tick(|| {}));
    assert_eq!(scheduler.flags(), DirtyFlags { pointer_moved: false, style_changed: false });
}

// =============================================================
// CancelToken
// =============================================================

#[test]
fn token_starts_live() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn cancel_is_shared_between_clones() {
    let token = CancelToken::new();
    let observer = token.clone();
    token.cancel();
    assert!(observer.is_cancelled());
    assert!(token.is_cancelled());
}
