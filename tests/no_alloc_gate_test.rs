use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_2048::core::{GameSession, GameSnapshot};
use tui_2048::term::{for_each_changed_run, FrameBuffer, GameView, Viewport};
use tui_2048::types::{Direction, GameAction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Both checks live in one test: the counter is process-global and the test
// harness runs tests on parallel threads.
#[test]
fn move_and_render_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    // No store is attached: persistence formats a string per improvement.
    let mut session = GameSession::new(1);
    let mut snap = GameSnapshot::default();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    // Warm-up.
    let _ = session.apply_move(Direction::Left);
    session.snapshot_into(&mut snap);
    view.render_into(&snap, vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..2000 {
            let _ = session.apply_move(Direction::ALL[i % 4]);
            if session.is_over() {
                let _ = session.apply_action(GameAction::NewGame);
            }
            session.snapshot_into(&mut snap);
        }
    });
    assert!(allocs == 0, "move/snapshot allocated {allocs} times");

    let allocs = with_alloc_counting(|| {
        for _ in 0..50 {
            view.render_into(&snap, vp, &mut fb);
        }
    });
    assert!(allocs == 0, "render allocated {allocs} times");

    // Diffing consecutive frames walks the changed runs in place.
    let shown = fb.clone();
    session.new_game();
    session.snapshot_into(&mut snap);
    view.render_into(&snap, vp, &mut fb);
    let mut changed_cells = 0u32;
    let allocs = with_alloc_counting(|| {
        for _ in 0..50 {
            for_each_changed_run(&shown, &fb, |_, _, len| {
                changed_cells += len as u32;
                Ok(())
            })
            .unwrap();
        }
    });
    assert!(allocs == 0, "diff allocated {allocs} times");
    assert!(changed_cells > 0);
}
