/*
allocation accounting for the benchmark trials. Counts live bytes through
a wrapper around the system allocator and keeps a peak watermark that a
trial resets before the measured call and reads after it.
 */

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

static ALLOCATED: AtomicU64 = AtomicU64::new(0);
static PEAK: AtomicU64 = AtomicU64::new(0);

pub struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            record_allocation(layout.size() as u64);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        ALLOCATED.fetch_sub(layout.size() as u64, Ordering::Relaxed);
    }
}

fn record_allocation(size: u64) {
    let new_total = ALLOCATED.fetch_add(size, Ordering::Relaxed) + size;
    let mut current_peak = PEAK.load(Ordering::Relaxed);
    while new_total > current_peak {
        match PEAK.compare_exchange_weak(
            current_peak,
            new_total,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => break,
            Err(actual) => current_peak = actual,
        }
    }
}

/// Collapses the watermark to the current allocation level, so the next
/// reading only reflects allocations made after this call.
pub fn reset_peak() {
    PEAK.store(ALLOCATED.load(Ordering::Relaxed), Ordering::Relaxed);
}

pub fn peak_bytes() -> u64 {
    PEAK.load(Ordering::Relaxed)
}
