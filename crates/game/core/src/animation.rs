//! Frame cycling for sprite strips.
//!
//! Pure functions only: the current frame of any strip is fully determined by
//! the current tick, the tick its state was entered, and the strip length.
//!
//! ```text
//! elapsed     = tick - started_at
//! frame_index = (elapsed / TICKS_PER_FRAME) mod frame_count
//! ```

use crate::clock::Tick;

/// Number of ticks each animation frame stays on screen.
pub const TICKS_PER_FRAME: u64 = 8;

/// Returns the frame of a `frame_count`-long strip to show at `tick`.
///
/// The result is always in `[0, frame_count)`. A zero-length strip is treated
/// as a single frame.
pub fn frame_index(tick: Tick, started_at: Tick, frame_count: u32) -> u32 {
    let frames = u64::from(frame_count.max(1));
    let elapsed = tick.elapsed_since(started_at);
    ((elapsed / TICKS_PER_FRAME) % frames) as u32
}

/// True on the ticks where a new frame begins (`elapsed mod TICKS_PER_FRAME == 0`).
///
/// Action countdowns are decremented only on these ticks.
pub fn is_frame_boundary(tick: Tick, started_at: Tick) -> bool {
    tick.elapsed_since(started_at) % TICKS_PER_FRAME == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_each_frame_for_eight_ticks() {
        let start = Tick(100);
        for offset in 0..8 {
            assert_eq!(frame_index(start + offset, start, 4), 0);
        }
        assert_eq!(frame_index(start + 8, start, 4), 1);
        assert_eq!(frame_index(start + 31, start, 4), 3);
    }

    #[test]
    fn wraps_with_period_of_strip_length() {
        let start = Tick(3);
        for frame_count in 1..=6u32 {
            let period = u64::from(frame_count) * TICKS_PER_FRAME;
            for offset in 0..(period * 3) {
                let tick = start + offset;
                let index = frame_index(tick, start, frame_count);
                assert!(index < frame_count);
                assert_eq!(index, frame_index(tick + period, start, frame_count));
            }
        }
    }

    #[test]
    fn index_never_decreases_within_a_period() {
        let start = Tick(3);
        for frame_count in 1..=6u32 {
            let period = u64::from(frame_count) * TICKS_PER_FRAME;
            for cycle in 0..3 {
                let cycle_start = start + cycle * period;
                let mut previous = frame_index(cycle_start, start, frame_count);
                assert_eq!(previous, 0);
                for offset in 1..period {
                    let index = frame_index(cycle_start + offset, start, frame_count);
                    assert!(index >= previous, "frame went back at offset {offset}");
                    if offset % TICKS_PER_FRAME == 0 {
                        assert_eq!(index, previous + 1);
                    }
                    previous = index;
                }
                assert_eq!(previous, frame_count - 1);
            }
        }
    }

    #[test]
    fn zero_length_strip_is_single_frame() {
        assert_eq!(frame_index(Tick(50), Tick(0), 0), 0);
    }

    #[test]
    fn boundaries_every_eight_ticks() {
        let start = Tick(5);
        assert!(is_frame_boundary(start, start));
        assert!(!is_frame_boundary(start + 1, start));
        assert!(!is_frame_boundary(start + 7, start));
        assert!(is_frame_boundary(start + 8, start));
        assert!(is_frame_boundary(start + 16, start));
    }
}
