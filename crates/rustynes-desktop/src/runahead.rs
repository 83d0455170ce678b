//! Run-ahead system stub for latency reduction.
//!
//! **IMPLEMENTATION STATUS:** Stub/Placeholder for Phase 2
//!
//! This module provides a stub implementation of the run-ahead system.
//! Full implementation is deferred to Phase 2 (Milestone 7) when the
//! core emulator (rustynes-core) is complete and stable.
//!
//! ## What is Run-Ahead?
//!
//! Run-ahead is a latency reduction technique that speculatively executes
//! emulation ahead of the current frame using predicted input. This eliminates
//! the inherent 1-frame input latency of NES games (16.67ms at 60 FPS).
//!
//! ## How Run-Ahead Works (RA=1)
//!
//! 1. Save emulator state (savestate)
//! 2. Read user input at frame boundary
//! 3. Emulate frame N with real input → Display
//! 4. Continue to frame N+1 with SAME input (speculative)
//! 5. Save output of frame N+1
//! 6. Restore state from step 1
//! 7. Emulate frame N again with REAL input from frame N+1
//!
//! Result: Frame N displays with input from frame N+1
//! Latency reduction: 16.67ms (1 frame)
//!
//! ## MVP vs Advanced Run-Ahead
//!
//! | Feature | MVP (Stub) | Phase 2 (Full) |
//! |---------|------------|----------------|
//! | Run-Ahead Frames | N/A (disabled) | RA=0-4, auto-detect |
//! | CPU Overhead | 0% | 2-5x emulation speed |
//! | Latency Reduction | 0ms | 16-66ms (1-4 frames) |
//! | Dual-Instance Mode | No | Yes (separate audio) |
//! | Save State | N/A | Fast bincode serialization |
//! | Per-Game Profiles | No | Yes (optimal settings DB) |
//!
//! ## Phase 2 Implementation Tasks
//!
//! - Fast save state serialization (bincode, <1ms)
//! - Save state restore (in-memory, no disk I/O)
//! - Configurable RA frames (0-4)
//! - Auto-detection of optimal RA per game
//! - Dual-instance mode for pristine audio
//! - Frame delay compensation
//! - JIT input polling
//! - Per-game profile database

/// Run-ahead manager (stub implementation)
#[derive(Debug)]
pub struct RunAheadManager {
    /// Run-ahead enabled (currently always false)
    enabled: bool,

    /// Number of frames to run ahead (MVP: 0, Phase 2: 1-4)
    frames: u8,

    /// Total overhead per frame in microseconds (always 0 in stub)
    overhead_us: u64,
}

impl RunAheadManager {
    /// Create new run-ahead manager
    ///
    /// **Note:** MVP implementation always returns disabled manager.
    /// Full implementation requires complete core emulator with save states.
    #[allow(dead_code)] // Infrastructure for Phase 2
    pub fn new(_enabled: bool) -> Self {
        Self {
            enabled: false, // Always disabled in MVP
            frames: 0,
            overhead_us: 0,
        }
    }

    /// Check if run-ahead is enabled
    ///
    /// **MVP:** Always returns `false`
    #[allow(dead_code)] // Infrastructure for Phase 2
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get number of run-ahead frames
    ///
    /// **MVP:** Always returns `0`
    #[allow(dead_code)] // Infrastructure for Phase 2
    pub fn frames(&self) -> u8 {
        self.frames
    }

    /// Get run-ahead overhead in microseconds
    ///
    /// **MVP:** Always returns `0`
    #[allow(dead_code)] // Infrastructure for Phase 2
    pub fn overhead_us(&self) -> u64 {
        self.overhead_us
    }

    /// Enable/disable run-ahead
    ///
    /// **MVP:** No-op, run-ahead cannot be enabled in stub
    #[allow(dead_code)] // Infrastructure for Phase 2
    #[allow(clippy::unused_self)] // Stub method, will mutate in Phase 2
    pub fn set_enabled(&mut self, _enabled: bool) {
        // Stub: do nothing
        // Phase 2: self.enabled = enabled;
    }

    /// Set number of run-ahead frames
    ///
    /// **MVP:** No-op
    ///
    /// **Phase 2:** Valid range 0-4
    #[allow(dead_code)] // Infrastructure for Phase 2
    #[allow(clippy::unused_self)] // Stub method, will mutate in Phase 2
    pub fn set_frames(&mut self, _frames: u8) {
        // Stub: do nothing
        // Phase 2: self.frames = frames.clamp(0, 4);
    }
}

impl Default for RunAheadManager {
    fn default() -> Self {
        Self::new(false)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PHASE 2 IMPLEMENTATION NOTES
// ════════════════════════════════════════════════════════════════════════════
//
// When implementing full run-ahead in Phase 2, the following will be needed:
//
// 1. **Save State System** (rustynes-core/src/savestate.rs)
//    - Fast serialization with bincode
//    - In-memory state storage (no disk I/O)
//    - < 1ms serialization target
//
// 2. **Input State Tracking**
//    - Store previous frame input for speculation
//    - JIT input polling (read at last possible moment)
//
// 3. **Dual-Instance Mode**
//    - Separate Console instance for audio
//    - Main instance for video + input + run-ahead
//    - Audio instance runs without speculation
//
// 4. **Performance Tracking**
//    - Save time (microseconds)
//    - Restore time (microseconds)
//    - Speculative frame time (microseconds)
//    - Total overhead per frame
//
// 5. **Auto-Detection**
//    - Analyze game for optimal RA setting
//    - Detect lag frames vs non-lag frames
//    - Build per-game profile database
//
// 6. **Configuration**
//    - Add RunAheadConfig to AppConfig
//    - Per-game profile overrides
//    - UI settings in Settings::Emulation tab
//
// Example Phase 2 usage:
//
// ```rust
// let mut manager = RunAheadManager::new(true);
// manager.set_frames(1);
//
// // In main loop:
// let input = get_current_input();
// let framebuffer = manager.execute_frame(&mut console, input);
// render(framebuffer);
// ```
