//! Lock-free audio sample ring buffer.
//!
//! The APU is the sole producer and a host audio callback is the sole
//! consumer, so the buffer needs no locking: two atomic cursors are enough
//! to make single-producer/single-consumer access safe.

use core::sync::atomic::{AtomicUsize, Ordering};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Capacity of [`AudioRingBuffer`] in samples.
pub const RING_BUFFER_CAPACITY: usize = 65_536;

/// Samples dropped from the read side on overrun (oldest samples first).
const OVERRUN_DROP_SAMPLES: usize = 1024 / core::mem::size_of::<f32>() * core::mem::size_of::<f32>();

/// Single-producer/single-consumer ring buffer of audio samples.
///
/// `push` is called by the APU after every mixed sample; `pop`/`read` are
/// called by the host audio callback. On overrun (the host falling behind)
/// the oldest 1 KB of buffered samples is dropped rather than blocking the
/// producer. On underrun (the host draining faster than the APU produces)
/// the consumer receives zero samples rather than stale data.
pub struct AudioRingBuffer {
    samples: Vec<f32>,
    capacity: usize,
    write_pos: AtomicUsize,
    read_pos: AtomicUsize,
}

impl AudioRingBuffer {
    /// Create a ring buffer with the standard capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(RING_BUFFER_CAPACITY)
    }

    /// Create a ring buffer with a custom capacity (mainly for tests).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: vec![0.0; capacity],
            capacity,
            write_pos: AtomicUsize::new(0),
            read_pos: AtomicUsize::new(0),
        }
    }

    /// Number of samples currently buffered and available for reading.
    #[must_use]
    pub fn available(&self) -> usize {
        let write = self.write_pos.load(Ordering::Acquire);
        let read = self.read_pos.load(Ordering::Acquire);
        write.wrapping_sub(read) % self.capacity
    }

    /// Free slots remaining before the buffer is full.
    #[must_use]
    pub fn free(&self) -> usize {
        self.capacity - self.available() - 1
    }

    /// Push one sample, produced by the APU.
    ///
    /// If the buffer is full, the oldest buffered samples (about 1 KB
    /// worth) are dropped to make room rather than stalling the producer.
    pub fn push(&mut self, sample: f32) {
        if self.free() == 0 {
            let read = self.read_pos.load(Ordering::Acquire);
            let drop_count = OVERRUN_DROP_SAMPLES.min(self.available());
            self.read_pos
                .store((read + drop_count) % self.capacity, Ordering::Release);
        }

        let write = self.write_pos.load(Ordering::Acquire);
        self.samples[write] = sample;
        self.write_pos
            .store((write + 1) % self.capacity, Ordering::Release);
    }

    /// Pop one sample for the host callback.
    ///
    /// Returns `0.0` (silence) on underrun rather than an `Option`, since
    /// the host audio callback must always produce a full block.
    pub fn pop(&self) -> f32 {
        let read = self.read_pos.load(Ordering::Acquire);
        let write = self.write_pos.load(Ordering::Acquire);

        if read == write {
            return 0.0;
        }

        let sample = self.samples[read];
        self.read_pos
            .store((read + 1) % self.capacity, Ordering::Release);
        sample
    }

    /// Fill `out` with buffered samples, padding with silence on underrun.
    ///
    /// Returns the number of samples actually read from the buffer (the
    /// rest of `out` is left as zero).
    pub fn read(&self, out: &mut [f32]) -> usize {
        let available = self.available();
        let to_read = out.len().min(available);

        let read = self.read_pos.load(Ordering::Acquire);
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = if i < to_read {
                self.samples[(read + i) % self.capacity]
            } else {
                0.0
            };
        }

        self.read_pos
            .store((read + to_read) % self.capacity, Ordering::Release);
        to_read
    }

    /// Reset both cursors, discarding all buffered samples.
    pub fn clear(&mut self) {
        self.read_pos.store(0, Ordering::Release);
        self.write_pos.store(0, Ordering::Release);
    }

    /// Total capacity in samples.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for AudioRingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for AudioRingBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AudioRingBuffer")
            .field("capacity", &self.capacity)
            .field("available", &self.available())
            .finish()
    }
}

impl Clone for AudioRingBuffer {
    fn clone(&self) -> Self {
        Self {
            samples: self.samples.clone(),
            capacity: self.capacity,
            write_pos: AtomicUsize::new(self.write_pos.load(Ordering::Acquire)),
            read_pos: AtomicUsize::new(self.read_pos.load(Ordering::Acquire)),
        }
    }
}
