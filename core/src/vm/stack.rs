//! Reusable operand scratch for plane evaluation.

use smallvec::SmallVec;

/// Backing storage for the interpreter's operand stack.
///
/// The interpreter keeps the top of the stack in a local and spills the
/// values below it into this buffer, so `max_depth` slots are exactly
/// enough for a program whose peak stack occupancy is `max_depth`. Depths
/// are a few dozen at most, so the common case lives inline without touching
/// the heap.
///
/// One instance is created per frame invocation and reused across every
/// pixel of every plane. It is per-call scratch and must not be shared
/// across threads.
pub struct OperandStack {
    slots: SmallVec<[f32; 16]>,
}

impl OperandStack {
    /// Create a stack with room for `max_depth` operands.
    pub fn new(max_depth: usize) -> Self {
        let mut slots = SmallVec::new();
        slots.resize(max_depth.max(1), 0.0);
        Self { slots }
    }

    /// The spill buffer handed to the interpreter.
    #[inline]
    pub fn slots(&mut self) -> &mut [f32] {
        &mut self.slots
    }

    /// Number of slots available.
    pub fn depth(&self) -> usize {
        self.slots.len()
    }
}
