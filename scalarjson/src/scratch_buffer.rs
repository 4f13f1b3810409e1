// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::config::{DefaultConfig, ScratchConfig};

/// Append-only byte stack used to assemble decoded strings.
///
/// `top` is the logical size (`data.len()`), `size` the capacity we have
/// committed to. Growth may move every byte, so callers keep offsets only,
/// never references, across writes.
pub struct ScratchBuffer<C: ScratchConfig = DefaultConfig> {
    data: Vec<u8>,
    size: usize,
    _config: PhantomData<C>,
}

impl<C: ScratchConfig> ScratchBuffer<C> {
    /// Creates an empty buffer. Nothing is allocated until the first write.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            size: 0,
            _config: PhantomData,
        }
    }

    /// Logical size of the stack.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Capacity reserved so far; zero before the first write.
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Frees the allocation. The buffer must be empty.
    pub fn release(&mut self) {
        debug_assert!(self.data.is_empty(), "releasing a scratch buffer in use");
        self.data = Vec::new();
        self.size = 0;
    }

    /// Opens a frame at the current top. Everything written through the frame
    /// is discarded when the frame is dropped.
    pub fn frame(&mut self) -> ScratchFrame<'_, C> {
        let head = self.data.len();
        ScratchFrame { buffer: self, head }
    }

    fn reserve(&mut self, additional: usize) {
        let top = self.data.len();
        if top + additional < self.size {
            return;
        }
        let old_size = self.size;
        if self.size == 0 {
            self.size = C::initial_capacity();
        }
        while top + additional >= self.size {
            self.size += self.size >> 1;
        }
        log::trace!("scratch buffer grows {} -> {}", old_size, self.size);
        self.data.reserve_exact(self.size - top);
    }

    fn push(&mut self, byte: u8) {
        self.reserve(1);
        self.data.push(byte);
    }

    fn extend(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.reserve(bytes.len());
        self.data.extend_from_slice(bytes);
    }

    fn truncate(&mut self, head: usize) {
        self.data.truncate(head);
    }
}

impl<C: ScratchConfig> Default for ScratchBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A claim on the top of a [`ScratchBuffer`], starting at `head`.
///
/// Dropping the frame pops the stack back to `head` whether the owner
/// finished successfully, returned an error or unwound.
pub struct ScratchFrame<'s, C: ScratchConfig = DefaultConfig> {
    buffer: &'s mut ScratchBuffer<C>,
    head: usize,
}

impl<C: ScratchConfig> ScratchFrame<'_, C> {
    pub fn push(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes);
    }

    /// Bytes written through this frame so far.
    pub fn as_slice(&self) -> &[u8] {
        self.buffer.data.get(self.head..).unwrap_or(&[])
    }

    /// Copies the frame's bytes out and pops them off the stack.
    pub fn finish(self) -> Vec<u8> {
        self.as_slice().to_vec()
    }
}

impl<C: ScratchConfig> Drop for ScratchFrame<'_, C> {
    fn drop(&mut self) {
        self.buffer.truncate(self.head);
    }
}
