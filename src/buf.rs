use crate::ring::RingBuffer;
use bytes::Buf;

impl<const S: usize> RingBuffer<u8, S> {
    /// Writes every remaining byte of `buf`, or nothing. `buf` is only
    /// advanced when the write succeeds.
    pub fn write_buf<B: Buf>(&mut self, mut buf: B) -> bool {
        if !self.fits(buf.remaining()) {
            return false;
        }
        while buf.has_remaining() {
            let chunk = buf.chunk();
            let n = chunk.len();
            for &b in chunk {
                self.store(b);
            }
            buf.advance(n);
        }
        true
    }
}
