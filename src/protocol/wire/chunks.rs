use bytes::Bytes;

use super::{builder, types::plp};

/// The lazily produced payload chunks of one encoded parameter value.
///
/// Pull-based, finite, and not restartable: once drained it stays empty,
/// and re-encoding the same parameter requires a fresh call into
/// [`ParamType::value_chunks`](crate::ParamType::value_chunks). The caller
/// is free to interleave pulls with blocking writes; nothing is buffered
/// beyond the chunk most recently produced.
///
/// Chunk order is production order and matches the byte offsets implied
/// by the length fields already written.
pub struct ValueChunks {
    inner: Inner,
}

enum Inner {
    Eager(std::vec::IntoIter<Bytes>),
    Plp(PlpChunks<std::vec::IntoIter<Bytes>>),
}

impl ValueChunks {
    /// No payload bytes at all. NULL under the short-form and PLP
    /// strategies, where the length field already told the whole story.
    pub(crate) fn empty() -> Self {
        Self::eager(Vec::new())
    }

    /// A fixed, already-assembled chunk sequence.
    pub(crate) fn eager(chunks: Vec<Bytes>) -> Self {
        Self {
            inner: Inner::Eager(chunks.into_iter()),
        }
    }

    /// A payload wrapped in the PLP chunked framing.
    pub(crate) fn plp(payload: Vec<Bytes>) -> Self {
        Self {
            inner: Inner::Plp(PlpChunks::new(payload.into_iter())),
        }
    }
}

impl std::fmt::Debug for ValueChunks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variant = match &self.inner {
            Inner::Eager(_) => "Eager",
            Inner::Plp(_) => "Plp",
        };
        f.debug_struct("ValueChunks").field("inner", &variant).finish()
    }
}

impl Iterator for ValueChunks {
    type Item = Bytes;

    fn next(&mut self) -> Option<Bytes> {
        match &mut self.inner {
            Inner::Eager(chunks) => chunks.next(),
            Inner::Plp(chunks) => chunks.next(),
        }
    }
}

impl std::iter::FusedIterator for ValueChunks {}

/// Wraps an upstream payload source in the PLP chunked framing: every
/// non-empty source chunk is preceded by its u32 little-endian byte
/// length, and a single all-zero terminator follows the last one.
///
/// The source may yield any number of chunks; zero-length chunks are
/// skipped rather than framed, since a zero length field is the
/// terminator. The source is only polled when the consumer pulls, so a
/// streaming source never has more than one chunk in flight.
pub struct PlpChunks<I> {
    source: I,
    pending: Option<Bytes>,
    terminated: bool,
}

impl<I> PlpChunks<I>
where
    I: Iterator<Item = Bytes>,
{
    pub fn new(source: I) -> Self {
        Self {
            source,
            pending: None,
            terminated: false,
        }
    }
}

impl<I> Iterator for PlpChunks<I>
where
    I: Iterator<Item = Bytes>,
{
    type Item = Bytes;

    fn next(&mut self) -> Option<Bytes> {
        if let Some(chunk) = self.pending.take() {
            return Some(chunk);
        }

        if self.terminated {
            return None;
        }

        for chunk in self.source.by_ref() {
            if chunk.is_empty() {
                continue;
            }

            let prefix = builder::u32_le_bytes(chunk.len() as u32);
            self.pending = Some(chunk);
            return Some(prefix);
        }

        self.terminated = true;
        Some(Bytes::from_static(&plp::TERMINATOR))
    }
}

impl<I> std::iter::FusedIterator for PlpChunks<I> where I: Iterator<Item = Bytes> {}
