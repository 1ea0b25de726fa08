use bytes::BufMut;

/// Append-only encoding into an accumulating output buffer.
///
/// Everything that produces wire bytes funnels through this one contract;
/// there is no separate allocate-and-return path, so two callers encoding
/// the same item can never disagree on the bytes.
pub trait Encode<B: BufMut> {
    fn encode(self, dst: &mut B) -> crate::Result<()>;
}
