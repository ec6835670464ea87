//! The `Result<Value, Error>` shape returned by every protocol decoder tick.
//!
//! This is distinct from `crate::errors::Result`: an `Err` here does not
//! mean "exceptional failure", it means "the decoder detected a protocol
//! violation this sample and reset itself" (see SPEC_FULL §7). A decoder
//! tick that simply needs more data returns `Ok` with an *empty* value,
//! which is why this is a value type rather than `std::result::Result`
//! alone would suggest.

pub type DecodeResult<Value, Error> = std::result::Result<Value, Error>;

/// Combine two decode results produced from the same input sample by two
/// cooperating decoder stages (e.g. SSTV's line-sync detector and line
/// decoder). Concatenates values if both succeeded; if either is an error,
/// the error propagates and any value already produced by the other stage
/// is dropped per SPEC_FULL §4.25 ("if either is an error, the error
/// propagates").
pub fn combine<Value, Error>(
    first: DecodeResult<Value, Error>,
    second: DecodeResult<Value, Error>,
) -> DecodeResult<Value, Error>
where
    Value: Extend<<Value as IntoIterator>::Item> + IntoIterator,
{
    match (first, second) {
        (Ok(mut a), Ok(b)) => {
            a.extend(b);
            Ok(a)
        }
        (Err(e), _) => Err(e),
        (_, Err(e)) => Err(e),
    }
}
