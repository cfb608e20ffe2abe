//! Explicit, fallible resource release.
//!
//! `Drop` cannot report failure. Types whose release can fail (flushing a
//! writer, closing a connection, removing a lock file) implement [`Dispose`]
//! and are released together with [`dispose_all`], which reports every
//! failure as a traced result instead of stopping at the first one.
//!
//! # Examples
//!
//! ```
//! use trace_rail::traits::{dispose_all, Dispose};
//!
//! struct TempFile {
//!     removed: bool,
//! }
//!
//! impl Dispose for TempFile {
//!     type Error = std::io::Error;
//!
//!     fn dispose(&mut self) -> Result<(), Self::Error> {
//!         self.removed = true;
//!         Ok(())
//!     }
//! }
//!
//! let mut files = vec![TempFile { removed: false }, TempFile { removed: false }];
//! let released = dispose_all(&mut files);
//!
//! assert!(released.is_success());
//! assert!(files.iter().all(|f| f.removed));
//! ```

use crate::types::{BoxError, Error, Traced};

/// A resource with a fallible release step.
pub trait Dispose {
    /// Error reported when release fails.
    type Error: Into<BoxError>;

    /// Releases the resource.
    fn dispose(&mut self) -> Result<(), Self::Error>;
}

/// Releases every item in order, exactly once each.
///
/// A failing item does not stop the walk: every item is attempted, and each
/// failure is recorded as an exceptional [`Error`] carrying its position in
/// `index` metadata. The result is successful only when every release
/// succeeded.
pub fn dispose_all<'a, D, I>(items: I) -> Traced
where
    I: IntoIterator<Item = &'a mut D>,
    D: Dispose + 'a,
{
    let mut released = Traced::ok(());
    for (index, item) in items.into_iter().enumerate() {
        if let Err(error) = item.dispose() {
            let error = Error::exceptional(error).meta("index", index);
            trace_event!(warn, index, error = %error, "dispose failed");
            released = released.with_error(error);
        }
    }
    released
}

/// Method form of [`dispose_all`] for slices.
pub trait DisposeAll {
    fn dispose_all(&mut self) -> Traced;
}

impl<D: Dispose> DisposeAll for [D] {
    #[inline]
    fn dispose_all(&mut self) -> Traced {
        dispose_all(self.iter_mut())
    }
}
