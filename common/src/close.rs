//! [`Close`] impls for std input types.

use std::fs::File;
use std::io;
use std::io::{BufReader, Cursor, Empty, Stdin, StdinLock};

use crate::Close;

macro_rules! close_by_drop {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Close for $ty {
                fn close(self) -> io::Result<()> {
                    Ok(())
                }
            }
        )+
    };
}

// Read-only handles have nothing to flush. They are released by `Drop`, which cannot report errors, so these always
// return `Ok`.
close_by_drop!(File, Empty, Stdin, StdinLock<'_>, &[u8]);

impl<T> Close for Cursor<T> {
    fn close(self) -> io::Result<()> {
        Ok(())
    }
}

/// Closing a borrowed stream only ends the borrow; the owner remains responsible for releasing it.
impl<T: ?Sized> Close for &mut T {
    fn close(self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Close> Close for Box<T> {
    fn close(self) -> io::Result<()> {
        (*self).close()
    }
}

impl<T: Close> Close for BufReader<T> {
    fn close(self) -> io::Result<()> {
        self.into_inner().close()
    }
}
