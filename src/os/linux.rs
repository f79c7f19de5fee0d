//! Operating system abstraction layer (Linux)
//!
//! On Linux, the `getrandom` system call provides direct access to the
//! kernel entropy pool. With no flags it blocks until the pool has been
//! initialized once, and never blocks afterwards.

use std::io;

use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Partial reads and `EINTR` interruptions are completed transparently;
/// both are part of a single fill, not failures. Any other error from the
/// kernel is returned as-is.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();

            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }

            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
