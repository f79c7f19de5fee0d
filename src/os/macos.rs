use std::io;

use libc::{arc4random_buf, c_void};

// arc4random_buf cannot fail; it is reseeded by the kernel.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut c_void, buf.len());
    }

    Ok(())
}
