//! Exit handling: signal handlers and terminal restore.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the form owns the alternate screen.
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_screen_active(active: bool) {
    SCREEN_ACTIVE.store(active, Ordering::SeqCst);
}

/// Put the tty back into cooked mode using termios directly.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit. Restores what the form may have left behind if it
/// was killed before its guard could run.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    if !SCREEN_ACTIVE.load(Ordering::SeqCst) {
        return;
    }
    unsafe {
        if libc::isatty(1) == 1 {
            const RESTORE: &[u8] = b"\x1b[0m\x1b[?1049l\x1b[?25h";
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit handles the rest.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and the atexit hook. Call early in main().
pub fn install_handlers() {
    unsafe {
        // Generated passwords live in memory; keep them out of core dumps.
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);

        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}
