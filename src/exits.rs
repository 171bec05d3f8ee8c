//! Exit handling: exit codes, signal handlers, and process hardening.

use pgen::error::Error;

pub const FAILURE: u8 = 1;
pub const USAGE: u8 = 2;
pub const INTERRUPTED: i32 = 130;

/// Exit code for a failed run.
pub fn code_for(err: &Error) -> u8 {
    match err {
        Error::Cli(_) | Error::InvalidLength | Error::NoAlphabet => USAGE,
        _ => FAILURE,
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP.
///
/// `_exit` skips destructors and stdio flushing, so no partial string is
/// written after an interrupt.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::_exit(INTERRUPTED) }
}

/// Install signal handlers and keep generated strings out of core dumps.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
