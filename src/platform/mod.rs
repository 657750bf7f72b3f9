//! Platform window capabilities.
//!
//! The only OS window interaction the bootstrap performs is showing or hiding
//! the process's own console window. That call is isolated behind the
//! [`ConsoleWindow`] trait so non-Windows builds and tests get a no-op or a
//! recording double instead of a `user32` dependency.

/// Show/hide capability for the process's auxiliary console window.
///
/// Stateless by contract: implementations issue the directive and retain
/// nothing. The visibility code on the wire is an integer, 0 = hidden and
/// nonzero = shown, matching the underlying `ShowWindow` contract.
#[cfg_attr(test, mockall::automock)]
pub trait ConsoleWindow {
    fn set_visible(&self, visible: bool);
}

/// Win32 console window controller.
///
/// Looks up the process's own console handle on every call; a detached
/// process (no console allocated) makes this a no-op.
#[cfg(windows)]
#[derive(Debug, Default)]
pub struct NativeConsole;

#[cfg(windows)]
impl ConsoleWindow for NativeConsole {
    fn set_visible(&self, visible: bool) {
        use winapi::um::wincon::GetConsoleWindow;
        use winapi::um::winuser::{SW_HIDE, SW_SHOWNORMAL, ShowWindow};

        unsafe {
            let hwnd = GetConsoleWindow();
            if hwnd.is_null() {
                return;
            }
            ShowWindow(hwnd, if visible { SW_SHOWNORMAL } else { SW_HIDE });
        }
    }
}

/// Console controller for platforms without a toggleable console window.
#[cfg(not(windows))]
#[derive(Debug, Default)]
pub struct NativeConsole;

#[cfg(not(windows))]
impl ConsoleWindow for NativeConsole {
    fn set_visible(&self, _visible: bool) {}
}
