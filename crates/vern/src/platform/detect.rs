use std::fmt;

#[cfg(all(target_os = "windows", not(target_pointer_width = "64")))]
compile_error!("x86 builds are not supported!");

#[cfg(all(target_vendor = "apple", not(target_os = "macos")))]
compile_error!("unknown Apple platform!");

#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "linux",
    target_os = "android",
    target_vendor = "apple",
)))]
compile_error!("unknown platform!");

/// Operating system the engine was compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

/// Platform of the current build.
pub const CURRENT_PLATFORM: Platform = Platform::current();

impl Platform {
    /// Returns the platform selected by the compilation target. Android
    /// reports `Linux`.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }

    pub const fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }

    pub const fn is_macos(self) -> bool {
        matches!(self, Platform::MacOs)
    }

    pub const fn is_linux(self) -> bool {
        matches!(self, Platform::Linux)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
