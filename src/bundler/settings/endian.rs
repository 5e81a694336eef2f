//! Byte order of the produced bundle.

use std::fmt;

/// Target byte order for the resource bundle.
///
/// `Host` resolves to the byte order of the machine running the build. ICU
/// data files are produced in host order by `genrb`/`pkgdata`, so anything
/// else requires a swap through `icupkg`.
///
/// # Examples
///
/// ```
/// use resbundler::bundler::Endian;
///
/// assert_eq!(Endian::Host.resolve(), Endian::host());
/// assert!(!Endian::Host.needs_swap());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Endian {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    Little,
    /// Whatever the build machine uses
    #[default]
    Host,
}

impl Endian {
    /// Byte order of the running machine.
    pub const fn host() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    /// Replaces `Host` with the concrete host byte order.
    pub const fn resolve(self) -> Self {
        match self {
            Endian::Host => Self::host(),
            other => other,
        }
    }

    /// Whether producing this byte order requires swapping the host-order bundle.
    pub fn needs_swap(self) -> bool {
        self.resolve() != Self::host()
    }

    /// Type letter understood by `icupkg -t`.
    pub fn icupkg_type(self) -> &'static str {
        match self.resolve() {
            Endian::Big => "b",
            _ => "l",
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endian::Big => "big",
            Endian::Little => "little",
            Endian::Host => "host",
        };
        f.write_str(name)
    }
}
