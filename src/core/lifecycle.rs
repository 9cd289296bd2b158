/// How the page is being left when `pagehide` fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageExit {
    /// The page is going away for good.
    Unload,
    /// The page is frozen in the back/forward cache and may be shown again.
    Cached,
}

impl PageExit {
    /// Maps `PageTransitionEvent.persisted`.
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageExit::Cached
        } else {
            PageExit::Unload
        }
    }

    /// Timers, listeners and the music are released only on a real unload;
    /// a cached page resumes with its state intact.
    pub fn releases_resources(self) -> bool {
        self == PageExit::Unload
    }
}
