/// Named scroll destinations. Nav buttons dispatch one of these to the
/// layout-owned scroll controller instead of touching global state; the
/// section that owns the target scrolls itself into view and clears it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationTarget {
    Home,
    Features,
    GetStarted,
    Faq,
}
