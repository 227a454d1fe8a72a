//! Dispatch and activation policies.

/// How a fired event chooses among the callbacks bound to it.
///
/// Both policies scan bindings in registration order; activation state only
/// filters, it never reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchPolicy {
    /// Invoke every binding whose space is active.
    #[default]
    AllActive,
    /// Invoke only the first binding whose space is inactive, then stop.
    FirstInactive,
}

/// Where space activation state lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpaceScope {
    /// Each node owns its spaces. Activation is additive and referenced spaces
    /// are created on demand.
    #[default]
    PerElement,
    /// One registry shared by every node. Activation is exclusive: activating
    /// a space deactivates every other one.
    Global,
}

impl DispatchPolicy {
    /// Whether a binding in a space with the given state is invoked.
    pub const fn selects(self, active: bool) -> bool {
        match self {
            DispatchPolicy::AllActive => active,
            DispatchPolicy::FirstInactive => !active,
        }
    }

    /// Whether the scan stops after the first selected binding.
    pub const fn stops_after_first(self) -> bool {
        matches!(self, DispatchPolicy::FirstInactive)
    }
}
