//! Process-wide library configuration.
//!
//! The only runtime setting is what happens when a buffer cannot be
//! allocated. It is chosen once, before the first matrix is built, and cannot
//! be changed afterwards.
//!
//! ```
//! use densela::config::{alloc_policy, set_alloc_policy, AllocPolicy};
//!
//! set_alloc_policy(AllocPolicy::Abort).unwrap();
//! assert_eq!(alloc_policy(), AllocPolicy::Abort);
//! // A different policy is refused once one is in force.
//! assert_eq!(set_alloc_policy(AllocPolicy::Empty), Err(AllocPolicy::Abort));
//! ```

use core::sync::atomic::{AtomicU8, Ordering};

/// Reaction to a failed buffer allocation in the infallible constructors.
///
/// The `try_*` constructors always report
/// [`LinalgError::AllocationFailure`](crate::linalg::LinalgError::AllocationFailure)
/// regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocPolicy {
    /// Log the failure and terminate the process.
    #[default]
    Abort,
    /// Log the failure and return an empty (zero-sized) value.
    Empty,
}

const UNSET: u8 = 0;
const ABORT: u8 = 1;
const EMPTY: u8 = 2;

static POLICY: AtomicU8 = AtomicU8::new(UNSET);

impl AllocPolicy {
    fn tag(self) -> u8 {
        match self {
            AllocPolicy::Abort => ABORT,
            AllocPolicy::Empty => EMPTY,
        }
    }

    fn from_tag(tag: u8) -> Self {
        match tag {
            EMPTY => AllocPolicy::Empty,
            _ => AllocPolicy::Abort,
        }
    }
}

/// Select the allocation-failure policy for the whole process.
///
/// Succeeds on the first call and on any later call that repeats the policy
/// already in force. Otherwise returns `Err` with the active policy.
pub fn set_alloc_policy(policy: AllocPolicy) -> Result<(), AllocPolicy> {
    match POLICY.compare_exchange(UNSET, policy.tag(), Ordering::AcqRel, Ordering::Acquire) {
        Ok(_) => Ok(()),
        Err(current) if current == policy.tag() => Ok(()),
        Err(current) => Err(AllocPolicy::from_tag(current)),
    }
}

/// The policy in force (`Abort` until one is selected).
pub fn alloc_policy() -> AllocPolicy {
    AllocPolicy::from_tag(POLICY.load(Ordering::Acquire))
}

/// Apply the allocation policy after `what` failed to reserve `bytes`.
///
/// Returns only under [`AllocPolicy::Empty`]; the caller then hands back an
/// empty value.
pub(crate) fn alloc_failed(what: &'static str, bytes: usize) {
    match alloc_policy() {
        AllocPolicy::Abort => {
            log::error!("{}: allocation of {} bytes failed, aborting", what, bytes);
            abort()
        }
        AllocPolicy::Empty => {
            log::error!("{}: allocation of {} bytes failed, returning empty value", what, bytes);
        }
    }
}

#[cfg(feature = "std")]
fn abort() -> ! {
    std::process::abort()
}

#[cfg(not(feature = "std"))]
fn abort() -> ! {
    panic!("allocation failure")
}
