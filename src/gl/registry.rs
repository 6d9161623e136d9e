//! The single slot holding the backend the free dispatch functions forward to.
//!
//! There is one slot for the whole process and it starts out empty. The
//! thread owning the context installs a backend once, before any thread
//! issues calls. Installing again drops the previous backend, then installs
//! the new one. Dispatching before anything was installed is a programming
//! error and panics.
//!
//! The lock only guards the slot itself. A call grabs its own reference to
//! the active dispatcher and releases the lock before forwarding, so a call
//! (or a diagnostic sink it triggers) may install another backend. The
//! replaced backend then lives on until that call returns.

use std::sync::{Arc, PoisonError, RwLock};

use super::backends::headless::HeadlessFunctions;
use super::dispatcher::{BackendKind, Dispatcher};
use super::GlFunctions;

static ACTIVE: RwLock<Option<Arc<Dispatcher>>> = RwLock::new(None);

fn take() -> Option<Arc<Dispatcher>> {
    ACTIVE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

fn current() -> Option<Arc<Dispatcher>> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Installs `dispatcher` as the active one, dropping the previous one first.
pub fn install_dispatcher(dispatcher: Dispatcher) {
    let kind = dispatcher.kind();

    match take() {
        Some(previous) => {
            info!("Replacing {} backend with {} backend.", previous.kind(), kind);
            drop(previous);
        }
        None => info!("Installing {} backend.", kind),
    }

    let raced = ACTIVE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(Arc::new(dispatcher));

    if let Some(raced) = raced {
        warn!("[GL] {} backend was installed concurrently and got replaced.", raced.kind());
    }
}

/// Installs an arbitrary implementation of [`GlFunctions`].
pub fn install(kind: BackendKind, functions: Box<dyn GlFunctions>) {
    install_dispatcher(Dispatcher::new(kind, functions));
}

/// Installs the backend forwarding to the driver-loaded function table.
///
/// The `gl` loader must have run for the current context (see
/// `DirectFunctions::load_with`), otherwise this fails and the registry is
/// left untouched.
#[cfg(feature = "direct")]
pub fn install_direct() -> crate::errors::Result<()> {
    install_dispatcher(Dispatcher::direct()?);
    Ok(())
}

/// Installs a backend forwarding to the function table of `ctx`. A host
/// backend installed before is dropped.
#[cfg(feature = "host")]
pub fn install_host<C>(ctx: &C)
where
    C: super::backends::host::HostContext + ?Sized,
{
    install_dispatcher(Dispatcher::host(ctx));
}

/// Installs a headless backend and returns a handle sharing its bookkeeping.
pub fn install_headless() -> HeadlessFunctions {
    let functions = HeadlessFunctions::new();
    install_dispatcher(Dispatcher::headless(functions.clone()));
    functions
}

/// Drops the active backend, leaving the registry empty as it was at
/// startup. Call it before the context behind the backend is destroyed.
pub fn uninstall() -> Option<BackendKind> {
    take().map(|previous| {
        info!("Uninstalled {} backend.", previous.kind());
        previous.kind()
    })
}

/// The kind of the active backend, if any.
pub fn active_backend() -> Option<BackendKind> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(|v| v.kind())
}

/// Runs `f` against the active dispatcher. The registry is not locked while
/// `f` runs.
///
/// # Panics
///
/// If no backend has been installed.
pub(crate) fn with_active<T, F>(call: &'static str, f: F) -> T
where
    F: FnOnce(&Dispatcher) -> T,
{
    match current() {
        Some(dispatcher) => f(&dispatcher),
        None => panic!(
            "[GL] `{}` dispatched before a backend was installed.",
            call
        ),
    }
}
