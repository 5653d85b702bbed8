//! Shared handle that owns a dashboard's tree and terminal.
//!
//! All mutation and drawing goes through one lock, so a redraw never observes
//! a tree that is halfway through an update.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::container::{ContainerTree, DrawConfig, Drawer};
use crate::error::RuntimeError;
use crate::geometry::{Area, Size};
use crate::logging::{LogLevel, event_with_fields, json_kv};
use crate::terminal::Terminal;

pub type RuntimeResult<T> = std::result::Result<T, RuntimeError>;

struct DashboardState<T> {
    tree: ContainerTree,
    terminal: T,
    drawer: Drawer,
}

/// Cloneable handle to a container tree bound to a terminal.
///
/// Clones share the same state. Event sources and timers can hold their own
/// clone and call [`Dashboard::update`] or [`Dashboard::redraw`] from any
/// thread.
pub struct Dashboard<T: Terminal> {
    inner: Arc<Mutex<DashboardState<T>>>,
}

impl<T: Terminal> Clone for Dashboard<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Terminal> Dashboard<T> {
    pub fn new(tree: ContainerTree, terminal: T, config: DrawConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(DashboardState {
                tree,
                terminal,
                drawer: Drawer::new(config),
            })),
        }
    }

    fn lock(&self) -> RuntimeResult<MutexGuard<'_, DashboardState<T>>> {
        self.inner.lock().map_err(|_| RuntimeError::Poisoned)
    }

    /// Run `f` against the tree while holding the dashboard lock.
    pub fn update<F, R>(&self, f: F) -> RuntimeResult<R>
    where
        F: FnOnce(&mut ContainerTree) -> R,
    {
        let mut state = self.lock()?;
        Ok(f(&mut state.tree))
    }

    /// Read-only access to the terminal, mostly for inspecting headless frames.
    pub fn with_terminal<F, R>(&self, f: F) -> RuntimeResult<R>
    where
        F: FnOnce(&T) -> R,
    {
        let state = self.lock()?;
        Ok(f(&state.terminal))
    }

    /// Clear the terminal, draw the whole tree and flush.
    ///
    /// The frame is flushed even when some containers failed, so healthy
    /// containers stay visible; the failures are returned afterwards.
    pub fn redraw(&self) -> RuntimeResult<()> {
        let mut state = self.lock()?;
        state.redraw()
    }

    /// Resize the terminal surface and the tree, then redraw.
    pub fn resize(&self, size: Size) -> RuntimeResult<()> {
        let mut state = self.lock()?;
        state.terminal.resize(size)?;
        state.tree.resize(Area::from_size(size));

        if let Some(logger) = state.drawer.config().logger.as_ref() {
            let event = event_with_fields(
                LogLevel::Info,
                &state.drawer.config().log_target,
                "terminal_resized",
                [
                    json_kv("width", size.width),
                    json_kv("height", size.height),
                ],
            );
            logger.log_event(event).ok();
        }
        state.redraw()
    }
}

impl<T: Terminal> DashboardState<T> {
    fn redraw(&mut self) -> RuntimeResult<()> {
        self.terminal.clear()?;
        let drawn = self.drawer.draw_tree(&self.tree, &mut self.terminal);
        self.terminal.flush()?;
        drawn.map_err(RuntimeError::from)
    }
}
