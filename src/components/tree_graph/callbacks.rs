use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Browser callbacks owned by one mounted canvas.
///
/// The frame callback re-requests itself through a clone of these slots, so
/// the slots and everything the callbacks capture stay alive until
/// [`CanvasCallbacks::release`] empties them.
pub(crate) struct CanvasCallbacks<C> {
	pub frame: Rc<RefCell<Option<C>>>,
	pub resize: Rc<RefCell<Option<C>>>,
	/// Id of the last requested animation frame.
	pub pending_frame: Rc<Cell<Option<i32>>>,
}

impl<C> Default for CanvasCallbacks<C> {
	fn default() -> Self {
		Self {
			frame: Rc::new(RefCell::new(None)),
			resize: Rc::new(RefCell::new(None)),
			pending_frame: Rc::new(Cell::new(None)),
		}
	}
}

impl<C> Clone for CanvasCallbacks<C> {
	fn clone(&self) -> Self {
		Self {
			frame: self.frame.clone(),
			resize: self.resize.clone(),
			pending_frame: self.pending_frame.clone(),
		}
	}
}

impl<C> CanvasCallbacks<C> {
	/// Cancel the outstanding frame, detach the resize listener and drop both
	/// callbacks. Calling it again does nothing.
	pub fn release(&self, cancel_frame: impl FnOnce(i32), detach_resize: impl FnOnce(&C)) {
		if let Some(id) = self.pending_frame.take() {
			cancel_frame(id);
		}
		let resize = self.resize.borrow_mut().take();
		if let Some(cb) = &resize {
			detach_resize(cb);
		}
		let frame = self.frame.borrow_mut().take();
		drop((resize, frame));
	}
}

#[cfg(test)]
#[path = "callbacks_test.rs"]
mod callbacks_test;
