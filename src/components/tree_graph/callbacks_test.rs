use super::*;

type Callback = Box<dyn FnMut()>;

#[test]
fn release_cancels_frame_and_detaches_resize() {
	let callbacks: CanvasCallbacks<&'static str> = CanvasCallbacks::default();
	*callbacks.resize.borrow_mut() = Some("resize");
	*callbacks.frame.borrow_mut() = Some("frame");
	callbacks.pending_frame.set(Some(7));

	let (mut cancelled, mut detached) = (Vec::new(), Vec::new());
	callbacks.release(|id| cancelled.push(id), |cb| detached.push(*cb));

	assert_eq!(cancelled, [7]);
	assert_eq!(detached, ["resize"]);
	assert!(callbacks.frame.borrow().is_none());
	assert!(callbacks.resize.borrow().is_none());
	assert_eq!(callbacks.pending_frame.get(), None);
}

#[test]
fn second_release_does_nothing() {
	let callbacks: CanvasCallbacks<&'static str> = CanvasCallbacks::default();
	*callbacks.resize.borrow_mut() = Some("resize");
	callbacks.pending_frame.set(Some(1));
	callbacks.release(|_| {}, |_| {});

	let calls = Cell::new(0);
	callbacks.release(|_| calls.set(calls.get() + 1), |_| calls.set(calls.get() + 1));
	assert_eq!(calls.get(), 0);
}

#[test]
fn release_frees_self_requesting_frame() {
	let callbacks: CanvasCallbacks<Callback> = CanvasCallbacks::default();
	let captured = Rc::new(());
	let (inner, held) = (callbacks.clone(), captured.clone());
	*callbacks.frame.borrow_mut() = Some(Box::new(move || {
		let _ = (inner.frame.borrow().is_some(), &held);
	}));
	let slots = Rc::downgrade(&callbacks.frame);
	assert_eq!(Rc::strong_count(&captured), 2);

	callbacks.release(|_| {}, |_| {});
	assert_eq!(Rc::strong_count(&captured), 1);
	drop(callbacks);
	assert!(slots.upgrade().is_none());
}
